//! Language lexicon: the read-only table behind every lookup.
//!
//! The lexicon maps alpha-3 codes, English names, native names and a few
//! loose aliases onto canonical two-letter codes. It is built once on first
//! access through `OnceLock` and never mutated afterwards, so any number of
//! threads can read it without locking.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use tracing::debug;

/// Version of the built-in lexicon table.
///
/// Bump whenever entries are added, removed or remapped so that callers
/// persisting codes can tell which table produced them.
pub const LEXICON_VERSION: &str = "2026.1";

/// One language known to the lexicon.
#[derive(Debug, Clone)]
pub struct LexiconEntry {
    /// ISO 639-1 code (e.g., "sv")
    pub code: &'static str,

    /// English name (e.g., "Swedish")
    pub name: &'static str,

    /// Names of the language in the language itself (e.g., "svenska")
    pub native_names: &'static [&'static str],

    /// Three-letter designators, terminology and bibliographic forms first
    pub alpha3: &'static [&'static str],

    /// Loose spellings seen in the wild (e.g., "sweden")
    pub aliases: &'static [&'static str],
}

/// Global lexicon of recognized languages.
pub struct LanguageLexicon {
    entries: Vec<LexiconEntry>,
    by_code: HashMap<&'static str, usize>,
    by_alpha3: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

/// Global lexicon instance (initialized lazily)
static LEXICON: OnceLock<LanguageLexicon> = OnceLock::new();

impl LanguageLexicon {
    /// Get the global lexicon, building it on first call.
    pub fn get() -> &'static LanguageLexicon {
        LEXICON.get_or_init(|| LanguageLexicon::from_entries(default_entries()))
    }

    /// Build a lexicon from an explicit entry list.
    ///
    /// Entries with a malformed code are skipped. When two entries claim the
    /// same alpha-3 code or name, the earlier entry keeps it.
    pub fn from_entries(entries: Vec<LexiconEntry>) -> Self {
        let mut kept = Vec::with_capacity(entries.len());
        let mut by_code = HashMap::new();
        let mut by_alpha3 = HashMap::new();
        let mut by_name = HashMap::new();

        for entry in entries {
            if !is_two_letter_code(entry.code) {
                debug!(code = entry.code, "Skipping lexicon entry with malformed code");
                continue;
            }
            if by_code.contains_key(entry.code) {
                debug!(code = entry.code, "Skipping duplicate lexicon entry");
                continue;
            }

            let idx = kept.len();
            by_code.insert(entry.code, idx);

            for &alpha3 in entry.alpha3 {
                if alpha3.len() != 3 || !alpha3.bytes().all(|b| b.is_ascii_alphabetic()) {
                    debug!(code = entry.code, alpha3, "Skipping malformed alpha-3 code");
                    continue;
                }
                by_alpha3.entry(alpha3.to_ascii_lowercase()).or_insert(idx);
            }

            let names = std::iter::once(entry.name)
                .chain(entry.native_names.iter().copied())
                .chain(entry.aliases.iter().copied());
            for name in names {
                by_name.entry(name.to_lowercase()).or_insert(idx);
            }

            kept.push(entry);
        }

        Self {
            entries: kept,
            by_code,
            by_alpha3,
            by_name,
        }
    }

    /// Version of the table this lexicon was built from.
    pub fn version(&self) -> &'static str {
        LEXICON_VERSION
    }

    /// Look up an entry by its two-letter code (case-insensitive).
    pub fn by_code(&self, code: &str) -> Option<&LexiconEntry> {
        if code.len() != 2 {
            return None;
        }
        let lower = code.to_ascii_lowercase();
        self.by_code
            .get(lower.as_str())
            .map(|&idx| &self.entries[idx])
    }

    /// Look up an entry by a three-letter designator (case-insensitive).
    pub fn by_alpha3(&self, alpha3: &str) -> Option<&LexiconEntry> {
        if alpha3.len() != 3 {
            return None;
        }
        let lower = alpha3.to_ascii_lowercase();
        self.by_alpha3
            .get(lower.as_str())
            .map(|&idx| &self.entries[idx])
    }

    /// Look up an entry by English name, native name or alias.
    pub fn by_name(&self, name: &str) -> Option<&LexiconEntry> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&idx| &self.entries[idx])
    }

    /// Whether `code` is one of the recognized two-letter codes.
    pub fn contains_code(&self, code: &str) -> bool {
        self.by_code(code).is_some()
    }

    /// All entries, in table order.
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Number of languages in the lexicon.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every distinct two-letter code, in table order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.code)
    }

    /// Every distinct alpha-3 code known to the lexicon, lowercased.
    pub fn alpha3_codes(&self) -> HashSet<&str> {
        self.by_alpha3.keys().map(String::as_str).collect()
    }
}

/// True for exactly two lowercase ASCII letters.
pub(crate) fn is_two_letter_code(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_lowercase())
}

macro_rules! entry {
    ($code:literal, $name:literal, [$($native:literal),*], [$($a3:literal),*], [$($alias:literal),*]) => {
        LexiconEntry {
            code: $code,
            name: $name,
            native_names: &[$($native),*],
            alpha3: &[$($a3),*],
            aliases: &[$($alias),*],
        }
    };
}

/// The built-in ISO 639-1 table.
///
/// Multi-word English names are kept for display; single-word aliases make
/// those languages reachable from whitespace-split input.
fn default_entries() -> Vec<LexiconEntry> {
    vec![
        entry!("aa", "Afar", ["qafaraf"], ["aar"], []),
        entry!("ab", "Abkhazian", ["аҧсуа"], ["abk"], ["abkhaz"]),
        entry!("ae", "Avestan", [], ["ave"], []),
        entry!("af", "Afrikaans", [], ["afr"], []),
        entry!("ak", "Akan", [], ["aka"], []),
        entry!("am", "Amharic", ["አማርኛ"], ["amh"], []),
        entry!("an", "Aragonese", ["aragonés"], ["arg"], []),
        entry!("ar", "Arabic", ["العربية"], ["ara"], []),
        entry!("as", "Assamese", ["অসমীয়া"], ["asm"], []),
        entry!("av", "Avaric", [], ["ava"], []),
        entry!("ay", "Aymara", ["aymar"], ["aym"], []),
        entry!("az", "Azerbaijani", ["azərbaycan"], ["aze"], ["azeri"]),
        entry!("ba", "Bashkir", ["башҡорт"], ["bak"], []),
        entry!("be", "Belarusian", ["беларуская"], ["bel"], ["byelorussian"]),
        entry!("bg", "Bulgarian", ["български"], ["bul"], []),
        entry!("bh", "Bihari", [], ["bih"], []),
        entry!("bi", "Bislama", [], ["bis"], []),
        entry!("bm", "Bambara", ["bamanankan"], ["bam"], []),
        entry!("bn", "Bengali", ["বাংলা"], ["ben"], ["bangla"]),
        entry!("bo", "Tibetan", ["བོད་ཡིག"], ["bod", "tib"], []),
        entry!("br", "Breton", ["brezhoneg"], ["bre"], []),
        entry!("bs", "Bosnian", ["bosanski"], ["bos"], []),
        entry!("ca", "Catalan", ["català"], ["cat"], ["catala"]),
        entry!("ce", "Chechen", ["нохчийн"], ["che"], []),
        entry!("ch", "Chamorro", ["chamoru"], ["cha"], []),
        entry!("co", "Corsican", ["corsu"], ["cos"], []),
        entry!("cr", "Cree", [], ["cre"], []),
        entry!("cs", "Czech", ["čeština"], ["ces", "cze"], ["cestina"]),
        entry!("cu", "Church Slavic", [], ["chu"], ["slavonic"]),
        entry!("cv", "Chuvash", ["чӑваш"], ["chv"], []),
        entry!("cy", "Welsh", ["cymraeg"], ["cym", "wel"], []),
        entry!("da", "Danish", ["dansk"], ["dan"], []),
        entry!("de", "German", ["deutsch"], ["deu", "ger"], []),
        entry!("dv", "Divehi", [], ["div"], ["dhivehi", "maldivian"]),
        entry!("dz", "Dzongkha", [], ["dzo"], []),
        entry!("ee", "Ewe", ["eʋegbe"], ["ewe"], []),
        entry!("el", "Greek", ["ελληνικά"], ["ell", "gre"], []),
        entry!("en", "English", [], ["eng"], []),
        entry!("eo", "Esperanto", [], ["epo"], []),
        entry!("es", "Spanish", ["español", "castellano"], ["spa"], ["espanol", "castilian"]),
        entry!("et", "Estonian", ["eesti"], ["est"], []),
        entry!("eu", "Basque", ["euskara"], ["eus", "baq"], []),
        entry!("fa", "Persian", ["فارسی"], ["fas", "per"], ["farsi"]),
        entry!("ff", "Fulah", ["fulfulde"], ["ful"], ["fula"]),
        entry!("fi", "Finnish", ["suomi"], ["fin"], []),
        entry!("fj", "Fijian", [], ["fij"], []),
        entry!("fo", "Faroese", ["føroyskt"], ["fao"], []),
        entry!("fr", "French", ["français"], ["fra", "fre"], ["francais"]),
        entry!("fy", "Western Frisian", ["frysk"], ["fry"], ["frisian"]),
        entry!("ga", "Irish", ["gaeilge"], ["gle"], []),
        entry!("gd", "Scottish Gaelic", ["gàidhlig"], ["gla"], ["gaelic"]),
        entry!("gl", "Galician", ["galego"], ["glg"], []),
        entry!("gn", "Guarani", ["avañe'ẽ"], ["grn"], []),
        entry!("gu", "Gujarati", ["ગુજરાતી"], ["guj"], []),
        entry!("gv", "Manx", ["gaelg"], ["glv"], []),
        entry!("ha", "Hausa", [], ["hau"], []),
        entry!("he", "Hebrew", ["עברית"], ["heb"], []),
        entry!("hi", "Hindi", ["हिन्दी"], ["hin"], []),
        entry!("ho", "Hiri Motu", [], ["hmo"], []),
        entry!("hr", "Croatian", ["hrvatski"], ["hrv"], []),
        entry!("ht", "Haitian", ["kreyòl"], ["hat"], []),
        entry!("hu", "Hungarian", ["magyar"], ["hun"], []),
        entry!("hy", "Armenian", ["հայերեն"], ["hye", "arm"], []),
        entry!("hz", "Herero", ["otjiherero"], ["her"], []),
        entry!("ia", "Interlingua", [], ["ina"], []),
        entry!("id", "Indonesian", [], ["ind"], ["indonesia"]),
        entry!("ie", "Interlingue", [], ["ile"], ["occidental"]),
        entry!("ig", "Igbo", [], ["ibo"], []),
        entry!("ii", "Sichuan Yi", ["nuosu"], ["iii"], []),
        entry!("ik", "Inupiaq", ["iñupiaq"], ["ipk"], []),
        entry!("io", "Ido", [], ["ido"], []),
        entry!("is", "Icelandic", ["íslenska"], ["isl", "ice"], ["islenska"]),
        entry!("it", "Italian", ["italiano"], ["ita"], []),
        entry!("iu", "Inuktitut", [], ["iku"], []),
        entry!("ja", "Japanese", ["日本語"], ["jpn"], []),
        entry!("jv", "Javanese", ["jawa"], ["jav"], []),
        entry!("ka", "Georgian", ["ქართული"], ["kat", "geo"], []),
        entry!("kg", "Kongo", ["kikongo"], ["kon"], []),
        entry!("ki", "Kikuyu", ["gĩkũyũ"], ["kik"], []),
        entry!("kj", "Kuanyama", [], ["kua"], []),
        entry!("kk", "Kazakh", ["қазақ"], ["kaz"], []),
        entry!("kl", "Kalaallisut", [], ["kal"], ["greenlandic"]),
        entry!("km", "Khmer", ["ខ្មែរ"], ["khm"], []),
        entry!("kn", "Kannada", ["ಕನ್ನಡ"], ["kan"], []),
        entry!("ko", "Korean", ["한국어"], ["kor"], []),
        entry!("kr", "Kanuri", [], ["kau"], []),
        entry!("ks", "Kashmiri", [], ["kas"], []),
        entry!("ku", "Kurdish", ["kurdî"], ["kur"], []),
        entry!("kv", "Komi", [], ["kom"], []),
        entry!("kw", "Cornish", ["kernewek"], ["cor"], []),
        entry!("ky", "Kirghiz", ["кыргызча"], ["kir"], ["kyrgyz"]),
        entry!("la", "Latin", ["latina"], ["lat"], []),
        entry!("lb", "Luxembourgish", ["lëtzebuergesch"], ["ltz"], ["letzeburgesch"]),
        entry!("lg", "Ganda", ["luganda"], ["lug"], []),
        entry!("li", "Limburgish", ["limburgs"], ["lim"], []),
        entry!("ln", "Lingala", [], ["lin"], []),
        entry!("lo", "Lao", ["ລາວ"], ["lao"], []),
        entry!("lt", "Lithuanian", ["lietuvių"], ["lit"], []),
        entry!("lu", "Luba-Katanga", ["tshiluba"], ["lub"], []),
        entry!("lv", "Latvian", ["latviešu"], ["lav"], []),
        entry!("mg", "Malagasy", [], ["mlg"], []),
        entry!("mh", "Marshallese", [], ["mah"], []),
        entry!("mi", "Maori", ["māori"], ["mri", "mao"], []),
        entry!("mk", "Macedonian", ["македонски"], ["mkd", "mac"], []),
        entry!("ml", "Malayalam", ["മലയാളം"], ["mal"], []),
        entry!("mn", "Mongolian", ["монгол"], ["mon"], []),
        entry!("mr", "Marathi", ["मराठी"], ["mar"], []),
        entry!("ms", "Malay", ["melayu"], ["msa", "may"], []),
        entry!("mt", "Maltese", ["malti"], ["mlt"], []),
        entry!("my", "Burmese", ["မြန်မာ"], ["mya", "bur"], []),
        entry!("na", "Nauru", [], ["nau"], ["nauruan"]),
        entry!("nb", "Norwegian Bokmål", ["bokmål"], ["nob"], ["bokmal"]),
        entry!("nd", "North Ndebele", [], ["nde"], []),
        entry!("ne", "Nepali", ["नेपाली"], ["nep"], []),
        entry!("ng", "Ndonga", [], ["ndo"], []),
        entry!("nl", "Dutch", ["nederlands"], ["nld", "dut"], ["flemish"]),
        entry!("nn", "Norwegian Nynorsk", ["nynorsk"], ["nno"], []),
        entry!("no", "Norwegian", ["norsk"], ["nor"], []),
        entry!("nr", "South Ndebele", [], ["nbl"], []),
        entry!("nv", "Navajo", ["diné"], ["nav"], []),
        entry!("ny", "Chichewa", [], ["nya"], ["nyanja", "chewa"]),
        entry!("oc", "Occitan", [], ["oci"], []),
        entry!("oj", "Ojibwa", [], ["oji"], ["ojibwe"]),
        entry!("om", "Oromo", ["oromoo"], ["orm"], []),
        entry!("or", "Oriya", ["ଓଡ଼ିଆ"], ["ori"], ["odia"]),
        entry!("os", "Ossetian", ["ирон"], ["oss"], ["ossetic"]),
        entry!("pa", "Punjabi", ["ਪੰਜਾਬੀ"], ["pan"], ["panjabi"]),
        entry!("pi", "Pali", [], ["pli"], []),
        entry!("pl", "Polish", ["polski"], ["pol"], []),
        entry!("ps", "Pashto", ["پښتو"], ["pus"], ["pushto"]),
        entry!("pt", "Portuguese", ["português"], ["por"], ["portugues"]),
        entry!("qu", "Quechua", ["runasimi"], ["que"], []),
        entry!("rm", "Romansh", ["rumantsch"], ["roh"], []),
        entry!("rn", "Rundi", ["kirundi"], ["run"], []),
        entry!("ro", "Romanian", ["română"], ["ron", "rum"], ["romana", "moldavian"]),
        entry!("ru", "Russian", ["русский"], ["rus"], []),
        entry!("rw", "Kinyarwanda", [], ["kin"], []),
        entry!("sa", "Sanskrit", ["संस्कृतम्"], ["san"], []),
        entry!("sc", "Sardinian", ["sardu"], ["srd"], []),
        entry!("sd", "Sindhi", [], ["snd"], []),
        entry!("se", "Northern Sami", ["davvisámegiella"], ["sme"], ["sami"]),
        entry!("sg", "Sango", ["sängö"], ["sag"], []),
        entry!("si", "Sinhala", ["සිංහල"], ["sin"], ["sinhalese"]),
        entry!("sk", "Slovak", ["slovenčina"], ["slk", "slo"], ["slovencina"]),
        entry!("sl", "Slovenian", ["slovenščina"], ["slv"], ["slovene"]),
        entry!("sm", "Samoan", [], ["smo"], []),
        entry!("sn", "Shona", ["chishona"], ["sna"], []),
        entry!("so", "Somali", ["soomaali"], ["som"], []),
        entry!("sq", "Albanian", ["shqip"], ["sqi", "alb"], []),
        entry!("sr", "Serbian", ["српски", "srpski"], ["srp"], []),
        entry!("ss", "Swati", ["siswati"], ["ssw"], []),
        entry!("st", "Southern Sotho", ["sesotho"], ["sot"], []),
        entry!("su", "Sundanese", [], ["sun"], []),
        entry!("sv", "Swedish", ["svenska"], ["swe", "sve"], ["sweden"]),
        entry!("sw", "Swahili", ["kiswahili"], ["swa"], []),
        entry!("ta", "Tamil", ["தமிழ்"], ["tam"], []),
        entry!("te", "Telugu", ["తెలుగు"], ["tel"], []),
        entry!("tg", "Tajik", ["тоҷикӣ"], ["tgk"], []),
        entry!("th", "Thai", ["ไทย"], ["tha"], []),
        entry!("ti", "Tigrinya", ["ትግርኛ"], ["tir"], []),
        entry!("tk", "Turkmen", ["türkmen"], ["tuk"], []),
        entry!("tl", "Tagalog", [], ["tgl"], ["filipino"]),
        entry!("tn", "Tswana", ["setswana"], ["tsn"], []),
        entry!("to", "Tonga", [], ["ton"], ["tongan"]),
        entry!("tr", "Turkish", ["türkçe"], ["tur"], ["turkce"]),
        entry!("ts", "Tsonga", ["xitsonga"], ["tso"], []),
        entry!("tt", "Tatar", ["татар"], ["tat"], []),
        entry!("tw", "Twi", [], ["twi"], []),
        entry!("ty", "Tahitian", [], ["tah"], []),
        entry!("ug", "Uighur", [], ["uig"], ["uyghur"]),
        entry!("uk", "Ukrainian", ["українська"], ["ukr"], []),
        entry!("ur", "Urdu", ["اردو"], ["urd"], []),
        entry!("uz", "Uzbek", ["oʻzbek"], ["uzb"], []),
        entry!("ve", "Venda", ["tshivenḓa"], ["ven"], []),
        entry!("vi", "Vietnamese", ["tiếng việt"], ["vie"], []),
        entry!("vo", "Volapük", [], ["vol"], ["volapuk"]),
        entry!("wa", "Walloon", ["walon"], ["wln"], []),
        entry!("wo", "Wolof", [], ["wol"], []),
        entry!("xh", "Xhosa", ["isixhosa"], ["xho"], []),
        entry!("yi", "Yiddish", ["ייִדיש"], ["yid"], []),
        entry!("yo", "Yoruba", ["yorùbá"], ["yor"], []),
        entry!("za", "Zhuang", [], ["zha"], ["chuang"]),
        entry!("zh", "Chinese", ["中文"], ["zho", "chi"], []),
        entry!("zu", "Zulu", ["isizulu"], ["zul"], []),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Singleton Tests ====================

    #[test]
    fn test_lexicon_get_returns_singleton() {
        let lexicon1 = LanguageLexicon::get();
        let lexicon2 = LanguageLexicon::get();

        assert!(std::ptr::eq(lexicon1, lexicon2));
    }

    #[test]
    fn test_lexicon_version() {
        assert_eq!(LanguageLexicon::get().version(), LEXICON_VERSION);
    }

    // ==================== Table Invariant Tests ====================

    #[test]
    fn test_every_code_is_two_lowercase_letters() {
        for code in LanguageLexicon::get().codes() {
            assert!(is_two_letter_code(code), "bad code {:?}", code);
        }
    }

    #[test]
    fn test_codes_are_unique() {
        let lexicon = LanguageLexicon::get();
        let unique: HashSet<_> = lexicon.codes().collect();
        assert_eq!(unique.len(), lexicon.len());
    }

    #[test]
    fn test_every_alpha3_is_three_lowercase_letters() {
        for entry in LanguageLexicon::get().entries() {
            for alpha3 in entry.alpha3 {
                assert_eq!(alpha3.len(), 3, "bad alpha-3 {:?}", alpha3);
                assert!(alpha3.bytes().all(|b| b.is_ascii_lowercase()));
            }
        }
    }

    #[test]
    fn test_alpha3_codes_are_not_shared() {
        let mut seen = HashSet::new();
        for entry in LanguageLexicon::get().entries() {
            for alpha3 in entry.alpha3 {
                assert!(seen.insert(*alpha3), "duplicate alpha-3 {:?}", alpha3);
            }
        }
    }

    #[test]
    fn test_covers_full_iso_639_1_set() {
        assert_eq!(LanguageLexicon::get().len(), 184);
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_by_code_is_case_insensitive() {
        let lexicon = LanguageLexicon::get();
        assert_eq!(lexicon.by_code("SV").map(|e| e.code), Some("sv"));
        assert_eq!(lexicon.by_code("Sv").map(|e| e.code), Some("sv"));
        assert_eq!(lexicon.by_code("sv").map(|e| e.name), Some("Swedish"));
    }

    #[test]
    fn test_by_code_rejects_unknown_and_misshapen() {
        let lexicon = LanguageLexicon::get();
        assert!(lexicon.by_code("dk").is_none());
        assert!(lexicon.by_code("swe").is_none());
        assert!(lexicon.by_code("").is_none());
    }

    #[test]
    fn test_by_alpha3_swedish_variants() {
        let lexicon = LanguageLexicon::get();
        for input in ["SWE", "swe", "SVE", "Sve"] {
            assert_eq!(lexicon.by_alpha3(input).map(|e| e.code), Some("sv"), "{}", input);
        }
        assert_eq!(lexicon.by_alpha3("ENG").map(|e| e.code), Some("en"));
    }

    #[test]
    fn test_by_alpha3_bibliographic_forms() {
        let lexicon = LanguageLexicon::get();
        assert_eq!(lexicon.by_alpha3("ger").map(|e| e.code), Some("de"));
        assert_eq!(lexicon.by_alpha3("fre").map(|e| e.code), Some("fr"));
        assert_eq!(lexicon.by_alpha3("chi").map(|e| e.code), Some("zh"));
    }

    #[test]
    fn test_alpha3_codes_set() {
        let codes = LanguageLexicon::get().alpha3_codes();
        assert!(codes.contains("swe"));
        assert!(codes.contains("sve"));
        assert!(!codes.contains("bed"));
    }

    #[test]
    fn test_by_name_english_native_and_alias() {
        let lexicon = LanguageLexicon::get();
        assert_eq!(lexicon.by_name("Swedish").map(|e| e.code), Some("sv"));
        assert_eq!(lexicon.by_name("SVENSKA").map(|e| e.code), Some("sv"));
        assert_eq!(lexicon.by_name("sweden").map(|e| e.code), Some("sv"));
        assert_eq!(lexicon.by_name("Français").map(|e| e.code), Some("fr"));
        assert_eq!(lexicon.by_name("sami").map(|e| e.code), Some("se"));
    }

    #[test]
    fn test_name_lookup_is_exact() {
        // Bokmål and Nynorsk names start with "Norwegian"; only "no" owns it.
        let lexicon = LanguageLexicon::get();
        assert_eq!(lexicon.by_name("norwegian").map(|e| e.code), Some("no"));
    }

    #[test]
    fn test_by_name_unknown() {
        let lexicon = LanguageLexicon::get();
        assert!(lexicon.by_name("torp").is_none());
        assert!(lexicon.by_name("").is_none());
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_from_entries_skips_malformed_and_duplicates() {
        let lexicon = LanguageLexicon::from_entries(vec![
            entry!("sv", "Swedish", [], ["swe"], []),
            entry!("SV", "Shouting Swedish", [], [], []),
            entry!("xyz", "Too Long", [], [], []),
            entry!("sv", "Duplicate", [], [], []),
        ]);

        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.by_code("sv").map(|e| e.name), Some("Swedish"));
        assert!(lexicon.by_name("duplicate").is_none());
    }

    #[test]
    fn test_from_entries_first_claim_wins() {
        let lexicon = LanguageLexicon::from_entries(vec![
            entry!("no", "Norwegian", ["norsk"], ["nor"], []),
            entry!("nb", "Bokmal", ["norsk"], ["nor"], []),
        ]);

        assert_eq!(lexicon.by_name("norsk").map(|e| e.code), Some("no"));
        assert_eq!(lexicon.by_alpha3("nor").map(|e| e.code), Some("no"));
    }

    #[test]
    fn test_from_entries_folds_alpha3_case() {
        let lexicon = LanguageLexicon::from_entries(vec![
            entry!("fi", "Finnish", [], ["FIN"], []),
            entry!("sv", "Swedish", [], ["Swe", "sw3", "swed"], []),
        ]);

        assert_eq!(lexicon.by_alpha3("FIN").map(|e| e.code), Some("fi"));
        assert_eq!(lexicon.by_alpha3("fin").map(|e| e.code), Some("fi"));
        assert_eq!(lexicon.by_alpha3("swe").map(|e| e.code), Some("sv"));
        assert!(lexicon.by_alpha3("sw3").is_none());
        assert_eq!(lexicon.alpha3_codes().len(), 2);
    }

    #[test]
    fn test_empty_lexicon() {
        let lexicon = LanguageLexicon::from_entries(Vec::new());
        assert!(lexicon.is_empty());
        assert!(!lexicon.contains_code("en"));
    }
}
