// Static IPA data tables for German morphs, letters, and letter groups.
//
// Values are hand-curated transcription data carried over verbatim from the
// project's pronunciation tables, quirks included. A lookup miss against
// any of these is a normal outcome for the rule engine, never an error.

/// Separable and inseparable verb prefixes with their IPA values.
///
/// Accented prefixes carry a primary stress marker in their value; the
/// inseparable ones (listed in [`INSEPARABLE_PREFIXES`]) do not. "vorbei"
/// keeps its stress mid-string.
pub(crate) const PREFIXES: &[(&str, &str)] = &[
    ("ab", "ˈʔap"),
    ("an", "ˈʔan"),
    ("auf", "ˈʔaof"),
    ("aus", "ˈʔaos"),
    ("be", "bə"),
    ("da", "da"),
    ("ein", "ˈʔaen"),
    ("emp", "ʔɛmp"),
    ("ent", "ʔɛnt"),
    ("er", "ʔɛːɐ"),
    ("fern", "ˈfɛɾn"),
    ("fort", "ˈfɔɾt"),
    ("ge", "gə"),
    ("her", "ˈheːɐ\u{032F}"),
    ("hin", "ˈhɪn"),
    ("miss", "ˈmɪs"),
    ("mit", "ˈmɪt"),
    ("nach", "ˈnax"),
    ("um", "ˈʔʊm"),
    ("un", "ˈʔʊn"),
    ("vor", "ˈfoːɐ\u{032F}"),
    ("vorbei", "foːɐ\u{032F}ˈbae"),
    ("ver", "fɛːɐ\u{032F}"),
    ("weg", "ˈvɛk"),
    ("zer", "tsɛːɐ\u{032F}"),
    ("zu", "ˈtsuː"),
];

/// The unaccented prefixes that never detach from their verb.
pub(crate) const INSEPARABLE_PREFIXES: &[&str] =
    &["be", "emp", "ent", "er", "ge", "ver", "zer"];

/// Unstressed suffixes and endings with their IPA values.
pub(crate) const UNSTRESSED_SUFFIXES: &[(&str, &str)] = &[
    ("bar", "baːɐ\u{032F}"),
    ("chen", "ç\u{0258}n"),
    ("haft", "haft"),
    ("heit", "haet"),
    ("keit", "kaet"),
    ("lein", "laen"),
    ("lich", "lɪç"),
    ("ling", "lɪŋ"),
    ("los", "loːs"),
    ("nis", "nɪs"),
    ("sal", "zaːl"),
    ("sam", "zaːl"),
    ("schaft", "ʃaft"),
    ("sis", "zɪs"),
    ("tum", "tuːm"),
    ("e", "ə"),
    ("ei", "ae"),
    ("er", "ɐ\u{032F}"),
    ("en", "ən"),
    ("em", "əm"),
    ("es", "əs"),
    ("et", "ət"),
    ("ig", "ɪç"),
    ("in", "ɪn"),
    ("ung", "ʊŋ"),
];

/// Stress-bearing suffixes, mostly of Romance and Greek origin.
///
/// The "ie" value keeps the source data's unresolved dual form; telling the
/// Greek words from the Latin ones apart needs etymology we do not have.
pub(crate) const STRESSED_SUFFIXES: &[(&str, &str)] = &[
    ("al", "al"),
    ("an", "an"),
    ("ar", "aɽ"),
    ("ant", "ɑnt"),
    ("anz", "ants"),
    ("ast", "ast"),
    ("ent", "ɛnt"),
    ("enz", "ents"),
    ("ett", "kɛt"),
    ("ion", "\u{012D}oːn"),
    ("ie", "iː/jə"),
    ("ien", "iːən"),
    ("ieren", "iːɾen"),
    ("iere", "iːɾe"),
    ("ierst", "iːɾst"),
    ("iert", "iːɾt"),
    ("ier", "iːɐ\u{032F}"),
    ("il", "iːl"),
    ("ismus", "ɪsmʊs"),
    ("ist", "ɪst"),
    ("it", "iːt"),
    ("iv", "iːf"),
    ("on", "oːn"),
    ("ur", "uːɐ"),
    ("ment", "mɛnt"),
    ("tät", "ˈtɛːt"),
];

/// Closed (tense) vowel qualities.
pub(crate) const CLOSED_VOWELS: &[(char, &str)] = &[
    ('a', "ɑ"),
    ('e', "e"),
    ('i', "i"),
    ('o', "o"),
    ('u', "u"),
    ('y', "y"),
    ('ä', "ɛ"),
    ('ë', "e"),
    ('ï', "i"),
    ('ö', "ø"),
    ('ü', "y"),
];

/// Open (lax) vowel qualities.
pub(crate) const OPEN_VOWELS: &[(char, &str)] = &[
    ('a', "a"),
    ('e', "ɛ"),
    ('i', "ɪ"),
    ('o', "ɔ"),
    ('u', "ʊ"),
    ('y', "ʏ"),
    ('ä', "ɛ"),
    ('ë', "ɛ"),
    ('ï', "ɪ"),
    ('ö', "œ"),
    ('ü', "ʏ"),
];

/// Consonant letters with a single context-free realization.
///
/// The context-sensitive letters (b d g s v, c, h, t, q, r) are handled by
/// the consonant rule itself.
pub(crate) const PLAIN_CONSONANTS: &[(char, &str)] = &[
    ('f', "f"),
    ('j', "j"),
    ('k', "k"),
    ('l', "l"),
    ('m', "m"),
    ('n', "n"),
    ('p', "p"),
    ('w', "v"),
    ('x', "ks"),
    ('z', "ts"),
    ('ß', "s"),
];

/// Fortis (devoiced) realizations of the alternating consonants.
pub(crate) const FORTIS_ALTERNANTS: &[(char, &str)] = &[
    ('b', "p"),
    ('d', "t"),
    ('g', "k"),
    ('s', "s"),
    ('v', "f"),
];

/// Lenis (voiced) realizations of the alternating consonants.
pub(crate) const LENIS_ALTERNANTS: &[(char, &str)] = &[
    ('b', "b"),
    ('d', "d"),
    ('g', "g"),
    ('s', "z"),
    ('v', "v"),
];

/// Vowel sequences with a fixed diphthong reading.
pub(crate) const DIPHTHONGS: &[(&str, &str)] = &[
    ("ie", "iː"),
    ("au", "ao"),
    ("ei", "ae"),
    ("ey", "ae"),
    ("ay", "ae"),
    ("eu", "ɔø"),
    ("äu", "ɔø"),
    ("aa", "aː"),
];

/// Consonant groups with a single fixed reading.
pub(crate) const EASY_CLUSTERS: &[(&str, &str)] = &[
    ("tt", "t"),
    ("zz", "ts"),
    ("tz", "ts"),
    ("pf", "pf"),
    ("ps", "ps"),
    ("ph", "f"),
    ("th", "t"),
    ("ck", "k"),
    ("ß", "s"),
    ("gn", "gn"),
    ("ng", "ŋ"),
    ("nk", "ŋk"),
    ("tsch", "ʧ"),
    // blends
    ("bl", "bl"),
    ("br", "br"),
    ("dr", "dɾ"),
    ("gl", "gl"),
    ("gr", "gɾ"),
    ("bn", "bn"),
    ("dl", "dl"),
    ("dn", "dn"),
];

/// Recognized consonant groups searched for at the edges of an unknown
/// cluster during decomposition.
pub(crate) const KNOWN_CLUSTERS: &[&str] = &[
    "ch", "sp", "st", "sch", "zz", "tz", "pf", "ps", "ph", "th", "ck", "ß", "ng", "nk", "tsch",
    "ʧ", "kk", "bb", "dt", "dd", "gg", "bl", "br", "dr", "gl", "gr", "bn", "dl", "dn",
];
