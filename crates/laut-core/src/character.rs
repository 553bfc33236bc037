// Character classification and case utilities for German text

// ---------------------------------------------------------------------------
// German phonological constants
// ---------------------------------------------------------------------------

/// German vowel letters (lowercase): a e i o u y ä ë ï ö ü.
///
/// The trema forms ë and ï are rare but occur in names and loanwords
/// (Noël, naïv) and carry their own quality values in the lexicon.
pub const GERMAN_VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', 'y', '\u{00E4}', '\u{00EB}', '\u{00EF}', '\u{00F6}', '\u{00FC}',
];

/// German consonant letters (lowercase): b c d f g h j k l m n p q r s t v w x z ß.
pub const GERMAN_CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'z', '\u{00DF}',
];

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification used by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    Whitespace,
    Punctuation,
}

/// Returns the character type for a given character.
///
/// Letters cover basic Latin, the Latin-1 letter ranges (which include the
/// German umlauts and ß), and Latin Extended-A. Digits, whitespace, and the
/// punctuation recognized by [`is_punctuation_char`] get their own types;
/// everything else is `Unknown`.
pub fn get_char_type(c: char) -> CharType {
    let cp = c as u32;
    if (0x41..=0x5A).contains(&cp)           // A-Z
        || (0x61..=0x7A).contains(&cp)       // a-z
        || (0xC0..=0xD6).contains(&cp)       // À-Ö
        || (0xD8..=0xF6).contains(&cp)       // Ø-ö
        || (0x00F8..=0x017F).contains(&cp)
    // ø plus Latin Extended-A
    {
        return CharType::Letter;
    }
    if is_whitespace(c) {
        return CharType::Whitespace;
    }
    if is_punctuation_char(c) {
        return CharType::Punctuation;
    }
    if is_german_quotation_mark(c) {
        return CharType::Punctuation;
    }
    if c.is_ascii_digit() {
        return CharType::Digit;
    }
    CharType::Unknown
}

/// Check whether a character counts as punctuation.
///
/// Covers the full ASCII punctuation set (the apostrophe included; whether
/// an apostrophe separates tokens is the tokenizer's decision, not a
/// character property) plus the dashes and quotation marks common in German
/// typography.
fn is_punctuation_char(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '\u{00AD}' // SOFT HYPHEN
            | '\u{2019}' // RIGHT SINGLE QUOTATION MARK
            | '\u{201A}' // SINGLE LOW-9 QUOTATION MARK
            | '\u{2010}' // HYPHEN
            | '\u{2011}' // NON-BREAKING HYPHEN
            | '\u{2013}' // EN DASH
            | '\u{2014}' // EM DASH
            | '\u{2026}' // HORIZONTAL ELLIPSIS
        )
}

// ---------------------------------------------------------------------------
// German quotation marks
// ---------------------------------------------------------------------------

/// Check whether a character is a German quotation mark.
///
/// German prints „…“ or »…« and falls back to `"` in plain text.
pub fn is_german_quotation_mark(c: char) -> bool {
    matches!(
        c,
        '"' | '\u{201E}' // „ DOUBLE LOW-9 QUOTATION MARK
            | '\u{201C}' // “ LEFT DOUBLE QUOTATION MARK
            | '\u{00BB}' // » RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK
            | '\u{00AB}' // « LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
    )
}

// ---------------------------------------------------------------------------
// German phonological classification
// ---------------------------------------------------------------------------

/// Check whether a character is a German vowel letter (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    let lower = simple_lower(c);
    GERMAN_VOWELS.contains(&lower)
}

/// Check whether a character is a German consonant letter (case-insensitive).
pub fn is_consonant(c: char) -> bool {
    let lower = simple_lower(c);
    GERMAN_CONSONANTS.contains(&lower)
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_lowercase / to_uppercase produce iterators
// because some characters map to multiple characters. For the "simple"
// one-to-one mapping we only take the first character; uppercasing ß
// therefore yields a single S, not the full "SS" expansion.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is a whitespace character.
///
/// Recognizes the ASCII controls, the Unicode space separators, and the
/// line/paragraph separators.
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- CharType tests --

    #[test]
    fn char_type_letters() {
        assert_eq!(get_char_type('A'), CharType::Letter);
        assert_eq!(get_char_type('z'), CharType::Letter);
        assert_eq!(get_char_type('\u{00C4}'), CharType::Letter); // Ä
        assert_eq!(get_char_type('\u{00FC}'), CharType::Letter); // ü
        assert_eq!(get_char_type('\u{00DF}'), CharType::Letter); // ß
    }

    #[test]
    fn char_type_digits() {
        assert_eq!(get_char_type('0'), CharType::Digit);
        assert_eq!(get_char_type('9'), CharType::Digit);
    }

    #[test]
    fn char_type_whitespace() {
        assert_eq!(get_char_type(' '), CharType::Whitespace);
        assert_eq!(get_char_type('\t'), CharType::Whitespace);
        assert_eq!(get_char_type('\n'), CharType::Whitespace);
    }

    #[test]
    fn char_type_punctuation() {
        assert_eq!(get_char_type('.'), CharType::Punctuation);
        assert_eq!(get_char_type(','), CharType::Punctuation);
        assert_eq!(get_char_type('\''), CharType::Punctuation);
        assert_eq!(get_char_type('@'), CharType::Punctuation);
        assert_eq!(get_char_type('\u{2013}'), CharType::Punctuation); // EN DASH
    }

    #[test]
    fn char_type_german_quotation() {
        assert_eq!(get_char_type('"'), CharType::Punctuation);
        assert_eq!(get_char_type('\u{201E}'), CharType::Punctuation); // „
        assert_eq!(get_char_type('\u{00BB}'), CharType::Punctuation); // »
    }

    // -- German quotation marks --

    #[test]
    fn german_quotation_marks() {
        assert!(is_german_quotation_mark('"'));
        assert!(is_german_quotation_mark('\u{201E}')); // „
        assert!(is_german_quotation_mark('\u{201C}')); // “
        assert!(is_german_quotation_mark('\u{00AB}')); // «
        assert!(!is_german_quotation_mark('\''));
    }

    // -- Vowel / Consonant tests --

    #[test]
    fn german_vowels() {
        assert!(is_vowel('a'));
        assert!(is_vowel('A'));
        assert!(is_vowel('y'));
        assert!(is_vowel('\u{00E4}')); // ä
        assert!(is_vowel('\u{00C4}')); // Ä
        assert!(is_vowel('\u{00FC}')); // ü
        assert!(is_vowel('\u{00EB}')); // ë
        assert!(!is_vowel('b'));
        assert!(!is_vowel('\u{00DF}')); // ß
    }

    #[test]
    fn german_consonants() {
        assert!(is_consonant('b'));
        assert!(is_consonant('q'));
        assert!(is_consonant('Q'));
        assert!(is_consonant('\u{00DF}')); // ß
        assert!(!is_consonant('a'));
        assert!(!is_consonant('\u{00FC}')); // ü
        assert!(!is_consonant('1'));
    }

    // -- Case functions --

    #[test]
    fn simple_lower_basic_latin() {
        assert_eq!(simple_lower('A'), 'a');
        assert_eq!(simple_lower('Z'), 'z');
        assert_eq!(simple_lower('a'), 'a');
    }

    #[test]
    fn simple_lower_extended() {
        assert_eq!(simple_lower('\u{00C4}'), '\u{00E4}'); // Ä -> ä
        assert_eq!(simple_lower('\u{00DC}'), '\u{00FC}'); // Ü -> ü
    }

    #[test]
    fn simple_upper_basic_latin() {
        assert_eq!(simple_upper('a'), 'A');
        assert_eq!(simple_upper('A'), 'A');
    }

    #[test]
    fn simple_upper_sharp_s_stays_single() {
        // full uppercasing of ß is "SS"; the simple mapping keeps one char
        assert_eq!(simple_upper('\u{00DF}'), 'S');
    }

    #[test]
    fn whitespace_chars() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\t'));
        assert!(is_whitespace('\n'));
        assert!(is_whitespace('\u{00A0}')); // NO-BREAK SPACE
        assert!(!is_whitespace('a'));
        assert!(!is_whitespace('0'));
    }
}
