// IPA notation constants shared across the transcription pipeline

/// Primary stress marker, placed before the stressed syllable.
pub const PRIMARY_STRESS: char = '\u{02C8}'; // ˈ

/// Secondary stress marker.
pub const SECONDARY_STRESS: char = '\u{02CC}'; // ˌ

/// Length mark, appended to a lengthened vowel.
pub const LENGTH_MARK: char = '\u{02D0}'; // ː

/// Glottal stop, the onset German inserts before root-initial vowels.
pub const GLOTTAL_STOP: char = '\u{0294}'; // ʔ

/// True if the string contains a primary stress marker anywhere.
pub fn has_primary_stress(ipa: &str) -> bool {
    ipa.contains(PRIMARY_STRESS)
}

/// Character length of the stress onset a transcription starts with.
///
/// Display alignment indents the source word past this onset so that its
/// first letter sits over the first sounded symbol: 2 for a leading "ˈʔ",
/// 1 for a bare "ˈ", 0 otherwise.
pub fn stressed_onset_len(ipa: &str) -> usize {
    let mut chars = ipa.chars();
    match chars.next() {
        Some(PRIMARY_STRESS) => match chars.next() {
            Some(GLOTTAL_STOP) => 2,
            _ => 1,
        },
        _ => 0,
    }
}
