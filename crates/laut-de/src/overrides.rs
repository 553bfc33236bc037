// Pre-recorded transcriptions that bypass the rule engine

use hashbrown::HashMap;

/// Lookup table of full orthographic words with hand-recorded IPA.
///
/// A hit here short-circuits the whole analysis pipeline, so entries should
/// carry complete transcriptions including stress marks. Lookups are exact
/// and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    entries: HashMap<String, String>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded transcription for a word, if any.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    /// Store a transcription directly.
    pub fn insert(&mut self, word: &str, ipa: &str) {
        self.entries.insert(word.to_string(), ipa.to_string());
    }

    /// Store the transcription field of a raw dictionary entry.
    ///
    /// Raw entries carry the IPA between slash delimiters, as in
    /// `"IPA: /haʊ̯s/"`. The field runs from the first '/' to the next '/'
    /// or the end of the entry. Returns false and stores nothing when the
    /// entry has no '/' at all; an empty field is stored as-is.
    pub fn insert_raw(&mut self, word: &str, raw: &str) -> bool {
        match ipa_field(raw) {
            Some(ipa) => {
                self.entries.insert(word.to_string(), ipa.to_string());
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Text between the first pair of '/' delimiters, or after the first '/'
/// when no closing one follows.
fn ipa_field(raw: &str) -> Option<&str> {
    raw.split('/').nth(1)
}
