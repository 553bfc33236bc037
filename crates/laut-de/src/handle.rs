// Transcriber: top-level integration point for German transcription.
//
// Owns all components (phonological lexicon, known-word list, override
// table) and provides a unified API for word transcription, morphological
// analysis, compound segmentation, and aligned text transcription.
//
// Design notes:
// - The lexicon is validated once at construction; every later operation
//   borrows it immutably, so transcription itself cannot fail.
// - The override table is consulted with the word exactly as written.
//   Overrides come from dictionary headwords, which are case-sensitive;
//   the rule engine lowercases on its own.

use crate::lexicon::{Lexicon, LexiconError};
use crate::overrides::OverrideTable;
use crate::rules;
use crate::text::{self, TextTranscription};
use crate::transcription::{Piece, Transcription};
use crate::word::Word;
use crate::wordlist::WordSet;

/// Top-level handle that owns all transcription components.
///
/// Provides grapheme-to-IPA transcription, morphological analysis,
/// compound segmentation, and aligned text transcription through a
/// single unified interface.
pub struct Transcriber {
    /// Phonological tables (prefixes, suffixes, vowel and consonant values).
    lexicon: Lexicon,

    /// Vocabulary used by the compound segmenter.
    words: WordSet,

    /// Pre-recorded pronunciations that bypass the rule engine.
    overrides: OverrideTable,
}

impl Transcriber {
    /// Create a new transcriber from a segmentation vocabulary and an
    /// override table. Fails only if the built-in phonological tables are
    /// inconsistent.
    pub fn new(words: WordSet, overrides: OverrideTable) -> Result<Self, LexiconError> {
        Ok(Self {
            lexicon: Lexicon::new()?,
            words,
            overrides,
        })
    }

    /// Transcribe a single word to its IPA string.
    ///
    /// Unresolvable spans render as bracketed markers, so the output is
    /// always printable. Use [`Transcriber::transcription`] to distinguish
    /// resolved IPA from markers.
    pub fn transcribe(&self, word: &str) -> String {
        self.transcription(word).ipa()
    }

    /// Transcribe a single word, keeping resolved IPA and unresolvable
    /// spans apart.
    ///
    /// An override hit produces a single fully-resolved piece; otherwise
    /// the word goes through decomposition and the rule engine.
    pub fn transcription(&self, word: &str) -> Transcription {
        if let Some(ipa) = self.overrides.lookup(word) {
            return Transcription::new(vec![Piece::Ipa(ipa.to_string())]);
        }
        let analyzed = Word::analyze(word, &self.lexicon, &self.words);
        rules::transcribe_word(&analyzed, &self.lexicon)
    }

    /// Perform morphological analysis on a word without transcribing it.
    ///
    /// Returns the decomposition into prefix, root, and suffix parts with
    /// the root split into fragments.
    pub fn analyze(&self, word: &str) -> Word {
        Word::analyze(word, &self.lexicon, &self.words)
    }

    /// Split a compound into known simple words.
    ///
    /// Returns the whole word as a single piece when no split against the
    /// vocabulary succeeds.
    pub fn segment(&self, word: &str) -> Vec<String> {
        crate::segmenter::segment(word, &self.words)
    }

    /// Transcribe a multi-line text, aligning each source line above its
    /// IPA line.
    pub fn transcribe_text(&self, input: &str) -> TextTranscription {
        text::transcribe_text(self, input)
    }

    /// The phonological lexicon backing this transcriber.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The segmentation vocabulary backing this transcriber.
    pub fn words(&self) -> &WordSet {
        &self.words
    }

    /// The override table backing this transcriber.
    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    /// Return the crate version (from Cargo.toml).
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
