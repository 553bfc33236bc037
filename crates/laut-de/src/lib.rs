//! German grapheme-to-IPA transcription engine.
//!
//! Orthographic word forms are transcribed by morphological decomposition
//! followed by context-sensitive phonological rules: a word is first split
//! into known compound constituents, each constituent is stripped of prefix
//! and suffix morphs, the remaining root is fragmented into consonant and
//! vowel runs, and the rule engine derives IPA symbols and stress placement
//! from each fragment's context.
//!
//! # Architecture
//!
//! - [`lexicon`] -- Static morph and symbol tables with validated lookup
//! - [`wordlist`] -- Known-word membership behind the [`KnownWords`] seam
//! - [`segmenter`] -- Compound segmentation against the word list
//! - [`morph`] -- Prefix/suffix stripping into [`Part`] sequences
//! - [`fragment`] -- Consonant/vowel run fragmentation of roots
//! - [`word`] -- The analyzed word model handed to the rule engine
//! - [`rules`] -- Stress assignment and per-fragment symbol rules
//! - [`transcription`] -- Rendered output with typed unresolved markers
//! - [`handle`] -- The [`Transcriber`] façade tying the pipeline together
//! - [`tokenizer`] -- Line tokenization for running text
//! - [`text`] -- Per-line transcription with source/IPA alignment

pub mod fragment;
pub mod handle;
pub mod lexicon;
pub mod morph;
pub mod overrides;
pub mod rules;
pub mod segmenter;
pub mod text;
pub mod tokenizer;
pub mod transcription;
pub mod word;
pub mod wordlist;

pub use fragment::{Fragment, FragmentKind};
pub use handle::Transcriber;
pub use lexicon::{Lexicon, LexiconError};
pub use overrides::OverrideTable;
pub use text::{TextTranscription, TranscribedLine};
pub use transcription::{Piece, Transcription, Unresolved};
pub use word::{AffixBlock, Part, RootPart, Word};
pub use wordlist::{KnownWords, WordSet};
