//! Shared foundation for the Lautschrift German grapheme-to-phoneme tools.
//!
//! This crate carries the pieces that every layer needs but that belong to
//! no single one: German character classification, IPA notation constants,
//! and the token types produced by text segmentation. It has no knowledge
//! of the transcription pipeline itself.

pub mod character;
pub mod ipa;
pub mod token;

pub use character::CharType;
pub use token::{Token, TokenType};
