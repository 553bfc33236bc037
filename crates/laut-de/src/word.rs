// Analyzed word model: sub-words, parts, and the stressed-suffix flag

use crate::fragment::{fragment_root, Fragment};
use crate::lexicon::Lexicon;
use crate::morph;
use crate::segmenter;
use crate::wordlist::KnownWords;

/// Ordered affix morphs with their concatenated text.
///
/// Prefix blocks can chain several morphs ("hin" + "ein"); suffix blocks
/// likewise ("ig" + "keit"). Morphs read left to right as they appear in
/// the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixBlock {
    morphs: Vec<String>,
    text: String,
}

impl AffixBlock {
    pub(crate) fn new(morphs: Vec<String>) -> Self {
        let text = morphs.concat();
        Self { morphs, text }
    }

    pub fn morphs(&self) -> &[String] {
        &self.morphs
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Residual root after affix stripping, pre-fragmented for rule
/// application. The text may be empty when stripping consumed the whole
/// sub-word; an empty root has no fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootPart {
    text: String,
    fragments: Vec<Fragment>,
}

impl RootPart {
    pub(crate) fn new(text: String) -> Self {
        let fragments = fragment_root(&text);
        Self { text, fragments }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }
}

/// One unit of a word's decomposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Prefix(AffixBlock),
    Root(RootPart),
    Suffix(AffixBlock),
}

impl Part {
    /// The orthographic text this part covers.
    pub fn text(&self) -> &str {
        match self {
            Part::Prefix(block) | Part::Suffix(block) => block.text(),
            Part::Root(root) => root.text(),
        }
    }

    pub fn is_prefix(&self) -> bool {
        matches!(self, Part::Prefix(_))
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Part::Root(_))
    }

    pub fn is_suffix(&self) -> bool {
        matches!(self, Part::Suffix(_))
    }
}

/// A fully analyzed word.
///
/// Construction runs the whole analysis front half: compound segmentation,
/// then morphological decomposition of every sub-word, then fragmentation
/// of every root. The result is immutable; the rule engine only reads it.
/// In particular `has_stressed_suffix` is final before any rule fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    subwords: Vec<String>,
    parts: Vec<Part>,
    has_stressed_suffix: bool,
}

impl Word {
    pub fn analyze(text: &str, lexicon: &Lexicon, known: &dyn KnownWords) -> Self {
        let subwords = segmenter::segment(text, known);
        let (parts, has_stressed_suffix) = morph::decompose(&subwords, lexicon);
        Self {
            text: text.to_string(),
            subwords,
            parts,
            has_stressed_suffix,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn subwords(&self) -> &[String] {
        &self.subwords
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn has_stressed_suffix(&self) -> bool {
        self.has_stressed_suffix
    }
}
