// Rule-engine output: resolved IPA pieces and typed gaps

/// Reasons a letter sequence failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unresolved {
    /// A "q" with no following "u".
    BareQ,
    /// A consonant letter no rule accounts for.
    UnknownConsonant(char),
    /// A vowel run outside the diphthong table.
    UnknownVowelRun(String),
}

impl Unresolved {
    /// Inline marker rendered in place of the missing symbol.
    pub fn marker(&self) -> String {
        match self {
            Unresolved::BareQ => "⟨q?⟩".to_string(),
            Unresolved::UnknownConsonant(c) => format!("⟨{c}?⟩"),
            Unresolved::UnknownVowelRun(run) => format!("⟨{run}?⟩"),
        }
    }
}

/// One production of the rule engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    Ipa(String),
    /// A gap the rules could not close, rendered inline so the rest of
    /// the word still comes through.
    Unresolved(Unresolved),
}

/// A transcribed word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcription {
    pieces: Vec<Piece>,
}

impl Transcription {
    pub(crate) fn new(pieces: Vec<Piece>) -> Self {
        Self { pieces }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The rendered IPA string, unresolved spots marked inline.
    pub fn ipa(&self) -> String {
        render_pieces(&self.pieces)
    }

    /// The unresolved gaps in word order.
    pub fn unresolved(&self) -> impl Iterator<Item = &Unresolved> {
        self.pieces.iter().filter_map(|piece| match piece {
            Piece::Unresolved(reason) => Some(reason),
            Piece::Ipa(_) => None,
        })
    }

    /// True when every letter resolved to a symbol.
    pub fn is_fully_resolved(&self) -> bool {
        self.unresolved().next().is_none()
    }
}

pub(crate) fn render_pieces(pieces: &[Piece]) -> String {
    let mut out = String::new();
    for piece in pieces {
        match piece {
            Piece::Ipa(ipa) => out.push_str(ipa),
            Piece::Unresolved(reason) => out.push_str(&reason.marker()),
        }
    }
    out
}
