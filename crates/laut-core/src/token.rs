// Token types produced by text segmentation

// ---------------------------------------------------------------------------
// Token type
// ---------------------------------------------------------------------------

/// Classification of a text token.
///
/// A line decomposes into alternating `Word` and `Separator` runs. Word
/// tokens hold letters and in-word apostrophes; separator tokens lump
/// whitespace, punctuation, and digits together, since none of them reach
/// the transcription engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// End of input.
    None,
    /// A transcribable word.
    Word,
    /// A run of characters between words.
    Separator,
}

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A text token with its position in the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The type of this token.
    pub token_type: TokenType,

    /// The text content of this token.
    pub text: String,

    /// Length of the token in characters.
    pub token_len: usize,

    /// Position of this token within the line (character offset).
    pub pos: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(token_type: TokenType, text: impl Into<String>, pos: usize) -> Self {
        let text = text.into();
        let token_len = text.chars().count();
        Self {
            token_type,
            text,
            token_len,
            pos,
        }
    }

    /// Create an empty `None` token at position 0, signaling end-of-text.
    pub fn none() -> Self {
        Self {
            token_type: TokenType::None,
            text: String::new(),
            token_len: 0,
            pos: 0,
        }
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::none()
    }
}
