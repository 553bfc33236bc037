// Line tokenizer for the text transcription pipeline

use laut_core::character::{get_char_type, CharType};
use laut_core::token::{Token, TokenType};

// ---------------------------------------------------------------------------
// Character classification
// ---------------------------------------------------------------------------

/// Word characters are letters and the apostrophe. The apostrophe stays
/// inside word tokens so that elided forms like "hab'" and "geh'n" reach
/// the transcription engine in one piece.
fn is_word_char(c: char) -> bool {
    c == '\'' || get_char_type(c) == CharType::Letter
}

// ---------------------------------------------------------------------------
// Tokenization
// ---------------------------------------------------------------------------

/// Returns the type and length of the token starting at `pos`.
///
/// A word token is a maximal run of word characters; a separator token is a
/// maximal run of everything else (whitespace, digits, and punctuation are
/// not distinguished). At the end of the text the type is `None` and the
/// length is 0.
pub fn next_token(text: &[char], pos: usize) -> (TokenType, usize) {
    if pos >= text.len() {
        return (TokenType::None, 0);
    }
    let in_word = is_word_char(text[pos]);
    let mut end = pos + 1;
    while end < text.len() && is_word_char(text[end]) == in_word {
        end += 1;
    }
    let token_type = if in_word {
        TokenType::Word
    } else {
        TokenType::Separator
    };
    (token_type, end - pos)
}

/// Splits a line into alternating word and separator tokens.
///
/// Concatenating the token texts in order restores the input line.
pub fn tokenize(line: &str) -> Vec<Token> {
    let chars: Vec<char> = line.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;
    loop {
        let (token_type, len) = next_token(&chars, pos);
        if token_type == TokenType::None {
            break;
        }
        let text: String = chars[pos..pos + len].iter().collect();
        tokens.push(Token::new(token_type, text, pos));
        pos += len;
    }
    tokens
}
