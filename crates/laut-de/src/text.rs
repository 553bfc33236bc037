// Aligned transcription of multi-line text.
//
// Each source line is paired with an IPA line, padded so that every source
// word starts in the same column as its transcription. The source line is
// indented past a leading stress mark (and glottal stop) so the first
// letter of the word sits above its first sounded symbol.

use std::fmt;

use laut_core::ipa::stressed_onset_len;
use laut_core::token::TokenType;

use crate::handle::Transcriber;
use crate::tokenizer;

/// One source line with its column-aligned IPA line.
///
/// `source` is the input line with alignment padding inserted; separators
/// before the first word are dropped. Both strings are empty for lines
/// without words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscribedLine {
    /// The padded source line.
    pub source: String,

    /// The IPA line, one transcription per source word.
    pub ipa: String,
}

/// A transcribed text, one [`TranscribedLine`] per input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTranscription {
    pub lines: Vec<TranscribedLine>,
}

impl fmt::Display for TextTranscription {
    /// Source and IPA lines interleaved, a spacer line after each pair.
    /// Lines without words print as a single blank line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line.source)?;
            if !line.source.trim().is_empty() {
                writeln!(f, "{}", line.ipa)?;
                writeln!(f, " ")?;
            }
        }
        Ok(())
    }
}

pub(crate) fn transcribe_text(transcriber: &Transcriber, input: &str) -> TextTranscription {
    TextTranscription {
        lines: input
            .lines()
            .map(|line| transcribe_line(transcriber, line))
            .collect(),
    }
}

/// Transcribe one line and compute its alignment.
///
/// Every word travels together with the separator that follows it. The IPA
/// side counts one trailing space per word; whichever side of the pair
/// comes out shorter is padded to the width of the longer. All arithmetic
/// is in characters, not bytes.
pub(crate) fn transcribe_line(transcriber: &Transcriber, line: &str) -> TranscribedLine {
    let tokens = tokenizer::tokenize(line);
    let mut source = String::new();
    let mut ipa = String::new();

    for (i, token) in tokens.iter().enumerate() {
        if token.token_type != TokenType::Word {
            continue;
        }
        let word_ipa = transcriber.transcribe(&token.text);

        let mut combo = token.text.clone();
        if let Some(sep) = tokens
            .get(i + 1)
            .filter(|t| t.token_type == TokenType::Separator)
        {
            combo.push_str(&sep.text);
        }

        let front_len = stressed_onset_len(&word_ipa);
        let combo_len = combo.chars().count();
        let ipa_len = word_ipa.chars().count() + 1;

        source.push_str(&" ".repeat(front_len));
        source.push_str(&combo);
        ipa.push_str(&word_ipa);
        ipa.push(' ');

        let source_len = combo_len + front_len;
        if ipa_len > source_len {
            source.push_str(&" ".repeat(ipa_len - source_len));
        } else {
            ipa.push_str(&" ".repeat(source_len - ipa_len));
        }
    }

    TranscribedLine { source, ipa }
}
