// Single-consonant rule

use laut_core::character::is_consonant;
use laut_core::ipa::PRIMARY_STRESS;

use super::FragContext;
use crate::transcription::{Piece, Unresolved};
use crate::word::Part;

/// Apply the single-consonant rule.
///
/// A stress-bearing suffix pulls the primary stress mark in front of the
/// root's final consonant, so that fires before any symbol is emitted.
/// Letters absent from every table come out as unresolved markers.
pub(crate) fn pieces(c: char, ctx: &FragContext, out: &mut Vec<Piece>) {
    if ctx.stressed_suffix && ctx.next.is_none() && ctx.next_part.is_some_and(Part::is_suffix) {
        out.push(Piece::Ipa(PRIMARY_STRESS.to_string()));
    }

    if let Some(symbol) = ctx.lexicon.plain_consonant(c) {
        out.push(Piece::Ipa(symbol.to_string()));
        return;
    }

    match c {
        'b' | 'd' | 'g' | 's' | 'v' => {
            let devoiced = ctx.end_of_element || ctx.next_letter.is_some_and(is_consonant);
            let symbol = if devoiced {
                ctx.lexicon.fortis(c)
            } else {
                ctx.lexicon.lenis(c)
            };
            push_or_unknown(symbol, c, out);
        }
        'c' => {
            let symbol = if matches!(ctx.next_letter, Some('a' | 'o' | 'u')) {
                "k"
            } else {
                "ts"
            };
            out.push(Piece::Ipa(symbol.to_string()));
        }
        // h sounds only as a root onset; elsewhere it marks vowel length,
        // which the vowel rule reads off the lookahead
        'h' => {
            if ctx.frag_index == 0 {
                out.push(Piece::Ipa("h".to_string()));
            }
        }
        't' => out.push(Piece::Ipa(t_symbol(ctx).to_string())),
        'q' => {
            if ctx.next_letter == Some('u') {
                out.push(Piece::Ipa("kv".to_string()));
            } else {
                out.push(Piece::Unresolved(Unresolved::BareQ));
            }
        }
        // syllable-final r is vocalic in standard German; not modeled,
        // every r comes out as the flap
        'r' => out.push(Piece::Ipa("ɾ".to_string())),
        other => out.push(Piece::Unresolved(Unresolved::UnknownConsonant(other))),
    }
}

/// "t" affricates to "ts" before "io" in the Latinate endings.
fn t_symbol(ctx: &FragContext) -> &'static str {
    if ctx.next_letter != Some('i') {
        return "t";
    }
    match ctx.next {
        Some(next) => {
            if next.text() == "io" {
                "ts"
            } else {
                "t"
            }
        }
        None => {
            if ctx
                .next_part
                .is_some_and(|part| part.is_suffix() && part.text().starts_with("ion"))
            {
                "ts"
            } else {
                "t"
            }
        }
    }
}

fn push_or_unknown(symbol: Option<&'static str>, c: char, out: &mut Vec<Piece>) {
    match symbol {
        Some(s) => out.push(Piece::Ipa(s.to_string())),
        None => out.push(Piece::Unresolved(Unresolved::UnknownConsonant(c))),
    }
}
