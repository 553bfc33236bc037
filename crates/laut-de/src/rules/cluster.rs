// Consonant-group rule

use super::consonant;
use super::FragContext;
use crate::fragment::Fragment;
use crate::transcription::Piece;

/// Doubled spellings pronounced as their second letter alone.
const DOUBLED: &[&str] = &["kk", "bb", "dt", "dd", "gg"];

/// Apply the consonant-group rule.
///
/// Fixed readings come straight from the easy-cluster table. Doubled
/// spellings reduce to the single-consonant rule on the second letter.
/// "ch", "chs", "sp", "st", and "sch" have their own readings; anything
/// else is decomposed at the edges.
pub(crate) fn pieces(text: &str, ctx: &FragContext, out: &mut Vec<Piece>) {
    if let Some(symbol) = ctx.lexicon.easy_cluster_ipa(text) {
        out.push(Piece::Ipa(symbol.to_string()));
        return;
    }

    if DOUBLED.contains(&text) {
        if let Some(second) = text.chars().nth(1) {
            consonant::pieces(second, ctx, out);
        }
        return;
    }

    match text {
        "ch" => {
            let after_back_vowel = match ctx.prev {
                Some(Fragment::Vowel(v)) => matches!(*v, 'a' | 'o' | 'u'),
                Some(Fragment::Diphthong(d)) => d == "au",
                _ => false,
            };
            let symbol = if after_back_vowel { "x" } else { "ç" };
            out.push(Piece::Ipa(symbol.to_string()));
        }
        // inflected verb forms ("wächst") want k and s apart; not modeled
        "chs" => out.push(Piece::Ipa("ks".to_string())),
        "sp" => out.push(Piece::Ipa(root_initial(ctx, "ʃp", "sp"))),
        "st" => out.push(Piece::Ipa(root_initial(ctx, "ʃt", "st"))),
        "sch" => out.push(Piece::Ipa("ʃ".to_string())),
        _ => decompose(&text.chars().collect::<Vec<char>>(), ctx, out),
    }
}

fn root_initial(ctx: &FragContext, initial: &str, medial: &str) -> String {
    let symbol = if ctx.frag_index == 0 { initial } else { medial };
    symbol.to_string()
}

/// Break an unrecognized group against the known-cluster list.
///
/// A known group stripped from the front keeps the fragment's own context
/// for both halves. A known group stripped from the back hands the front
/// residual that group's first letter as lookahead and clears its
/// stressed-suffix flag. With no known group at either edge, each letter
/// goes through the single-consonant rule, inner letters seeing the
/// letter after them.
fn decompose(chars: &[char], ctx: &FragContext, out: &mut Vec<Piece>) {
    // a recognized edge must leave a residual to recurse on
    if let Some(front) = ctx
        .lexicon
        .longest_cluster_prefix(chars)
        .filter(|&n| n < chars.len())
    {
        let head: String = chars[..front].iter().collect();
        pieces(&head, ctx, out);
        emit_residual(&chars[front..], ctx, out);
        return;
    }

    if let Some(back) = ctx
        .lexicon
        .longest_cluster_suffix(chars)
        .filter(|&n| n < chars.len())
    {
        let split = chars.len() - back;
        let head_ctx = FragContext {
            stressed_suffix: false,
            next_letter: Some(chars[split]),
            ..*ctx
        };
        emit_residual(&chars[..split], &head_ctx, out);
        let tail: String = chars[split..].iter().collect();
        pieces(&tail, ctx, out);
        return;
    }

    for (i, &c) in chars.iter().enumerate() {
        if let Some(&following) = chars.get(i + 1) {
            let inner_ctx = FragContext {
                stressed_suffix: false,
                next_letter: Some(following),
                ..*ctx
            };
            consonant::pieces(c, &inner_ctx, out);
        } else {
            consonant::pieces(c, ctx, out);
        }
    }
}

fn emit_residual(chars: &[char], ctx: &FragContext, out: &mut Vec<Piece>) {
    match chars {
        [] => {}
        [single] => consonant::pieces(*single, ctx, out),
        _ => pieces(&chars.iter().collect::<String>(), ctx, out),
    }
}
