// Single-vowel rule

use laut_core::ipa::{GLOTTAL_STOP, LENGTH_MARK};

use super::FragContext;
use crate::fragment::{Fragment, FragmentKind};
use crate::transcription::{Piece, Unresolved};
use crate::word::Part;

/// Apply the single-vowel rule.
///
/// Quality comes from the closed or open table by lookahead: closed
/// before a single consonant, lengthened in the first two fragments of a
/// root when no stressed suffix follows; open before a cluster unless the
/// cluster starts with the length-marking "h"; closed at the root's end,
/// except that "i" glides to "j" before an e-initial suffix. A
/// vowel-initial root gets a glottal onset.
pub(crate) fn pieces(v: char, ctx: &FragContext, out: &mut Vec<Piece>) {
    if ctx.frag_index == 0 {
        out.push(Piece::Ipa(GLOTTAL_STOP.to_string()));
    }

    match ctx.next.map(Fragment::kind) {
        Some(FragmentKind::Consonant) => {
            push_quality(ctx.lexicon.closed_vowel(v), v, out);
            if !ctx.stressed_suffix && ctx.frag_index <= 1 {
                out.push(Piece::Ipa(LENGTH_MARK.to_string()));
            }
        }
        Some(FragmentKind::Cluster) => {
            let quality = if ctx.next_letter == Some('h') {
                ctx.lexicon.closed_vowel(v)
            } else {
                ctx.lexicon.open_vowel(v)
            };
            push_quality(quality, v, out);
        }
        _ => {
            if v == 'i'
                && ctx.next_letter == Some('e')
                && ctx.next_part.is_some_and(Part::is_suffix)
            {
                out.push(Piece::Ipa("j".to_string()));
            } else {
                push_quality(ctx.lexicon.closed_vowel(v), v, out);
            }
        }
    }
}

fn push_quality(symbol: Option<&'static str>, v: char, out: &mut Vec<Piece>) {
    match symbol {
        Some(s) => out.push(Piece::Ipa(s.to_string())),
        None => out.push(Piece::Unresolved(Unresolved::UnknownVowelRun(v.to_string()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::transcription::render_pieces;
    use crate::word::AffixBlock;

    fn base(lexicon: &Lexicon) -> FragContext<'_> {
        FragContext {
            lexicon,
            stressed_suffix: false,
            part_index: 0,
            first_prefix_ipa: None,
            frag_index: 1,
            prev: None,
            next: None,
            next_part: None,
            next_letter: None,
            end_of_element: false,
        }
    }

    fn apply(v: char, ctx: &FragContext) -> String {
        let mut out = Vec::new();
        pieces(v, ctx, &mut out);
        render_pieces(&out)
    }

    #[test]
    fn closed_and_long_before_a_single_consonant() {
        let lexicon = Lexicon::new().unwrap();
        let m = Fragment::Consonant('m');
        let ctx = FragContext {
            next: Some(&m),
            next_letter: Some('m'),
            ..base(&lexicon)
        };
        assert_eq!(apply('o', &ctx), "oː");
    }

    #[test]
    fn no_lengthening_deeper_in_the_root() {
        let lexicon = Lexicon::new().unwrap();
        let m = Fragment::Consonant('m');
        let ctx = FragContext {
            next: Some(&m),
            next_letter: Some('m'),
            frag_index: 3,
            ..base(&lexicon)
        };
        assert_eq!(apply('o', &ctx), "o");
    }

    #[test]
    fn no_lengthening_when_a_stressed_suffix_follows() {
        let lexicon = Lexicon::new().unwrap();
        let m = Fragment::Consonant('m');
        let ctx = FragContext {
            next: Some(&m),
            next_letter: Some('m'),
            stressed_suffix: true,
            ..base(&lexicon)
        };
        assert_eq!(apply('o', &ctx), "o");
    }

    #[test]
    fn open_before_a_cluster() {
        let lexicon = Lexicon::new().unwrap();
        let nd = Fragment::Cluster("nd".to_string());
        let ctx = FragContext {
            next: Some(&nd),
            next_letter: Some('n'),
            ..base(&lexicon)
        };
        assert_eq!(apply('u', &ctx), "ʊ");
    }

    #[test]
    fn closed_before_a_length_marking_h_cluster() {
        let lexicon = Lexicon::new().unwrap();
        let hr = Fragment::Cluster("hr".to_string());
        let ctx = FragContext {
            next: Some(&hr),
            next_letter: Some('h'),
            ..base(&lexicon)
        };
        assert_eq!(apply('a', &ctx), "ɑ");
    }

    #[test]
    fn closed_at_the_end_of_the_root() {
        let lexicon = Lexicon::new().unwrap();
        assert_eq!(apply('a', &base(&lexicon)), "ɑ");
    }

    #[test]
    fn i_glides_before_an_e_initial_suffix() {
        let lexicon = Lexicon::new().unwrap();
        let suffix = Part::Suffix(AffixBlock::new(vec!["en".to_string()]));
        let ctx = FragContext {
            next_part: Some(&suffix),
            next_letter: Some('e'),
            ..base(&lexicon)
        };
        assert_eq!(apply('i', &ctx), "j");
        // other vowels stay closed in the same position
        assert_eq!(apply('u', &ctx), "u");
    }

    #[test]
    fn root_initial_vowel_gets_a_glottal_onset() {
        let lexicon = Lexicon::new().unwrap();
        let ctx = FragContext {
            frag_index: 0,
            ..base(&lexicon)
        };
        assert_eq!(apply('a', &ctx), "ʔɑ");
    }
}
