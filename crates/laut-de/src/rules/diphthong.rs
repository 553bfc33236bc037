// Vowel-run rule

use super::FragContext;
use crate::fragment::Fragment;
use crate::transcription::{Piece, Unresolved};

/// Apply the vowel-run rule.
///
/// Known runs come from the diphthong table. "io" between a "t" and an
/// "n" is the Latinate glide; any other unknown run voids the fragment's
/// output, its stress mark included, and leaves a marker.
pub(crate) fn pieces(text: &str, ctx: &FragContext, out: &mut Vec<Piece>) {
    if let Some(symbol) = ctx.lexicon.diphthong_ipa(text) {
        out.push(Piece::Ipa(symbol.to_string()));
        return;
    }

    if text == "io"
        && ctx.prev.and_then(Fragment::last_char) == Some('t')
        && ctx.next_letter == Some('n')
    {
        out.push(Piece::Ipa("\u{012D}o".to_string()));
        return;
    }

    out.clear();
    out.push(Piece::Unresolved(Unresolved::UnknownVowelRun(text.to_string())));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::transcription::render_pieces;

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

    fn apply(text: &str, ctx: &FragContext) -> String {
        let mut out = Vec::new();
        pieces(text, ctx, &mut out);
        render_pieces(&out)
    }

    #[test]
    fn table_runs_resolve_directly() {
        let lexicon = Lexicon::new().unwrap();
        let ctx = base(&lexicon);
        assert_eq!(apply("au", &ctx), "ao");
        assert_eq!(apply("ei", &ctx), "ae");
        assert_eq!(apply("eu", &ctx), "ɔø");
        assert_eq!(apply("aa", &ctx), "aː");
    }

    #[test]
    fn io_glides_between_t_and_n() {
        let lexicon = Lexicon::new().unwrap();
        let t = Fragment::Consonant('t');
        let ctx = FragContext {
            prev: Some(&t),
            next_letter: Some('n'),
            ..base(&lexicon)
        };
        assert_eq!(apply("io", &ctx), "\u{012D}o");
    }

    #[test]
    fn io_without_the_t_context_is_unresolved() {
        let lexicon = Lexicon::new().unwrap();
        let ctx = FragContext {
            next_letter: Some('n'),
            ..base(&lexicon)
        };
        assert_eq!(apply("io", &ctx), "⟨io?⟩");
    }

    #[test]
    fn unknown_run_voids_the_stress_mark_already_emitted() {
        let lexicon = Lexicon::new().unwrap();
        let mut out = vec![Piece::Ipa("ˈ".to_string())];
        pieces("iou", &base(&lexicon), &mut out);
        assert_eq!(render_pieces(&out), "⟨iou?⟩");
    }
}
