// Phonological rule application over analyzed words
//
// Parts are evaluated left to right; each sees the rendered IPA of the
// parts before it. Within a root, fragments are evaluated left to right
// with a context resolved once per fragment and never mutated.

mod affix;
mod cluster;
mod consonant;
mod diphthong;
mod stress;
mod vowel;

use crate::fragment::Fragment;
use crate::lexicon::Lexicon;
use crate::transcription::{render_pieces, Piece, Transcription};
use crate::word::{Part, RootPart, Word};

/// Read-only context for one fragment's rule application.
///
/// Everything a symbol rule may consult is resolved up front: neighboring
/// fragments, the part following the root, the literal lookahead letter,
/// and the end-of-element flag. Cluster decomposition hands sub-pieces a
/// copy with an adjusted lookahead and a cleared stressed-suffix flag
/// where the fragment-level values would not apply.
#[derive(Clone, Copy)]
pub(crate) struct FragContext<'a> {
    pub lexicon: &'a Lexicon,
    /// Word-level stressed-suffix flag as threaded to this piece.
    pub stressed_suffix: bool,
    pub part_index: usize,
    /// IPA of the single leading Prefix when this root sits right behind
    /// one.
    pub first_prefix_ipa: Option<&'a str>,
    pub frag_index: usize,
    pub prev: Option<&'a Fragment>,
    pub next: Option<&'a Fragment>,
    /// The part after the root, set only when this fragment closes it.
    pub next_part: Option<&'a Part>,
    /// Next literal letter in the root, or in the following part.
    pub next_letter: Option<char>,
    /// End of a pronunciation element: last fragment of the word's last
    /// part, or of a root whose following part is not a suffix.
    pub end_of_element: bool,
}

/// Apply the rule engine to an analyzed word.
pub fn transcribe_word(word: &Word, lexicon: &Lexicon) -> Transcription {
    let parts = word.parts();
    let mut pieces: Vec<Piece> = Vec::new();
    let mut part_ipas: Vec<String> = Vec::with_capacity(parts.len());

    for (part_index, part) in parts.iter().enumerate() {
        let part_pieces = match part {
            Part::Prefix(block) => affix::prefix_pieces(block, part_index, lexicon),
            Part::Suffix(block) => affix::suffix_pieces(block, lexicon),
            Part::Root(root) => root_pieces(
                root,
                parts,
                part_index,
                &part_ipas,
                word.has_stressed_suffix(),
                lexicon,
            ),
        };
        part_ipas.push(render_pieces(&part_pieces));
        pieces.extend(part_pieces);
    }

    Transcription::new(pieces)
}

fn root_pieces(
    root: &RootPart,
    parts: &[Part],
    part_index: usize,
    prior_ipa: &[String],
    stressed_suffix: bool,
    lexicon: &Lexicon,
) -> Vec<Piece> {
    let mut pieces: Vec<Piece> = Vec::new();
    let fragments = root.fragments();

    for (frag_index, frag) in fragments.iter().enumerate() {
        // an elided apostrophe produces no sound and suppresses the
        // stress mark it would have carried
        if matches!(frag, Fragment::Vowel('\'')) {
            continue;
        }

        let ctx = resolve_context(
            parts,
            part_index,
            prior_ipa,
            fragments,
            frag_index,
            stressed_suffix,
            lexicon,
        );

        let mut frag_pieces: Vec<Piece> = Vec::new();
        if let Some(mark) = stress::prelude(&ctx) {
            frag_pieces.push(Piece::Ipa(mark.to_string()));
        }
        match frag {
            Fragment::Consonant(c) => consonant::pieces(*c, &ctx, &mut frag_pieces),
            Fragment::Cluster(text) => cluster::pieces(text, &ctx, &mut frag_pieces),
            Fragment::Vowel(v) => vowel::pieces(*v, &ctx, &mut frag_pieces),
            Fragment::Diphthong(text) => diphthong::pieces(text, &ctx, &mut frag_pieces),
        }
        pieces.extend(frag_pieces);
    }

    pieces
}

fn resolve_context<'a>(
    parts: &'a [Part],
    part_index: usize,
    prior_ipa: &'a [String],
    fragments: &'a [Fragment],
    frag_index: usize,
    stressed_suffix: bool,
    lexicon: &'a Lexicon,
) -> FragContext<'a> {
    let prev = frag_index.checked_sub(1).and_then(|i| fragments.get(i));
    let next = fragments.get(frag_index + 1);

    let mut next_part = None;
    let mut next_letter = None;
    let mut end_of_element = false;
    if let Some(next_frag) = next {
        next_letter = next_frag.first_char();
    } else if let Some(part) = parts.get(part_index + 1) {
        next_part = Some(part);
        next_letter = part.text().chars().next();
        end_of_element = !part.is_suffix();
    } else {
        end_of_element = true;
    }

    let first_prefix_ipa = (part_index == 1 && parts.first().is_some_and(Part::is_prefix))
        .then(|| prior_ipa.first())
        .flatten()
        .map(String::as_str);

    FragContext {
        lexicon,
        stressed_suffix,
        part_index,
        first_prefix_ipa,
        frag_index,
        prev,
        next,
        next_part,
        next_letter,
        end_of_element,
    }
}
