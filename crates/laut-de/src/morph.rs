// Prefix and suffix stripping over the sub-word sequence

use laut_core::character::simple_lower;

use crate::lexicon::Lexicon;
use crate::word::{AffixBlock, Part, RootPart};

/// Decompose the ordered sub-words of one word into Parts.
///
/// Sub-words shorter than five characters are taken whole, as a Prefix when
/// the lexicon knows them as one, otherwise as a Root. Longer sub-words get
/// the full treatment: leading prefix morphs are stripped longest-first
/// into the prefix buffer, trailing suffix morphs are stripped longest-first
/// from the back with the stress-bearing table consulted before the
/// unstressed one, and the residual middle becomes the Root, possibly
/// empty.
///
/// The prefix buffer outlives sub-word boundaries: a long sub-word that is
/// itself a separable prefix ("vorbei") is buffered and joins the next
/// sub-word's prefix block. A buffer still pending after the last sub-word
/// is flushed as a trailing Prefix part rather than dropped.
///
/// The returned flag is true when any stripped suffix morph came from the
/// stress-bearing table.
pub fn decompose(subwords: &[String], lexicon: &Lexicon) -> (Vec<Part>, bool) {
    let mut parts: Vec<Part> = Vec::new();
    let mut buffer: Vec<String> = Vec::new();
    let mut stressed = false;

    for subword in subwords {
        let lower: String = subword.chars().map(simple_lower).collect();
        let chars: Vec<char> = lower.chars().collect();

        if chars.len() < 5 {
            if lexicon.is_prefix(&lower) {
                parts.push(Part::Prefix(AffixBlock::new(vec![lower])));
            } else {
                parts.push(Part::Root(RootPart::new(lower)));
            }
            continue;
        }

        if lexicon.is_prefix(&lower) {
            buffer.push(lower);
            continue;
        }

        let mut start = 0;
        while let Some(len) = lexicon.front_prefix_match(&chars[start..]) {
            buffer.push(chars[start..start + len].iter().collect());
            start += len;
        }
        if !buffer.is_empty() {
            parts.push(Part::Prefix(AffixBlock::new(std::mem::take(&mut buffer))));
        }

        let mut end = chars.len();
        let mut suffix_morphs: Vec<String> = Vec::new();
        while let Some(found) = lexicon.back_suffix_match(&chars[start..end]) {
            suffix_morphs.push(chars[end - found.len..end].iter().collect());
            if found.stressed {
                stressed = true;
            }
            end -= found.len;
        }
        suffix_morphs.reverse();

        parts.push(Part::Root(RootPart::new(chars[start..end].iter().collect())));
        if !suffix_morphs.is_empty() {
            parts.push(Part::Suffix(AffixBlock::new(suffix_morphs)));
        }
    }

    if !buffer.is_empty() {
        parts.push(Part::Prefix(AffixBlock::new(buffer)));
    }

    (parts, stressed)
}
