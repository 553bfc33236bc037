// Prefix and suffix block rendering

use laut_core::character::is_vowel;
use laut_core::ipa::{GLOTTAL_STOP, PRIMARY_STRESS, SECONDARY_STRESS};

use crate::lexicon::Lexicon;
use crate::transcription::Piece;
use crate::word::AffixBlock;

/// Render a prefix block morph by morph.
///
/// Stress is decided once at the head: before each later morph, a primary
/// mark still leading the accumulated string is dropped. When a locative
/// prefix ("hin", "her", "dar", "vor") precedes a glottal-initial morph,
/// its final sound elides into a linking consonant instead of stacking
/// against the glottal stop. A block that is not the word's first part
/// demotes a leading primary mark to secondary.
pub(crate) fn prefix_pieces(
    block: &AffixBlock,
    part_index: usize,
    lexicon: &Lexicon,
) -> Vec<Piece> {
    let mut ipa: Vec<char> = Vec::new();
    let morphs = block.morphs();

    for (i, morph) in morphs.iter().enumerate() {
        let Some(value) = lexicon.prefix_ipa(morph) else {
            continue;
        };
        if i == 0 {
            ipa.extend(value.chars());
            continue;
        }

        if ipa.first() == Some(&PRIMARY_STRESS) {
            ipa.remove(0);
        }

        let incoming: Vec<char> = value.chars().collect();
        let linking = match morphs[i - 1].as_str() {
            "hin" => Some((1, "ˈn")),
            "her" => Some((4, "ɛˈɾ")),
            "dar" | "vor" => Some((1, "ˈɾ")),
            _ => None,
        };
        match linking.filter(|_| incoming.get(1) == Some(&GLOTTAL_STOP)) {
            Some((elided, link)) => {
                ipa.truncate(ipa.len().saturating_sub(elided));
                ipa.extend(link.chars());
                ipa.extend(incoming.iter().skip(2));
            }
            None => ipa.extend(incoming.iter()),
        }
    }

    if part_index != 0 && ipa.first() == Some(&PRIMARY_STRESS) {
        ipa[0] = SECONDARY_STRESS;
    }

    vec![Piece::Ipa(ipa.into_iter().collect())]
}

/// Render a suffix block morph by morph, unstressed table first.
///
/// The "ig" ending assimilates to the following morph: plain g before a
/// vowel-initial morph, k before an "ich"-bearing one.
pub(crate) fn suffix_pieces(block: &AffixBlock, lexicon: &Lexicon) -> Vec<Piece> {
    let mut ipa: Vec<char> = Vec::new();
    let morphs = block.morphs();

    for (i, morph) in morphs.iter().enumerate() {
        let value = lexicon
            .unstressed_suffix_ipa(morph)
            .or_else(|| lexicon.stressed_suffix_ipa(morph));
        let Some(value) = value else {
            continue;
        };
        ipa.extend(value.chars());

        if morph == "ig" {
            if let Some(next) = morphs.get(i + 1) {
                if next.chars().next().is_some_and(is_vowel) {
                    ipa.pop();
                    ipa.push('g');
                } else if next.contains("ich") {
                    ipa.pop();
                    ipa.push('k');
                }
            }
        }
    }

    vec![Piece::Ipa(ipa.into_iter().collect())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcription::render_pieces;

    fn prefix(morphs: &[&str], part_index: usize) -> String {
        let lexicon = Lexicon::new().unwrap();
        let block = AffixBlock::new(morphs.iter().map(|m| m.to_string()).collect());
        render_pieces(&prefix_pieces(&block, part_index, &lexicon))
    }

    fn suffix(morphs: &[&str]) -> String {
        let lexicon = Lexicon::new().unwrap();
        let block = AffixBlock::new(morphs.iter().map(|m| m.to_string()).collect());
        render_pieces(&suffix_pieces(&block, &lexicon))
    }

    #[test]
    fn single_accented_prefix() {
        assert_eq!(prefix(&["ab"], 0), "ˈʔap");
    }

    #[test]
    fn hin_links_with_n() {
        assert_eq!(prefix(&["hin", "ein"], 0), "hɪˈnaen");
    }

    #[test]
    fn her_elides_back_to_the_h() {
        assert_eq!(prefix(&["her", "ein"], 0), "hɛˈɾaen");
    }

    #[test]
    fn vor_links_with_the_flap() {
        assert_eq!(prefix(&["vor", "an"], 0), "foːɐˈɾan");
    }

    #[test]
    fn no_linking_before_a_plain_consonant_morph() {
        // only the accumulated head loses its mark; the incoming morph
        // keeps its own
        assert_eq!(prefix(&["hin", "zu"], 0), "hɪnˈtsuː");
    }

    #[test]
    fn later_block_demotes_primary_to_secondary() {
        assert_eq!(prefix(&["ab"], 2), "ˌʔap");
    }

    #[test]
    fn unaccented_block_is_not_demoted() {
        assert_eq!(prefix(&["ver"], 2), "fɛːɐ\u{032F}");
    }

    #[test]
    fn plain_suffix_chain() {
        assert_eq!(suffix(&["er", "in"]), "ɐ\u{032F}ɪn");
    }

    #[test]
    fn final_ig_keeps_the_fricative() {
        assert_eq!(suffix(&["ig"]), "ɪç");
    }

    #[test]
    fn ig_hardens_before_a_vowel_morph() {
        assert_eq!(suffix(&["ig", "e"]), "ɪgə");
    }

    #[test]
    fn ig_dissimilates_before_ich() {
        assert_eq!(suffix(&["ig", "lich"]), "ɪklɪç");
    }

    #[test]
    fn stressed_values_append_as_recorded() {
        assert_eq!(suffix(&["ion"]), "\u{012D}oːn");
    }
}
