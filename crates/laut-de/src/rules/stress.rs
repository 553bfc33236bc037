// Stress placement at the head of a root

use laut_core::ipa::{has_primary_stress, PRIMARY_STRESS, SECONDARY_STRESS};

use super::FragContext;

/// Stress mark for the first fragment of a root, if any.
///
/// A word with a stress-bearing suffix gets no mark here; the suffix rule
/// puts the primary mark on the root's final consonant instead. The first
/// root of the word takes primary stress. A root right behind a single
/// accented prefix takes secondary stress, behind an unaccented one
/// primary. Roots deeper in a compound take secondary stress.
pub(crate) fn prelude(ctx: &FragContext) -> Option<char> {
    if ctx.stressed_suffix || ctx.frag_index != 0 {
        return None;
    }
    if ctx.part_index == 0 {
        return Some(PRIMARY_STRESS);
    }
    if let Some(prefix_ipa) = ctx.first_prefix_ipa {
        if has_primary_stress(prefix_ipa) {
            return Some(SECONDARY_STRESS);
        }
        return Some(PRIMARY_STRESS);
    }
    Some(SECONDARY_STRESS)
}
