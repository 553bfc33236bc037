//! End-to-end tests of the transcription pipeline through the public
//! [`Transcriber`] API: segmentation, decomposition, rule application,
//! overrides, and text alignment.

use laut_de::{FragmentKind, OverrideTable, Part, Transcriber, WordSet};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn engine() -> Transcriber {
    Transcriber::new(WordSet::new(), OverrideTable::new()).expect("lexicon")
}

fn with_vocab(words: &[&str]) -> Transcriber {
    let set: WordSet = words.iter().copied().collect();
    Transcriber::new(set, OverrideTable::new()).expect("lexicon")
}

/// Words whose transcriptions the assertions below rely on.
const SAMPLE_WORDS: &[&str] = &[
    "hund",
    "abfahren",
    "gefahren",
    "oma",
    "hinein",
    "hundchen",
    "wodka",
    "obst",
    "nation",
    "hundehaus",
];

// ---------------------------------------------------------------------------
// Structural properties
// ---------------------------------------------------------------------------

#[test]
fn segmented_pieces_concatenate_to_the_word() {
    let t = with_vocab(&["hunde", "haus", "ab", "end", "essen", "abend"]);
    for word in ["hundehaus", "abendessen", "unsplittable"] {
        let pieces = t.segment(word);
        assert!(!pieces.is_empty());
        assert_eq!(pieces.concat(), word);
    }
}

#[test]
fn greedy_segmentation_takes_the_first_viable_prefix() {
    // "ab" matches before "abend" ever gets a chance
    let t = with_vocab(&["ab", "end", "essen", "abend"]);
    assert_eq!(t.segment("abendessen"), vec!["ab", "end", "essen"]);
}

#[test]
fn fragments_alternate_and_rebuild_each_root() {
    let t = engine();
    for word in SAMPLE_WORDS {
        for part in t.analyze(word).parts() {
            let Part::Root(root) = part else { continue };
            let rebuilt: String = root.fragments().iter().map(|f| f.text()).collect();
            assert_eq!(rebuilt, root.text());
            for pair in root.fragments().windows(2) {
                let a = matches!(
                    pair[0].kind(),
                    FragmentKind::Vowel | FragmentKind::Diphthong
                );
                let b = matches!(
                    pair[1].kind(),
                    FragmentKind::Vowel | FragmentKind::Diphthong
                );
                assert_ne!(a, b, "adjacent fragments share a class in {word:?}");
            }
        }
    }
}

#[test]
fn transcription_is_idempotent() {
    let t = engine();
    for word in SAMPLE_WORDS {
        assert_eq!(t.transcribe(word), t.transcribe(word));
    }
}

#[test]
fn exactly_one_primary_stress_per_word() {
    let t = engine();
    for word in SAMPLE_WORDS {
        let ipa = t.transcribe(word);
        let count = ipa.matches('\u{02C8}').count();
        assert_eq!(count, 1, "{word:?} -> {ipa:?}");
    }
}

// ---------------------------------------------------------------------------
// Literal rule scenarios
// ---------------------------------------------------------------------------

#[test]
fn prefix_word_begins_with_primary_stress() {
    assert_eq!(engine().transcribe("ab"), "\u{02C8}\u{0294}ap");
}

#[test]
fn open_vowel_before_a_cluster_and_final_devoicing() {
    // "hund" fragments to [h, u, nd]; "u" before a cluster not starting
    // with "h" takes its open quality, and the final "d" devoices
    assert_eq!(engine().transcribe("hund"), "\u{02C8}h\u{028A}nt");
}

#[test]
fn diminutive_suffix_appends_without_stress() {
    assert_eq!(
        engine().transcribe("hundchen"),
        "\u{02C8}h\u{028A}nt\u{00E7}\u{0258}n"
    );
}

#[test]
fn stressed_suffix_shifts_primary_stress() {
    assert_eq!(
        engine().transcribe("nation"),
        "n\u{0251}\u{02C8}ts\u{012D}o\u{02D0}n"
    );
}

#[test]
fn unknown_cluster_strips_a_known_back_edge() {
    // "bst" is no table entry, but "st" is recognized at its back edge
    assert_eq!(engine().transcribe("obst"), "\u{02C8}\u{0294}\u{0254}pst");
}

#[test]
fn unknown_cluster_falls_back_per_character() {
    // "dk" has no recognized edge at all, so each letter is transcribed
    // on its own, with lookahead devoicing the "d"
    assert_eq!(engine().transcribe("wodka"), "\u{02C8}v\u{0254}tk\u{0251}");
}

#[test]
fn h_is_silent_after_the_root_start() {
    // unsegmented "hundehaus" is one root, so its second "h" vanishes
    // and the "d" stays voiced before the following vowel
    assert_eq!(
        engine().transcribe("hundehaus"),
        "\u{02C8}h\u{028A}ndeaos"
    );
}

#[test]
fn compound_roots_after_the_first_take_secondary_stress() {
    let t = with_vocab(&["hunde", "haus"]);
    assert_eq!(
        t.transcribe("hundehaus"),
        "\u{02C8}h\u{028A}nd\u{0259}\u{02CC}haos"
    );
}

#[test]
fn chained_prefixes_link_into_one_block() {
    assert_eq!(engine().transcribe("hinein"), "h\u{026A}\u{02C8}naen");
}

// ---------------------------------------------------------------------------
// Overrides and degradation
// ---------------------------------------------------------------------------

#[test]
fn override_bypasses_the_rule_engine() {
    let mut overrides = OverrideTable::new();
    overrides.insert("hund", "recorded");
    let t = Transcriber::new(WordSet::new(), overrides).expect("lexicon");
    assert_eq!(t.transcribe("hund"), "recorded");
    assert_eq!(t.transcription("hund").pieces().len(), 1);
}

#[test]
fn bare_q_degrades_to_a_marker() {
    let t = engine();
    let tr = t.transcription("qat");
    assert_eq!(tr.ipa(), "\u{02C8}\u{27E8}q?\u{27E9}\u{0251}\u{02D0}t");
    assert_eq!(tr.unresolved().count(), 1);
}

#[test]
fn unhandled_vowel_run_degrades_to_a_marker() {
    // "io" outside the "-tion" pattern has no reading
    let t = engine();
    let tr = t.transcription("radio");
    assert_eq!(tr.ipa(), "\u{02C8}\u{027E}\u{0251}\u{02D0}d\u{27E8}io?\u{27E9}");
    assert!(!tr.is_fully_resolved());
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(engine().transcribe(""), "");
}

// ---------------------------------------------------------------------------
// Text alignment
// ---------------------------------------------------------------------------

#[test]
fn text_lines_align_source_over_ipa() {
    let text = engine().transcribe_text("der hund");
    assert_eq!(text.lines.len(), 1);
    let line = &text.lines[0];
    assert_eq!(line.source, " der   hund ");
    assert_eq!(line.ipa, "\u{02C8}de\u{02D0}\u{027E} \u{02C8}h\u{028A}nt ");
    assert_eq!(
        line.source.chars().count(),
        line.ipa.chars().count()
    );
}
