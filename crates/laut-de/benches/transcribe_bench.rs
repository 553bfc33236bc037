// Criterion benchmarks for laut-de.
//
// The phonological tables are compiled in, so no external data is needed.
//
// Run:
//   cargo bench -p laut-de

use criterion::{criterion_group, criterion_main, Criterion};

use laut_de::{OverrideTable, Transcriber, WordSet};

// 50 common German words for end-to-end benchmarking.
const COMMON_WORDS: &[&str] = &[
    "hund", "katze", "haus", "auto", "wasser", "wald", "see", "baum",
    "blume", "meer", "fluss", "insel", "berg", "gras", "pflanze", "tier",
    "kind", "frau", "mann", "junge", "mädchen", "mutter", "vater", "familie",
    "schule", "laden", "bank", "bücherei", "krankenhaus", "hotel",
    "gaststätte", "museum", "theater", "musik", "kunst", "geschichte",
    "physik", "chemie", "biologie", "wirtschaft", "politik", "natur",
    "umwelt", "reise", "flug", "zug", "bus", "schiff", "tennis", "golf",
];

fn transcriber() -> Transcriber {
    Transcriber::new(WordSet::new(), OverrideTable::new()).expect("lexicon")
}

/// Transcribe all 50 common words.
fn bench_transcribe_words(c: &mut Criterion) {
    let handle = transcriber();

    c.bench_function("transcribe_50_words", |b| {
        b.iter(|| {
            for word in COMMON_WORDS {
                std::hint::black_box(handle.transcribe(word));
            }
        });
    });
}

/// Run the analysis front half (segmentation, stripping, fragmentation)
/// without rule application.
fn bench_analyze_words(c: &mut Criterion) {
    let handle = transcriber();

    c.bench_function("analyze_50_words", |b| {
        b.iter(|| {
            for word in COMMON_WORDS {
                std::hint::black_box(handle.analyze(word));
            }
        });
    });
}

/// Segment compounds against a small vocabulary.
fn bench_segment_compounds(c: &mut Criterion) {
    let words: WordSet = [
        "hunde", "haus", "wasser", "fall", "kranken", "abend", "essen",
        "garten", "zaun", "tür", "schloss",
    ]
    .into_iter()
    .collect();
    let handle = Transcriber::new(words, OverrideTable::new()).expect("lexicon");

    let compounds = [
        "hundehaus",
        "wasserfall",
        "krankenhaus",
        "abendessen",
        "gartenzaun",
        "türschloss",
        "hundehausgartenzaun",
    ];

    c.bench_function("segment_7_compounds", |b| {
        b.iter(|| {
            for word in &compounds {
                std::hint::black_box(handle.segment(word));
            }
        });
    });
}

/// Transcribe and align a short paragraph.
fn bench_transcribe_text(c: &mut Criterion) {
    let handle = transcriber();

    let text = "Der Hund lief schnell durch den Wald und sah einen Hasen. \
                Der Hase floh in seinen Bau, aber der Hund wartete davor. \
                Am Ende wurden beide müde und schliefen ein.";

    c.bench_function("transcribe_3_sentences", |b| {
        b.iter(|| {
            std::hint::black_box(handle.transcribe_text(text));
        });
    });
}

criterion_group!(
    benches,
    bench_transcribe_words,
    bench_analyze_words,
    bench_segment_compounds,
    bench_transcribe_text,
);
criterion_main!(benches);
