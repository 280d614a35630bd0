// Criterion benchmarks for accent-en.
//
// Inputs are the example words of the feature knowledge base.
//
// Run:
//   cargo bench -p accent-en

use std::hint::black_box;

use accent_en::AccentHandle;
use accent_en::knowledge::records;
use criterion::{Criterion, criterion_group, criterion_main};

fn example_words() -> Vec<(&'static str, &'static str)> {
    records()
        .flat_map(|record| record.examples.iter().map(|e| (e.word, e.transcription)))
        .collect()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_ipa(c: &mut Criterion) {
    let handle = AccentHandle::new();
    let words = example_words();
    c.bench_function("transcription_to_ipa/examples", |b| {
        b.iter(|| {
            for (_, transcription) in &words {
                black_box(handle.transcription_to_ipa(black_box(transcription)));
            }
        });
    });
}

fn bench_syllabify(c: &mut Criterion) {
    let handle = AccentHandle::new();
    let words = example_words();
    c.bench_function("syllabify/examples", |b| {
        b.iter(|| {
            for (_, transcription) in &words {
                black_box(handle.syllabify(black_box(transcription)));
            }
        });
    });
}

fn bench_classify(c: &mut Criterion) {
    let handle = AccentHandle::new();
    let words = example_words();
    c.bench_function("classify_features/examples", |b| {
        b.iter(|| {
            for (word, transcription) in &words {
                black_box(handle.classify_features(black_box(word), black_box(transcription)));
            }
        });
    });
}

fn bench_word_entry(c: &mut Criterion) {
    let handle = AccentHandle::new();
    let words = example_words();
    c.bench_function("build_word_entry/examples", |b| {
        b.iter(|| {
            for (word, transcription) in &words {
                black_box(handle.build_word_entry(word, transcription, "clip1"));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_ipa,
    bench_syllabify,
    bench_classify,
    bench_word_entry
);
criterion_main!(benches);
