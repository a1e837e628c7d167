use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use kt_core::dict::{BinaryDictionary, DictBuilder};

fn bench_dict() -> BinaryDictionary {
    let mut builder = DictBuilder::new();
    for (word, weight) in [
        ("a", 200),
        ("hi", 130),
        ("hello", 120),
        ("there", 140),
        ("how", 150),
        ("are", 80),
        ("you", 200),
        ("your", 100),
    ] {
        builder.add_unigram(word, weight).unwrap();
    }
    for (words, weight) in [
        (&["hello", "there"][..], 20),
        (&["hello", "you"][..], 25),
        (&["how", "are", "you"][..], 80),
        (&["you", "are", "there"][..], 30),
        (&["are", "you", "there"][..], 30),
    ] {
        builder.add_ngram(words, weight).unwrap();
    }
    BinaryDictionary::from_bytes(builder.build().unwrap()).unwrap()
}

fn bench_queries(c: &mut Criterion) {
    let dict = bench_dict();

    c.bench_function("exists_hit", |b| {
        b.iter(|| dict.exists(black_box("hello")))
    });
    c.bench_function("exists_miss", |b| {
        b.iter(|| dict.exists(black_box("bonjour")))
    });
    c.bench_function("predictions", |b| {
        b.iter(|| dict.predictions(black_box(&["how", "are"]), 4))
    });
    c.bench_function("corrections_one_edit", |b| {
        b.iter(|| dict.corrections(black_box("yuu"), 10))
    });

    // Per-instance caches; a fresh dictionary shows the uncached walk.
    c.bench_function("exists_uncached", |b| {
        b.iter_batched(
            bench_dict,
            |fresh| fresh.exists(black_box("hello")),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);
