use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use porter_core::enums::StemMode;
use porter_en::PorterHandle;

const WORDS: &[&str] = &[
    "caresses",
    "ponies",
    "agreed",
    "plastered",
    "motoring",
    "hopping",
    "filing",
    "happiness",
    "relational",
    "vietnamization",
    "sensibility",
    "hopefulness",
    "generalizations",
    "oscillators",
    "collaboration",
    "effective",
    "cushion",
    "run",
];

fn bench_full_cascade(c: &mut Criterion) {
    let handle = PorterHandle::new();
    c.bench_function("stem_full_cascade", |b| {
        b.iter(|| {
            for word in WORDS {
                let _ = black_box(handle.stem(black_box(word)));
            }
        })
    });
}

fn bench_plurals_only(c: &mut Criterion) {
    let handle = PorterHandle::new();
    c.bench_function("stem_plurals_only", |b| {
        b.iter(|| {
            for word in WORDS {
                let _ = black_box(handle.stem_with(black_box(word), StemMode::PluralsOnly));
            }
        })
    });
}

fn bench_stopword_bypass(c: &mut Criterion) {
    let handle = PorterHandle::new();
    handle.set_stopwords(WORDS.iter().copied());
    c.bench_function("stem_stopword_bypass", |b| {
        b.iter(|| {
            for word in WORDS {
                let _ = black_box(handle.stem(black_box(word)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_full_cascade,
    bench_plurals_only,
    bench_stopword_bypass
);
criterion_main!(benches);
