use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use marquee::domain::text::{truncate_text, wrap_text, wrap_words};

const OVERVIEW: &str = "Cobb, a skilled thief who commits corporate espionage by infiltrating \
the subconscious of his targets, is offered a chance to regain his old life as payment for a \
task considered to be impossible: \"inception\", the implantation of another person's idea into \
a target's subconscious. 夢の中の夢、そのまた夢の中へ。彼らは任務を遂行できるのか。";

fn benchmark(c: &mut Criterion) {
    c.bench_function("wrap-text", |b| {
        b.iter(|| wrap_text(black_box(OVERVIEW), black_box(28)))
    });

    c.bench_function("wrap-words", |b| {
        b.iter(|| wrap_words(black_box(OVERVIEW), black_box(28)))
    });

    c.bench_function("wrap-words-card-caption", |b| {
        b.iter(|| truncate_text(&wrap_words(black_box(OVERVIEW), black_box(28)), black_box(4)))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
