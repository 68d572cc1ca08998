use criterion::{black_box, criterion_group, criterion_main, Criterion};
use word_frequency::{analyze_text, count_token_frequencies, top_n, Normalizer};

const TEXT: &str = "Sunce je izašlo iznad mora, i more je zasjalo. \
    Ribari su se vratili u luku; more je bilo mirno, a nebo vedro. \
    \"Gdje je brod?\" pitala je djevojka. Brod je u luci (iza rta)!";

fn benchmark_normalize(c: &mut Criterion) {
    let normalizer = Normalizer::new();

    c.bench_function("normalize", |b| {
        b.iter(|| normalizer.normalize(black_box(TEXT)))
    });
}

fn benchmark_count_and_rank(c: &mut Criterion) {
    let tokens = Normalizer::new().normalize(&TEXT.repeat(100));

    c.bench_function("count_and_rank", |b| {
        b.iter(|| top_n(&count_token_frequencies(black_box(&tokens)), 15))
    });
}

fn benchmark_analyze_text(c: &mut Criterion) {
    c.bench_function("analyze_text", |b| b.iter(|| analyze_text(black_box(TEXT))));
}

criterion_group!(
    benches,
    benchmark_normalize,
    benchmark_count_and_rank,
    benchmark_analyze_text
);
criterion_main!(benches);
