//! Performance benchmarks for the hyphenation pipeline
//!
//! Run with: cargo bench --bench hyphenation_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hyphenate_core::{AlignmentPolicy, Config, Hyphenator, PatternDictionary};
use std::hint::black_box;

const PATTERNS: &str = "\
.ach4 .ad4der .af1t .al3t .am5at .an5c .ang4 .ani5m .ant4 .an3te
hy3ph he2n hena4 hen5at 1na n2at 1tio 2io o2n
.ex5er 4ern. er1n 1ba ab1 1ca 1ta 1ra 2b1b 2c1c 2l1l 2n1n 2t1t
";

/// Generate test text of specified size
fn generate_text(size: usize) -> String {
    let base_sentence = "Hyphenation patterns let a typesetter break long words at the margin. ";
    let repeat_count = size / base_sentence.len() + 1;

    let mut text = base_sentence.repeat(repeat_count);
    text.truncate(size);
    text
}

fn hyphenator(config: Config) -> Hyphenator {
    Hyphenator::with_config(PatternDictionary::parse(PATTERNS).dictionary, config)
}

/// Benchmark single words of increasing length
fn bench_word_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_lengths");
    let hyphenator = hyphenator(Config::default());

    for word in ["hyphen", "hyphenation", "antidisestablishmentarianism"] {
        group.bench_with_input(BenchmarkId::new("hyphenate", word.len()), word, |b, word| {
            b.iter(|| {
                let _ = hyphenator.hyphenate(black_box(word)).unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark running text of different sizes
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let hyphenator = hyphenator(Config::default());

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("hyphenate_text", size), &text, |b, text| {
            b.iter(|| {
                let _ = hyphenator.hyphenate_text(black_box(text)).unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark the alignment policies against each other
fn bench_alignment_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment_policies");
    let text = generate_text(10_240);

    for (name, policy) in [
        ("first_only", AlignmentPolicy::FirstOnly),
        ("all", AlignmentPolicy::All),
    ] {
        let config = Config::builder().alignment(policy).build().unwrap();
        let hyphenator = hyphenator(config);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("policy", name), &text, |b, text| {
            b.iter(|| {
                let _ = hyphenator.hyphenate_text(black_box(text)).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_word_lengths,
    bench_text_sizes,
    bench_alignment_policies
);
criterion_main!(benches);
