//! Word filter throughput benchmark
//!
//! Measures the in-memory pipeline on synthetic dictionaries roughly the
//! size of `/usr/share/dict` lists (tens of thousands of lines).
//!
//! # Run Instructions
//!
//! ```bash
//! cargo bench --bench filter_throughput
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wordsift::filter::{alphabet_filter, singularity_filter};
use wordsift::sift;

/// Build a word list with proper nouns, possessives and plurals mixed in
fn synthetic_dictionary(size: usize) -> Vec<String> {
    let mut words = Vec::with_capacity(size);
    let mut i = 0usize;
    while words.len() < size {
        let stem: String = (0..5)
            .map(|shift| (b'a' + ((i >> (shift * 5)) % 26) as u8) as char)
            .collect();
        match i % 5 {
            0 => words.push(format!("{}{}", stem[..1].to_uppercase(), &stem[1..])),
            1 => words.push(format!("{}'s", stem)),
            2 => {
                words.push(stem.clone());
                words.push(format!("{}s", stem));
            }
            _ => words.push(stem),
        }
        i += 1;
    }
    words.truncate(size);
    words
}

fn bench_sift(c: &mut Criterion) {
    let mut group = c.benchmark_group("sift");

    for size in [1_000, 10_000, 100_000] {
        let words = synthetic_dictionary(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &words, |b, words| {
            b.iter(|| sift(black_box(words.as_slice())));
        });
    }

    group.finish();
}

fn bench_singularity_filter(c: &mut Criterion) {
    let words = synthetic_dictionary(100_000);
    let candidates = alphabet_filter(&words);

    c.bench_function("singularity_filter_100k", |b| {
        b.iter(|| singularity_filter(black_box(&candidates)));
    });
}

criterion_group!(benches, bench_sift, bench_singularity_filter);
criterion_main!(benches);
