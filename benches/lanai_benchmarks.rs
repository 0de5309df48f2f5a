//! Lanai Benchmarks
//!
//! Benchmarks for the Lanai Trie, implemented with Criterion.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use lanai_lib::data_structures::lanai_trie::{str_distance, LanaiTrie, SPELLING_DISTANCE};

/// Deterministic pseudo-words over a small alphabet.
fn generate_words(count: usize) -> Vec<String> {
    const ALPHABET: &[u8] = b"abcdefghij";
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let length = 3 + (state % 8) as usize;
            (0..length)
                .map(|i| ALPHABET[((state >> (i * 4)) % ALPHABET.len() as u64) as usize] as char)
                .collect()
        })
        .collect()
}

fn build(words: &[String]) -> LanaiTrie {
    let mut trie = LanaiTrie::new();
    for word in words {
        trie.insert(word).unwrap();
    }
    trie
}

/// Benchmark insertion and lookup
fn bench_insert_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("lanai_trie");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [1_000, 10_000].iter() {
        let words = generate_words(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("insert", size), &words, |b, words| {
            b.iter(|| black_box(build(words)));
        });

        let trie = build(&words);
        group.bench_with_input(BenchmarkId::new("search", size), &words, |b, words| {
            b.iter(|| {
                for word in words {
                    black_box(trie.search(word));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("delete", size), &words, |b, words| {
            b.iter_batched(
                || trie.clone(),
                |mut trie| {
                    for word in words {
                        black_box(trie.delete(word));
                    }
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

/// Benchmark the tree walk against a brute-force scan of every word
fn bench_spelling(c: &mut Criterion) {
    let mut group = c.benchmark_group("spelling_suggestions");
    group.measurement_time(Duration::from_secs(2));

    for size in [1_000, 10_000].iter() {
        let trie = build(&generate_words(*size));

        group.bench_with_input(BenchmarkId::new("trie_walk", size), &trie, |b, trie| {
            b.iter(|| black_box(trie.get_spelling_suggestions(black_box("abcdefg"))));
        });

        group.bench_with_input(BenchmarkId::new("brute_force", size), &trie, |b, trie| {
            b.iter(|| {
                let matches: Vec<String> = trie
                    .get_all_words()
                    .into_iter()
                    .filter(|word| str_distance(word, black_box("abcdefg")) <= SPELLING_DISTANCE)
                    .collect();
                black_box(matches)
            });
        });

        group.bench_with_input(BenchmarkId::new("auto_suggest", size), &trie, |b, trie| {
            b.iter(|| black_box(trie.auto_suggest(black_box("ab"))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert_search, bench_spelling);
criterion_main!(benches);
