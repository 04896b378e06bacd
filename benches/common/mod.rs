//! Shared data generators and constants for the benchmarks.
#![allow(dead_code)]

use rand::distributions::Alphanumeric;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use spellbloom::BloomFilter;

/// Filter capacities benchmarked.
pub const SIZES: &[usize] = &[1_000, 10_000, 100_000, 1_000_000];

/// Target false positive rates benchmarked.
pub const FP_RATES: &[f64] = &[0.1, 0.01, 0.001, 0.0001];

/// Word lengths benchmarked.
pub const WORD_LENGTHS: &[usize] = &[4, 8, 16, 64];

/// `count` random alphanumeric words of exactly `len` characters.
pub fn generate_words(count: usize, len: usize, seed: u64) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect()
        })
        .collect()
}

/// Dictionary-like words: "word_00000001", "word_00000002", ...
pub fn generate_sequential_words(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("word_{:08}", i)).collect()
}

/// A filter sized for `words` with every word inserted.
pub fn filled_filter(words: &[String], fp_rate: f64) -> BloomFilter {
    let mut filter = BloomFilter::new(words.len().max(1), fp_rate).expect("valid parameters");
    filter.extend(words);
    filter
}
