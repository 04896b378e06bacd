//! Bit-position strategies.
//!
//! A strategy maps `(element, j, m)` to a bit position in `[0, m)` for hash
//! function index `j`. The k hash functions of a filter are this single
//! routine evaluated at `j = 0..k`.
//!
//! # Double Hashing (Kirsch & Mitzenmacher 2006)
//!
//! ```text
//! s(x)  = 1 + (h₂(x) mod (m - 1))
//! gⱼ(x) = (h₁(x) + j·s(x)) mod m
//! ```
//!
//! Two independently seeded base hashes give k positions with the same
//! asymptotic false positive rate as k independent hash functions. The step
//! `s` is kept in `[1, m)`; a step of 0 mod m would put all k positions on
//! the same bit.
//!
//! # Repeated Digest
//!
//! ```text
//! gⱼ(x) = int(SHA-256(x ‖ x ‖ … ‖ x)) mod m     (x repeated j + 1 times)
//! ```
//!
//! Function `j` feeds the element into one digest state `j + 1` times and
//! reduces the big-endian digest modulo `m`. Adjacent functions share most of
//! their input, so independence is weaker than with double hashing.
//!
//! # References
//!
//! - Kirsch, A., & Mitzenmacher, M. (2006). "Less Hashing, Same Performance: Building a Better Bloom Filter"

#![allow(clippy::cast_possible_truncation)]

use super::hasher::{BloomHasher, XxHasher};
use sha2::{Digest, Sha256};

/// Maps an element and a hash function index to a bit position.
pub trait PositionStrategy {
    /// Position of hash function `index` for `element`, in `[0, num_bits)`.
    ///
    /// # Panics
    ///
    /// May panic if `num_bits == 0`.
    fn position(&self, element: &[u8], index: usize, num_bits: usize) -> usize;

    /// Positions of hash functions `0..k`, in order.
    fn positions(&self, element: &[u8], k: usize, num_bits: usize) -> Vec<usize> {
        (0..k)
            .map(|index| self.position(element, index, num_bits))
            .collect()
    }

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;
}

/// Double hashing over a [`BloomHasher`] pair.
///
/// # Examples
///
/// ```
/// use spellbloom::hash::strategies::{DoubleHashing, PositionStrategy};
/// use spellbloom::hash::XxHasher;
///
/// let strategy = DoubleHashing::new(XxHasher::new());
/// let positions = strategy.positions(b"cat", 4, 480);
/// assert_eq!(positions.len(), 4);
/// assert!(positions.iter().all(|&p| p < 480));
/// assert_eq!(positions[2], strategy.position(b"cat", 2, 480));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleHashing<H = XxHasher> {
    hasher: H,
}

impl<H: BloomHasher> DoubleHashing<H> {
    /// Double hashing over `hasher`.
    #[must_use]
    pub fn new(hasher: H) -> Self {
        Self { hasher }
    }

    #[inline]
    fn derive(h1: u64, h2: u64, index: usize, num_bits: usize) -> usize {
        let m = num_bits as u128;
        if m == 1 {
            return 0;
        }
        let step = 1 + u128::from(h2) % (m - 1);
        ((u128::from(h1) + index as u128 * step) % m) as usize
    }
}

impl<H: BloomHasher> PositionStrategy for DoubleHashing<H> {
    #[inline]
    fn position(&self, element: &[u8], index: usize, num_bits: usize) -> usize {
        let (h1, h2) = self.hasher.hash_bytes_pair(element);
        Self::derive(h1, h2, index, num_bits)
    }

    fn positions(&self, element: &[u8], k: usize, num_bits: usize) -> Vec<usize> {
        let (h1, h2) = self.hasher.hash_bytes_pair(element);
        (0..k)
            .map(|index| Self::derive(h1, h2, index, num_bits))
            .collect()
    }

    fn name(&self) -> &'static str {
        "DoubleHashing"
    }
}

/// Salting by repetition over SHA-256.
///
/// # Examples
///
/// ```
/// use spellbloom::hash::strategies::{PositionStrategy, RepeatedDigest};
///
/// let positions = RepeatedDigest.positions(b"dog", 4, 15);
/// assert_eq!(positions.len(), 4);
/// assert_eq!(positions[3], RepeatedDigest.position(b"dog", 3, 15));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RepeatedDigest;

impl PositionStrategy for RepeatedDigest {
    fn position(&self, element: &[u8], index: usize, num_bits: usize) -> usize {
        let mut state = Sha256::new();
        for _ in 0..=index {
            state.update(element);
        }
        reduce_be(&state.finalize(), num_bits)
    }

    fn positions(&self, element: &[u8], k: usize, num_bits: usize) -> Vec<usize> {
        // Each function extends the previous one's input by one more copy.
        let mut state = Sha256::new();
        (0..k)
            .map(|_| {
                state.update(element);
                reduce_be(&state.clone().finalize(), num_bits)
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "RepeatedDigest"
    }
}

/// Reduce a big-endian unsigned integer modulo `modulus` without widening
/// past 128 bits.
fn reduce_be(bytes: &[u8], modulus: usize) -> usize {
    let modulus = modulus as u128;
    bytes
        .iter()
        .fold(0u128, |acc, &byte| ((acc << 8) | u128::from(byte)) % modulus) as usize
}
