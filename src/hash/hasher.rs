//! Base hash trait and the XXH3 implementation.
//!
//! Hashers turn bytes into 64-bit values; strategies (see
//! [`strategies`](super::strategies)) turn those values into bit positions.
//!
//! ```
//! use spellbloom::hash::{BloomHasher, XxHasher};
//!
//! let hasher = XxHasher::new();
//! let (h1, h2) = hasher.hash_bytes_pair(b"hello");
//! assert_ne!(h1, h2);
//! assert_eq!((h1, h2), hasher.hash_bytes_pair(b"hello"));
//! ```

use xxhash_rust::xxh3::{xxh3_64, xxh3_64_with_seed};

/// Seed offset used to derive the second hash of a pair.
const PAIR_SEED_OFFSET: u64 = 0x9e37_79b9_7f4a_7c15;

/// Base hasher for Bloom filter position derivation.
///
/// Implementations must be deterministic across runs: the same bytes and
/// seed always produce the same value.
pub trait BloomHasher {
    /// Hash arbitrary bytes to a 64-bit value.
    fn hash_bytes(&self, bytes: &[u8]) -> u64;

    /// Hash bytes under an extra seed. Different seeds must give
    /// statistically independent outputs.
    fn hash_bytes_with_seed(&self, bytes: &[u8], seed: u64) -> u64;

    /// Two independent hashes of the same input, for double hashing.
    fn hash_bytes_pair(&self, bytes: &[u8]) -> (u64, u64) {
        (
            self.hash_bytes(bytes),
            self.hash_bytes_with_seed(bytes, PAIR_SEED_OFFSET),
        )
    }

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;
}

/// XXH3-64 hasher from the `xxhash-rust` crate.
///
/// The algorithm output is frozen, so positions are stable across processes
/// and releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XxHasher {
    seed: u64,
}

impl XxHasher {
    /// Hasher with seed `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self { seed: 0 }
    }

    /// Hasher with an explicit seed.
    ///
    /// ```
    /// use spellbloom::hash::{BloomHasher, XxHasher};
    ///
    /// let a = XxHasher::with_seed(1).hash_bytes(b"test");
    /// let b = XxHasher::with_seed(2).hash_bytes(b"test");
    /// assert_ne!(a, b);
    /// ```
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// The configured seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl BloomHasher for XxHasher {
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        if self.seed == 0 {
            xxh3_64(bytes)
        } else {
            xxh3_64_with_seed(bytes, self.seed)
        }
    }

    #[inline]
    fn hash_bytes_with_seed(&self, bytes: &[u8], seed: u64) -> u64 {
        xxh3_64_with_seed(bytes, self.seed.wrapping_add(seed))
    }

    #[inline]
    fn name(&self) -> &'static str {
        "XXH3-64"
    }
}
