//! Standard Bloom filter over byte-sequence elements.
//!
//! # Algorithm
//!
//! A Bloom filter is a space-efficient probabilistic data structure that
//! supports two operations:
//!
//! - Insert: add an element to the set (irreversible)
//! - Query: test whether an element is in the set
//!
//! # Properties
//!
//! - **False positives**: possible, bounded by the configured error rate at
//!   capacity
//! - **False negatives**: never occur
//! - **Space**: ~4.8 bits per element at 10% FP, ~9.6 at 1%
//! - **Time**: O(k) for both insert and query
//!
//! # Sizing
//!
//! Given capacity `n` and target rate `p`:
//!
//! - m = ⌈-n × ln(p) / (ln 2)²⌉ (filter size in bits)
//! - k = ⌈(m/n) × ln 2⌉ (number of hash functions)
//!
//! Both are computed once at construction (see
//! [`params`](crate::core::params)) and never change.
//!
//! # Concurrency Model
//!
//! `insert` takes `&mut self` and `contains` takes `&self`. Share a filter
//! between threads by wrapping it in `RwLock`.
//!
//! # Examples
//!
//! ```
//! use spellbloom::BloomFilter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut filter = BloomFilter::new(3, 0.1)?;
//! assert_eq!((filter.num_bits(), filter.hash_count()), (15, 4));
//!
//! for word in ["cat", "dog", "bird"] {
//!     filter.insert(word);
//! }
//!
//! assert!(filter.contains("cat"));
//! assert!(filter.contains("dog"));
//! assert!(filter.contains("bird"));
//! # Ok(())
//! # }
//! ```

#![allow(clippy::cast_precision_loss)]

use crate::core::bitset::PackedBitArray;
use crate::core::filter::MembershipFilter;
use crate::core::params;
use crate::error::{Result, SpellBloomError};
use crate::hash::HashScheme;

/// Fixed-size Bloom filter with `m` bits and `k` position functions.
///
/// Elements are anything that views as bytes (`&str`, `String`, `&[u8]`,
/// `Vec<u8>`). The filter owns its bit array; elements are not retained.
#[derive(Debug, Clone, PartialEq)]
pub struct BloomFilter {
    bits: PackedBitArray,
    capacity: usize,
    error_rate: f64,
    k: usize,
    scheme: HashScheme,
    seed: u64,
}

impl BloomFilter {
    /// Create a filter sized for `capacity` elements at `error_rate`, using
    /// the default [`HashScheme`].
    ///
    /// # Errors
    ///
    /// [`SpellBloomError::InvalidParameters`] if `capacity == 0`,
    /// `error_rate` is not strictly between 0 and 1, or the derived bit array
    /// cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use spellbloom::BloomFilter;
    ///
    /// let filter = BloomFilter::new(100, 0.1).unwrap();
    /// assert_eq!(filter.num_bits(), 480);
    /// assert_eq!(filter.hash_count(), 4);
    ///
    /// assert!(BloomFilter::new(0, 0.1).is_err());
    /// assert!(BloomFilter::new(100, 1.0).is_err());
    /// ```
    pub fn new(capacity: usize, error_rate: f64) -> Result<Self> {
        Self::with_scheme(capacity, error_rate, HashScheme::default())
    }

    /// Create a filter with an explicit hash scheme.
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilter::new`].
    pub fn with_scheme(capacity: usize, error_rate: f64, scheme: HashScheme) -> Result<Self> {
        Self::with_scheme_and_seed(capacity, error_rate, scheme, 0)
    }

    /// Create a filter with an explicit hash scheme and base-hash seed.
    ///
    /// Two filters built with the same arguments set the same bits for the
    /// same elements, in any process.
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilter::new`].
    pub fn with_scheme_and_seed(
        capacity: usize,
        error_rate: f64,
        scheme: HashScheme,
        seed: u64,
    ) -> Result<Self> {
        let (m, k) = params::filter_params(capacity, error_rate)?;
        let bits = PackedBitArray::new(m)?;

        tracing::debug!(
            capacity,
            error_rate,
            bits = m,
            hash_count = k,
            scheme = scheme.name(),
            "sized bloom filter"
        );

        Ok(Self {
            bits,
            capacity,
            error_rate,
            k,
            scheme,
            seed,
        })
    }

    /// Expected number of distinct elements the filter was sized for.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Target false positive rate at capacity.
    #[must_use]
    pub fn error_rate(&self) -> f64 {
        self.error_rate
    }

    /// Number of bits (m).
    #[must_use]
    pub fn num_bits(&self) -> usize {
        self.bits.len()
    }

    /// Number of position functions (k).
    #[must_use]
    pub fn hash_count(&self) -> usize {
        self.k
    }

    /// Position derivation scheme.
    #[must_use]
    pub fn scheme(&self) -> HashScheme {
        self.scheme
    }

    /// Seed passed to the base hashes.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Read-only view of the bit array.
    #[must_use]
    pub fn bits(&self) -> &PackedBitArray {
        &self.bits
    }

    /// Position of hash function `j` for `element`.
    ///
    /// Deterministic, and independent of every other index and of the filter
    /// contents.
    ///
    /// # Errors
    ///
    /// [`SpellBloomError::IndexOutOfRange`] if `j >= hash_count()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spellbloom::BloomFilter;
    ///
    /// let filter = BloomFilter::new(100, 0.1).unwrap();
    /// let p = filter.bit_position("cat", 2).unwrap();
    /// assert!(p < filter.num_bits());
    /// assert_eq!(p, filter.bit_positions("cat")[2]);
    /// assert!(filter.bit_position("cat", 4).is_err());
    /// ```
    pub fn bit_position(&self, element: impl AsRef<[u8]>, j: usize) -> Result<usize> {
        if j >= self.k {
            return Err(SpellBloomError::index_out_of_range(j, self.k));
        }
        Ok(self
            .scheme
            .position(self.seed, element.as_ref(), j, self.num_bits()))
    }

    /// All `k` positions for `element`, ordered by function index.
    #[must_use]
    pub fn bit_positions(&self, element: impl AsRef<[u8]>) -> Vec<usize> {
        self.scheme
            .positions(self.seed, element.as_ref(), self.k, self.num_bits())
    }

    /// Insert an element. Inserting it again changes nothing.
    #[inline]
    pub fn insert(&mut self, element: impl AsRef<[u8]>) {
        for position in self.bit_positions(element) {
            self.bits.raise(position);
        }
    }

    /// Check if an element might be in the filter.
    ///
    /// # Returns
    ///
    /// - `true`: element might be in the set (or false positive)
    /// - `false`: element is definitely not in the set
    #[must_use]
    #[inline]
    pub fn contains(&self, element: impl AsRef<[u8]>) -> bool {
        self.bit_positions(element)
            .into_iter()
            .all(|position| self.bits.bit(position))
    }

    /// Number of bits currently set.
    #[must_use]
    pub fn count_set_bits(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of set bits, in `[0, 1]`.
    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        self.count_set_bits() as f64 / self.num_bits() as f64
    }

    /// False positive rate estimated from the current fill: `fill_ratio^k`.
    ///
    /// A random non-member passes only if all k of its positions are set.
    #[must_use]
    pub fn estimated_fp_rate(&self) -> f64 {
        self.fill_ratio().powi(self.k as i32)
    }

    /// Theoretical false positive rate after `n` distinct insertions.
    ///
    /// ```
    /// use spellbloom::BloomFilter;
    ///
    /// let filter = BloomFilter::new(1000, 0.01).unwrap();
    /// let p = filter.theoretical_fp_rate(1000);
    /// assert!((p - 0.01).abs() < 0.001);
    /// ```
    #[must_use]
    pub fn theoretical_fp_rate(&self, n: usize) -> f64 {
        // m >= 1 and k >= 1 by construction
        params::expected_fp_rate(self.num_bits(), n, self.k).unwrap_or(1.0)
    }

    /// `true` if nothing has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count_set_bits() == 0
    }

    /// Reset every bit to zero, keeping the sizing.
    pub fn clear(&mut self) {
        self.bits.clear();
    }

    /// Bytes used by the bit array, slots plus bookkeeping.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.bits.memory_usage()
    }
}

impl<T: AsRef<[u8]>> Extend<T> for BloomFilter {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl MembershipFilter for BloomFilter {
    fn insert(&mut self, element: &[u8]) {
        BloomFilter::insert(self, element);
    }

    fn contains(&self, element: &[u8]) -> bool {
        BloomFilter::contains(self, element)
    }

    fn num_bits(&self) -> usize {
        BloomFilter::num_bits(self)
    }

    fn hash_count(&self) -> usize {
        self.k
    }

    fn estimated_fp_rate(&self) -> f64 {
        BloomFilter::estimated_fp_rate(self)
    }
}
