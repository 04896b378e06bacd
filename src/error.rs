//! Error types for spellbloom operations.
//!
//! Every fallible operation in the crate returns [`Result<T>`], whose error
//! type is [`SpellBloomError`]. Errors are raised synchronously to the
//! immediate caller; nothing in the crate retries.
//!
//! # Error Propagation
//!
//! ```
//! use spellbloom::{Result, SpellBloomError};
//! use spellbloom::core::params::{compute_k, compute_m};
//!
//! fn sizing(capacity: usize, error_rate: f64) -> Result<(usize, usize)> {
//!     let m = compute_m(capacity, error_rate)?;
//!     let k = compute_k(capacity, m)?;
//!     Ok((m, k))
//! }
//! # assert_eq!(sizing(100, 0.1).unwrap(), (480, 4));
//! # assert!(matches!(sizing(0, 0.1), Err(SpellBloomError::InvalidParameters { .. })));
//! ```

use thiserror::Error;

/// Result type alias for spellbloom operations.
pub type Result<T> = std::result::Result<T, SpellBloomError>;

/// Errors that can occur while building or using a filter.
///
/// `Clone` and `PartialEq` are derived so tests can compare errors directly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpellBloomError {
    /// Filter parameters are outside their valid domain.
    ///
    /// Raised when the capacity is zero, the error rate is not in `(0, 1)`,
    /// or the derived size does not fit in memory. No filter is returned.
    #[error("Invalid Bloom filter parameters: {message}.")]
    InvalidParameters {
        /// Human-readable description of what's invalid.
        message: String,
    },

    /// A bit array was requested with a non-positive number of bits.
    ///
    /// Unreachable through [`BloomFilter`](crate::BloomFilter) construction,
    /// since its sizing always yields at least one bit.
    #[error("Invalid bit array size: {size} bits. Must be greater than 0.")]
    InvalidSize {
        /// The requested number of bits.
        size: usize,
    },

    /// A bit or hash-function index outside its valid range.
    ///
    /// Any occurrence from inside the filter indicates a sizing or hashing
    /// bug; it is not a recoverable condition.
    #[error("Index {index} out of range for length {length}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of valid indices.
        length: usize,
    },

    /// A trial was asked for more misspellings than there are words to sample.
    #[error("Cannot sample {requested} words from a list of {available}.")]
    SampleTooLarge {
        /// Number of samples requested.
        requested: usize,
        /// Number of distinct words available.
        available: usize,
    },

    /// A trial was started with no words to insert.
    #[error("Word list is empty.")]
    EmptyWordList,
}

impl SpellBloomError {
    /// Create an `InvalidParameters` error with a formatted message.
    ///
    /// # Examples
    /// ```
    /// use spellbloom::SpellBloomError;
    ///
    /// let err = SpellBloomError::invalid_parameters(format!("capacity={}", 0));
    /// assert!(err.to_string().contains("capacity=0"));
    /// ```
    #[must_use]
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            message: message.into(),
        }
    }

    /// Create an `InvalidSize` error.
    #[must_use]
    pub fn invalid_size(size: usize) -> Self {
        Self::InvalidSize { size }
    }

    /// Create an `IndexOutOfRange` error.
    #[must_use]
    pub fn index_out_of_range(index: usize, length: usize) -> Self {
        Self::IndexOutOfRange { index, length }
    }

    /// Create a `SampleTooLarge` error.
    #[must_use]
    pub fn sample_too_large(requested: usize, available: usize) -> Self {
        Self::SampleTooLarge {
            requested,
            available,
        }
    }
}
