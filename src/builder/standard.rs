//! Builder for [`BloomFilter`].
//!
//! # Type-State Pattern
//!
//! The builder carries its parameters in its state type, so `build` is only
//! reachable once both required values have been given:
//!
//! ```text
//! Initial → WithCapacity → Complete → BloomFilter
//!     ↓            ↓              ↓
//!  .capacity()  .error_rate()  .build()
//! ```
//!
//! # Examples
//!
//! ## Minimal Configuration
//!
//! ```
//! use spellbloom::builder::BloomFilterBuilder;
//!
//! let filter = BloomFilterBuilder::new()
//!     .capacity(100)
//!     .error_rate(0.1)
//!     .build()
//!     .unwrap();
//! assert_eq!(filter.num_bits(), 480);
//! ```
//!
//! ## Full Configuration
//!
//! ```
//! use spellbloom::builder::BloomFilterBuilder;
//! use spellbloom::hash::HashScheme;
//!
//! let filter = BloomFilterBuilder::new()
//!     .capacity(10_000)
//!     .error_rate(0.01)
//!     .scheme(HashScheme::RepeatedDigest)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//! assert_eq!(filter.scheme(), HashScheme::RepeatedDigest);
//! ```
//!
//! ## Error Handling
//!
//! ```
//! use spellbloom::builder::BloomFilterBuilder;
//!
//! let result = BloomFilterBuilder::new()
//!     .capacity(0)
//!     .error_rate(0.01)
//!     .build();
//! assert!(result.is_err());
//! ```

#![allow(clippy::cast_precision_loss)]

use crate::core::params;
use crate::error::Result;
use crate::filters::standard::BloomFilter;
use crate::hash::HashScheme;

/// No parameters set yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Initial;

/// Capacity set; error rate still missing.
#[derive(Debug, Clone, Copy)]
pub struct WithCapacity {
    capacity: usize,
}

/// Every required parameter set.
#[derive(Debug, Clone, Copy)]
pub struct Complete {
    capacity: usize,
    error_rate: f64,
}

/// Fluent builder for [`BloomFilter`].
#[derive(Debug, Clone, Copy)]
pub struct BloomFilterBuilder<State = Initial> {
    state: State,
    scheme: HashScheme,
    seed: u64,
}

impl BloomFilterBuilder<Initial> {
    /// Start a builder with the default scheme and seed `0`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Initial,
            scheme: HashScheme::default(),
            seed: 0,
        }
    }

    /// Expected number of distinct elements.
    #[must_use]
    pub fn capacity(self, capacity: usize) -> BloomFilterBuilder<WithCapacity> {
        BloomFilterBuilder {
            state: WithCapacity { capacity },
            scheme: self.scheme,
            seed: self.seed,
        }
    }
}

impl Default for BloomFilterBuilder<Initial> {
    fn default() -> Self {
        Self::new()
    }
}

impl BloomFilterBuilder<WithCapacity> {
    /// Target false positive rate at capacity.
    #[must_use]
    pub fn error_rate(self, error_rate: f64) -> BloomFilterBuilder<Complete> {
        BloomFilterBuilder {
            state: Complete {
                capacity: self.state.capacity,
                error_rate,
            },
            scheme: self.scheme,
            seed: self.seed,
        }
    }
}

impl<State> BloomFilterBuilder<State> {
    /// Position derivation scheme.
    #[must_use]
    pub fn scheme(mut self, scheme: HashScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Seed for the double-hashing base hashes.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl BloomFilterBuilder<Complete> {
    /// Validate the parameters and build the filter.
    ///
    /// # Errors
    ///
    /// [`SpellBloomError::InvalidParameters`](crate::SpellBloomError::InvalidParameters)
    /// if the capacity is zero or the error rate is outside `(0, 1)`.
    pub fn build(self) -> Result<BloomFilter> {
        let Complete {
            capacity,
            error_rate,
        } = self.state;
        BloomFilter::with_scheme_and_seed(capacity, error_rate, self.scheme, self.seed)
    }

    /// Build the filter and report its sizing.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn build_with_metadata(self) -> Result<(BloomFilter, FilterMetadata)> {
        let filter = self.build()?;
        let metadata = FilterMetadata {
            capacity: filter.capacity(),
            error_rate: filter.error_rate(),
            num_bits: filter.num_bits(),
            hash_count: filter.hash_count(),
            scheme: filter.scheme(),
            bits_per_element: filter.num_bits() as f64 / filter.capacity() as f64,
            theoretical_fp_rate: filter.theoretical_fp_rate(filter.capacity()),
        };
        Ok((filter, metadata))
    }

    /// Compute the sizing without allocating a filter.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn dry_run(&self) -> Result<(usize, usize)> {
        params::filter_params(self.state.capacity, self.state.error_rate)
    }
}

/// Sizing summary produced by [`BloomFilterBuilder::build_with_metadata`].
#[derive(Debug, Clone, PartialEq)]
pub struct FilterMetadata {
    /// Expected number of distinct elements.
    pub capacity: usize,
    /// Target false positive rate.
    pub error_rate: f64,
    /// Bits in the filter (m).
    pub num_bits: usize,
    /// Position functions per element (k).
    pub hash_count: usize,
    /// Position derivation scheme.
    pub scheme: HashScheme,
    /// `m / capacity`.
    pub bits_per_element: f64,
    /// Expected false positive rate once `capacity` elements are inserted.
    pub theoretical_fp_rate: f64,
}

impl FilterMetadata {
    /// Bytes of bit storage, rounded up to whole 64-bit slots.
    #[must_use]
    pub fn memory_bytes(&self) -> usize {
        self.num_bits.div_ceil(64) * 8
    }
}
