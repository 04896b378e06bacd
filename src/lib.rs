//! spellbloom: a Bloom filter over a packed bit array, and a spell-checking
//! trial built on it.
//!
//! A Bloom filter answers "have I seen this element?" with no false negatives
//! and a tunable false positive rate. Given a capacity and a target rate, the
//! filter sizes its bit array (`m`) and its number of hash functions (`k`)
//! once, then sets and tests `k` bit positions per element.
//!
//! # Quick Start
//!
//! ```
//! use spellbloom::BloomFilter;
//!
//! let mut filter = BloomFilter::new(3, 0.1).unwrap();
//! filter.insert("cat");
//! filter.insert("dog");
//! filter.insert("bird");
//!
//! assert!(filter.contains("cat"));
//! ```
//!
//! # Layout
//!
//! - [`core`]: [`PackedBitArray`](core::PackedBitArray), sizing arithmetic
//!   ([`core::params`]) and the [`MembershipFilter`](core::MembershipFilter)
//!   trait
//! - [`hash`]: base hashers and the [`HashScheme`] position strategies
//! - [`filters`]: [`BloomFilter`]
//! - [`builder`]: type-state [`BloomFilterBuilder`](builder::BloomFilterBuilder)
//! - [`misspell`]: seeded [`Misspeller`](misspell::Misspeller)
//! - [`trial`]: dictionary loading and [`run_trial`](trial::run_trial)
//!
//! # Feature Flags
//!
//! | Feature | Enables                                                    |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` for trial config, report, scheme |
//! | `cli`   | the `spellbloom` binary (default)                          |
//!
//! # Logging
//!
//! The library emits [`tracing`] events (`debug` when a filter is sized,
//! `info` around a trial, `trace` per misspelling attempt) and never installs
//! a subscriber. The binary logs to stderr, filtered by `RUST_LOG`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::bool_assert_comparison)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Bit storage, sizing and the membership trait
pub mod core;

/// Error types and result aliases
pub mod error;

/// Filter implementations
pub mod filters;

/// Hash functions and position strategies
pub mod hash;

/// Type-safe filter builder
pub mod builder;

/// Seeded random misspelling of dictionary words
pub mod misspell;

/// Misspelling-detection trial driver
pub mod trial;

pub use error::{Result, SpellBloomError};
pub use filters::BloomFilter;
pub use hash::HashScheme;

/// Prelude module for convenient imports.
///
/// ```
/// use spellbloom::prelude::*;
///
/// let mut filter = BloomFilterBuilder::new().capacity(10).error_rate(0.1).build().unwrap();
/// MembershipFilter::insert(&mut filter, b"hello");
/// assert!(filter.contains("hello"));
/// ```
pub mod prelude {
    pub use crate::builder::BloomFilterBuilder;
    pub use crate::core::{MembershipFilter, PackedBitArray};
    pub use crate::error::{Result, SpellBloomError};
    pub use crate::filters::BloomFilter;
    pub use crate::hash::HashScheme;
    pub use crate::misspell::{Edit, Misspeller};
    pub use crate::trial::{run_trial, TrialConfig, TrialReport};
}
