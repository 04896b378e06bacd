//! Bloom filter implementations.
//!
//! - [`BloomFilter`]: fixed-capacity filter over byte-sequence elements, with
//!   a selectable [`HashScheme`](crate::hash::HashScheme).
//!
//! # Examples
//!
//! ```
//! use spellbloom::filters::BloomFilter;
//! use spellbloom::hash::HashScheme;
//!
//! let mut filter = BloomFilter::with_scheme(1000, 0.01, HashScheme::RepeatedDigest).unwrap();
//! filter.insert("hello");
//! assert!(filter.contains("hello"));
//! ```

pub mod standard;

pub use standard::BloomFilter;
