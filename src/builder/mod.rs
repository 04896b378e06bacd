//! Builder pattern for filter construction.
//!
//! Builders use the type-state pattern: a missing required parameter is a
//! compile-time error, an out-of-range value is a runtime error from `build`.
//!
//! ```compile_fail
//! use spellbloom::builder::BloomFilterBuilder;
//!
//! // error rate never given: `build` does not exist in this state
//! let filter = BloomFilterBuilder::new().capacity(100).build();
//! ```

#![allow(clippy::module_name_repetitions)]

pub mod standard;

pub use standard::{BloomFilterBuilder, FilterMetadata};
