//! Core building blocks: packed bit storage, sizing arithmetic and the
//! membership trait.
//!
//! ```text
//! core/
//! ├── bitset.rs  - PackedBitArray (u64 slots, checked get/set)
//! ├── params.rs  - compute_m / compute_k and derived statistics
//! └── filter.rs  - MembershipFilter trait
//! ```

pub mod bitset;
pub mod filter;
pub mod params;

pub use bitset::PackedBitArray;
pub use filter::MembershipFilter;
pub use params::{compute_k, compute_m, expected_fp_rate, filter_params};
