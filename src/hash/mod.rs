//! Hashing and bit-position derivation.
//!
//! # Module Structure
//!
//! ```text
//! hash/
//! ├── hasher.rs      - BloomHasher trait and XxHasher (XXH3-64)
//! ├── strategies.rs  - PositionStrategy: DoubleHashing, RepeatedDigest
//! └── mod.rs         - HashScheme selector
//! ```
//!
//! # Choosing a Scheme
//!
//! | Scheme                             | Base hash | Cost per element | Independence |
//! |------------------------------------|-----------|------------------|--------------|
//! | [`HashScheme::DoubleHashing`]      | XXH3-64   | 2 hashes         | Good         |
//! | [`HashScheme::RepeatedDigest`]     | SHA-256   | k digests        | Weaker       |
//!
//! Double hashing is the default. Repeated digest is kept for comparison and
//! for filters that must match positions produced by salting-by-repetition.
//!
//! # Examples
//!
//! ```
//! use spellbloom::hash::HashScheme;
//!
//! let scheme = HashScheme::default();
//! let positions = scheme.positions(0, b"test", 7, 1000);
//! assert_eq!(positions.len(), 7);
//! assert_eq!(positions[5], scheme.position(0, b"test", 5, 1000));
//! ```

pub mod hasher;
pub mod strategies;

pub use hasher::{BloomHasher, XxHasher};
pub use strategies::{DoubleHashing, PositionStrategy, RepeatedDigest};

use crate::error::SpellBloomError;
use std::fmt;
use std::str::FromStr;

/// Runtime selection of the position derivation scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HashScheme {
    /// `gⱼ(x) = (h₁(x) + j·s(x)) mod m` over seeded XXH3, `s` in `[1, m)`.
    #[default]
    DoubleHashing,
    /// `gⱼ(x) = SHA-256(x repeated j + 1 times) mod m`.
    RepeatedDigest,
}

impl HashScheme {
    /// Every available scheme.
    pub const ALL: [HashScheme; 2] = [HashScheme::DoubleHashing, HashScheme::RepeatedDigest];

    /// Human-readable name of this scheme.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DoubleHashing => "double-hashing",
            Self::RepeatedDigest => "repeated-digest",
        }
    }

    /// Position of hash function `index` for `element` in an `m`-bit array.
    ///
    /// `seed` perturbs the double-hashing base hashes; the repeated digest
    /// scheme has no seed and ignores it.
    #[must_use]
    pub fn position(&self, seed: u64, element: &[u8], index: usize, m: usize) -> usize {
        match self {
            Self::DoubleHashing => {
                DoubleHashing::new(XxHasher::with_seed(seed)).position(element, index, m)
            }
            Self::RepeatedDigest => RepeatedDigest.position(element, index, m),
        }
    }

    /// Positions of hash functions `0..k`, in order.
    #[must_use]
    pub fn positions(&self, seed: u64, element: &[u8], k: usize, m: usize) -> Vec<usize> {
        match self {
            Self::DoubleHashing => {
                DoubleHashing::new(XxHasher::with_seed(seed)).positions(element, k, m)
            }
            Self::RepeatedDigest => RepeatedDigest.positions(element, k, m),
        }
    }
}

impl fmt::Display for HashScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashScheme {
    type Err = SpellBloomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "double" | "double-hashing" => Ok(Self::DoubleHashing),
            "repeated" | "repeated-digest" | "sha256" => Ok(Self::RepeatedDigest),
            other => Err(SpellBloomError::invalid_parameters(format!(
                "unknown hash scheme '{}'",
                other
            ))),
        }
    }
}
