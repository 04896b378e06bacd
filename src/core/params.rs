//! Filter sizing from capacity and target false positive rate.
//!
//! # Mathematical Background
//!
//! Given:
//! - `n`: capacity, the expected number of distinct elements
//! - `ε`: target false positive rate
//!
//! Parameters:
//! - `m = ⌈-n × ln(ε) / (ln 2)²⌉` (bits in filter)
//! - `k = ⌈(m/n) × ln 2⌉` (number of hash functions)
//!
//! Both are rounded **up**: an undersized array or too few hash functions
//! would miss the target rate.
//!
//! Expected false positive rate after `n` insertions:
//! - `p = (1 - e^(-kn/m))^k`
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/Time Trade-offs in Hash Coding with Allowable Errors"

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::error::{Result, SpellBloomError};
use std::f64::consts::LN_2;

/// (ln 2)² ≈ 0.4804530139182014
const LN2_SQUARED: f64 = LN_2 * LN_2;

/// Largest bit count [`compute_m`] will return.
pub const MAX_BITS: usize = usize::MAX / 2;

/// Check that `capacity` and `error_rate` describe a usable filter.
///
/// # Errors
///
/// [`SpellBloomError::InvalidParameters`] if `capacity == 0` or `error_rate`
/// is not strictly between 0 and 1 (NaN is rejected too).
pub fn validate(capacity: usize, error_rate: f64) -> Result<()> {
    if capacity == 0 {
        return Err(SpellBloomError::invalid_parameters(
            "capacity must be greater than 0",
        ));
    }

    if !(0.0 < error_rate && error_rate < 1.0) {
        return Err(SpellBloomError::invalid_parameters(format!(
            "error rate {} is out of bounds, must be in (0, 1)",
            error_rate
        )));
    }

    Ok(())
}

/// Number of bits `m` for a filter holding `capacity` elements at `error_rate`.
///
/// Implements `m = ⌈-(capacity × ln(error_rate)) / (ln 2)²⌉`. The result is
/// always at least 1.
///
/// # Errors
///
/// - [`SpellBloomError::InvalidParameters`] for an invalid capacity or rate
///   (see [`validate`])
/// - [`SpellBloomError::InvalidParameters`] if `m` exceeds [`MAX_BITS`]
///
/// # Examples
///
/// ```
/// use spellbloom::core::params::compute_m;
///
/// assert_eq!(compute_m(100, 0.1).unwrap(), 480);
/// assert_eq!(compute_m(1000, 0.01).unwrap(), 9586);
/// assert!(compute_m(0, 0.1).is_err());
/// ```
pub fn compute_m(capacity: usize, error_rate: f64) -> Result<usize> {
    validate(capacity, error_rate)?;

    let m = (-(capacity as f64 * error_rate.ln()) / LN2_SQUARED).ceil();

    if !m.is_finite() || m >= usize::MAX as f64 {
        return Err(SpellBloomError::invalid_parameters(format!(
            "calculated filter size {:.0} exceeds system limits",
            m
        )));
    }

    let m = (m as usize).max(1);
    if m > MAX_BITS {
        return Err(SpellBloomError::invalid_parameters(format!(
            "calculated filter size {} exceeds reasonable bounds, \
             raise the error rate or lower the capacity",
            m
        )));
    }

    Ok(m)
}

/// Number of hash functions `k` for `m` bits and `capacity` elements.
///
/// Implements `k = ⌈(m / capacity) × ln 2⌉`, which is at least 1 whenever
/// `m ≥ 1`.
///
/// # Errors
///
/// - [`SpellBloomError::InvalidParameters`] if `capacity == 0`
/// - [`SpellBloomError::InvalidSize`] if `m == 0`
///
/// # Examples
///
/// ```
/// use spellbloom::core::params::compute_k;
///
/// assert_eq!(compute_k(100, 480).unwrap(), 4);
/// assert_eq!(compute_k(1000, 9586).unwrap(), 7);
/// ```
pub fn compute_k(capacity: usize, m: usize) -> Result<usize> {
    if capacity == 0 {
        return Err(SpellBloomError::invalid_parameters(
            "capacity must be greater than 0",
        ));
    }

    if m == 0 {
        return Err(SpellBloomError::invalid_size(m));
    }

    let k = (m as f64 / capacity as f64 * LN_2).ceil();
    Ok((k as usize).max(1))
}

/// Compute `(m, k)` in one call.
///
/// # Errors
///
/// See [`compute_m`] and [`compute_k`].
///
/// # Examples
///
/// ```
/// use spellbloom::core::params::filter_params;
///
/// assert_eq!(filter_params(3, 0.1).unwrap(), (15, 4));
/// ```
pub fn filter_params(capacity: usize, error_rate: f64) -> Result<(usize, usize)> {
    let m = compute_m(capacity, error_rate)?;
    let k = compute_k(capacity, m)?;
    Ok((m, k))
}

/// Theoretical false positive rate after `n` distinct insertions.
///
/// Implements `p = (1 - e^(-kn/m))^k`, clamped to `[0, 1]`.
///
/// # Errors
///
/// - [`SpellBloomError::InvalidSize`] if `m == 0`
/// - [`SpellBloomError::InvalidParameters`] if `k == 0`
///
/// # Examples
///
/// ```
/// use spellbloom::core::params::expected_fp_rate;
///
/// let p = expected_fp_rate(9586, 1000, 7).unwrap();
/// assert!((p - 0.01).abs() < 0.001);
/// ```
pub fn expected_fp_rate(m: usize, n: usize, k: usize) -> Result<f64> {
    if m == 0 {
        return Err(SpellBloomError::invalid_size(m));
    }

    if k == 0 {
        return Err(SpellBloomError::invalid_parameters(
            "hash function count must be at least 1",
        ));
    }

    if n == 0 {
        return Ok(0.0);
    }

    let k_f64 = k as f64;
    let prob_bit_one = 1.0 - (-(k_f64 * n as f64) / m as f64).exp();
    Ok(prob_bit_one.powf(k_f64).clamp(0.0, 1.0))
}

/// Bits needed per element for `error_rate`: `-ln(ε) / (ln 2)²`.
///
/// # Errors
///
/// [`SpellBloomError::InvalidParameters`] if `error_rate` is not in `(0, 1)`.
pub fn bits_per_element(error_rate: f64) -> Result<f64> {
    validate(1, error_rate)?;
    Ok(-error_rate.ln() / LN2_SQUARED)
}
