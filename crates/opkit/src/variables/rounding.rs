//! Increment rounding.
//!
//! This module rounds values to the nearest multiple of an arbitrary
//! increment, for quantities like prices, angles, or tick sizes.

// External dependencies
use num_traits::Float;

/// Round `value` to the nearest multiple of `increment`.
///
/// Computes `round(value / increment) * increment`, where `round` ties away
/// from zero ([`Float::round`]). A zero increment divides by zero and yields
/// a NaN/infinity-class result per IEEE 754 semantics; it is deliberately
/// not special-cased.
#[inline]
pub fn round_to_nearest<T: Float>(value: T, increment: T) -> T {
    (value / increment).round() * increment
}
