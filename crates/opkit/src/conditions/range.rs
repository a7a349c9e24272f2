//! Range membership.
//!
//! ## Purpose
//!
//! Checks whether a value lies between two bounds, with the bound treatment
//! selected by a small option enum.
//!
//! ## Design notes
//!
//! * **No bound swapping**: when `lower > upper` the range is empty and the
//!   check is false for every value. The comparisons fall out that way
//!   naturally; there is no explicit inversion handling.
//! * **Partial orders**: the bound is `PartialOrd`, so incomparable values
//!   (a NaN anywhere) make the check false.

// Bound treatment for range membership checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bounds {
    // Endpoints count as inside: `lower <= value <= upper`.
    #[default]
    Inclusive,

    // Endpoints count as outside: `lower < value < upper`.
    Exclusive,
}

/// True iff `value` lies between `lower` and `upper`.
///
/// With [`Bounds::Inclusive`] the endpoints are inside the range; with
/// [`Bounds::Exclusive`] they are outside. An inverted range
/// (`lower > upper`) is empty: the result is false for every value.
#[inline]
pub fn between<T: PartialOrd>(value: T, lower: T, upper: T, bounds: Bounds) -> bool {
    match bounds {
        Bounds::Inclusive => value >= lower && value <= upper,
        Bounds::Exclusive => value > lower && value < upper,
    }
}

/// True iff `value` falls within the range `[lower, upper]`.
///
/// Semantic alias of [`between`], identical contract.
#[inline]
pub fn in_range<T: PartialOrd>(value: T, lower: T, upper: T, bounds: Bounds) -> bool {
    between(value, lower, upper, bounds)
}
