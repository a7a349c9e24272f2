//! Fallbacks for absent values and lazy initialization.
//!
//! ## Purpose
//!
//! Helpers for picking a value when some candidates may be absent, and for
//! filling a caller-owned cell on first access.
//!
//! ## Design notes
//!
//! * **Caller-owned storage**: [`lazy_load`] memoizes into a cell the caller
//!   supplies. The crate itself keeps no state, so the memoization survives
//!   exactly as long as the caller keeps the cell alive.
//!
//! ## Invariants
//!
//! * [`coalesce`] inspects candidates in order and stops at the first
//!   present one.
//! * [`lazy_load`] invokes its initializer at most once per cell lifetime.

/// Return `variable` unless it is absent, in which case `default_value`.
#[inline]
pub fn default_if_none<T>(variable: Option<T>, default_value: T) -> T {
    variable.unwrap_or(default_value)
}

/// Return the first present element of `values`.
///
/// `None` when every element is absent or the input is empty.
#[inline]
pub fn coalesce<T, I>(values: I) -> Option<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    values.into_iter().flatten().next()
}

/// Fill `slot` on first access and return a reference to the stored value.
///
/// If `slot` is empty, `initializer` runs once and its result is stored;
/// afterwards the stored value is returned without re-invoking the
/// initializer. The cell belongs to the caller, so the memoization lives
/// exactly as long as the cell does.
#[inline]
pub fn lazy_load<T, F>(slot: &mut Option<T>, initializer: F) -> &T
where
    F: FnOnce() -> T,
{
    slot.get_or_insert_with(initializer)
}
