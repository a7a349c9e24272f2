//! Equality against candidate sets.
//!
//! ## Purpose
//!
//! Membership-style equality checks: a value against a list of candidates,
//! or against an arbitrary iterable set.
//!
//! ## Invariants
//!
//! * [`equals_all`] is vacuously true for an empty candidate list.
//! * [`equals_any`] and [`in_set`] are false for an empty input.

/// True iff `value` equals any element of `options`.
///
/// Semantic alias of [`crate::conditions::or`]: an OR over equality checks.
#[inline]
pub fn equals_any<T: PartialEq>(value: &T, options: &[T]) -> bool {
    options.contains(value)
}

/// True iff `value` equals every element of `options`.
///
/// An AND over equality checks; vacuously true for an empty list.
#[inline]
pub fn equals_all<T: PartialEq>(value: &T, options: &[T]) -> bool {
    options.iter().all(|option| option == value)
}

/// True iff `set` contains an element equal to `value`.
#[inline]
pub fn in_set<T, I>(value: &T, set: I) -> bool
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    set.into_iter().any(|member| member == *value)
}
