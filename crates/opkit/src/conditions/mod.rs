//! Boolean-logic combinators over values, predicates, and ranges.
//!
//! # Purpose
//!
//! This module expresses common boolean checks as named functions: equality
//! against a set of candidates, range membership, negation, and the three
//! quantifiers over a sequence.
//!
//! # Design notes
//!
//! * **Left-to-right**: predicate lists are evaluated in order.
//! * **Vacuous conventions**: universal checks over an empty input are true,
//!   existential checks are false. Each function documents its own case.
//! * **Capability bounds**: equality helpers require `PartialEq`, range
//!   helpers require `PartialOrd`; no trait objects, no inheritance.

/// Disjunction, conjunction, and negation.
mod logic;

/// Equality against candidate sets.
mod equality;

/// Range membership.
mod range;

/// Quantifiers over sequences.
mod quantifiers;

pub use equality::{equals_all, equals_any, in_set};
pub use logic::{and, any_true, not, or};
pub use quantifiers::{all_match, any_match, none_match};
pub use range::{Bounds, between, in_range};
