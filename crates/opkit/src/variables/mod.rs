//! Single-variable manipulation helpers.
//!
//! # Purpose
//!
//! Helpers for one value at a time: in-place exchange, fallbacks for absent
//! values, extrema and clamping, and increment rounding.
//!
//! # Design notes
//!
//! * **Explicit mutation**: only [`swap`], [`toggle`], and [`lazy_load`]
//!   mutate anything, and only through their own `&mut` parameters. There is
//!   no shared or global cell anywhere in the crate.
//! * **Absence is `Option`**: the fallback helpers model "no value" with
//!   `Option<T>` rather than a sentinel or a `Default` bound.

/// In-place exchange and flipping.
mod exchange;

/// Fallbacks for absent values and lazy initialization.
mod fallback;

/// Extrema and clamping.
mod extrema;

/// Increment rounding.
mod rounding;

pub use exchange::{swap, toggle};
pub use extrema::{clamp, min_max};
pub use fallback::{coalesce, default_if_none, lazy_load};
pub use rounding::round_to_nearest;
