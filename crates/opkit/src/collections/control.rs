//! Repeated and conditional execution.
//!
//! This module provides small imperative loops as functions, for call sites
//! that take actions as values.

// Invoke `action` exactly `max(times, 0)` times, in order.
//
// The count is signed so a negative count is representable: it performs zero
// invocations and never panics.
#[inline]
pub fn repeat<F>(times: i64, mut action: F)
where
    F: FnMut(),
{
    for _ in 0..times {
        action();
    }
}

// Invoke `action` while `condition` evaluates true.
//
// `condition` is re-evaluated before every invocation and the loop stops as
// soon as it returns false. A condition that never becomes false loops
// forever; termination is the caller's responsibility.
#[inline]
pub fn while_true<C, F>(mut condition: C, mut action: F)
where
    C: FnMut() -> bool,
    F: FnMut(),
{
    while condition() {
        action();
    }
}
