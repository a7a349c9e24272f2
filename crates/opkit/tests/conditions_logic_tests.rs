//! Tests for disjunction, conjunction, and negation.
//!
//! These tests verify the boolean combinators for:
//! - Value-equality disjunction over candidate lists
//! - Boolean disjunction and its empty-input convention
//! - Predicate conjunction, evaluation order, and vacuous truth
//!
//! ## Test Organization
//!
//! 1. **Or** - Value and boolean forms
//! 2. **And** - Conjunction, order, vacuous truth
//! 3. **Not** - Negation

use std::cell::RefCell;

use opkit::conditions::{and, any_true, not, or};

// ============================================================================
// Or Tests
// ============================================================================

/// Test the value-equality form of or.
#[test]
fn test_or_value_equality() {
    assert!(or(&2, &[1, 2, 3]));
    assert!(!or(&9, &[1, 2, 3]));
}

/// Test that or over an empty candidate list is false.
#[test]
fn test_or_empty_candidates() {
    assert!(!or(&1, &[]));
}

/// Test or with non-numeric element types.
#[test]
fn test_or_string_candidates() {
    assert!(or(&"b", &["a", "b"]));
    assert!(!or(&"z", &["a", "b"]));
}

/// Test the boolean form of or.
#[test]
fn test_any_true() {
    assert!(any_true([false, true, false]));
    assert!(!any_true([false, false]));
}

/// Test that any_true over an empty input is false.
#[test]
fn test_any_true_empty() {
    assert!(!any_true([]));
}

// ============================================================================
// And Tests
// ============================================================================

/// Test conjunction over non-capturing predicates.
#[test]
fn test_and_all_true() {
    let conditions: [fn() -> bool; 3] = [|| true, || true, || true];
    assert!(and(conditions));
}

/// Test that one false predicate makes the conjunction false.
#[test]
fn test_and_one_false() {
    let conditions: [fn() -> bool; 3] = [|| true, || false, || true];
    assert!(!and(conditions));
}

/// Test that an empty predicate list is vacuously true.
#[test]
fn test_and_empty_is_vacuously_true() {
    assert!(and(Vec::<fn() -> bool>::new()));
}

/// Test that predicates are invoked left-to-right.
///
/// Evaluation stops at the first false, so the third predicate never runs.
#[test]
fn test_and_evaluates_left_to_right() {
    let order = RefCell::new(Vec::new());

    let conditions: Vec<Box<dyn Fn() -> bool>> = vec![
        Box::new(|| {
            order.borrow_mut().push(1);
            true
        }),
        Box::new(|| {
            order.borrow_mut().push(2);
            false
        }),
        Box::new(|| {
            order.borrow_mut().push(3);
            true
        }),
    ];

    assert!(!and(conditions));
    assert_eq!(*order.borrow(), vec![1, 2]);
}

// ============================================================================
// Not Tests
// ============================================================================

/// Test boolean negation.
#[test]
fn test_not() {
    assert!(not(false));
    assert!(!not(true));
    assert!(not(not(not(false))));
}
