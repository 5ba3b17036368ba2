//! Tests for stable priority sorting.
//!
//! These tests verify the sorting layer every derived view is built on:
//! - Ascending stable order with insertion-order ties
//! - Permutation and idempotence properties
//! - Payload extraction order
//!
//! ## Test Organization
//!
//! 1. **Ordering** - ascending output, tie stability
//! 2. **Properties** - permutation, double-sort idempotence
//! 3. **Extraction** - payloads and priorities in input order

use primap::prelude::*;
use primap::rank::sorting::{compare_priorities, extract_objects, resolve_priorities,
    sort_items_by_priority};

use std::cmp::Ordering;

/// Items in the insertion order of the reference scenario.
fn scenario_items() -> Vec<Item<i32>> {
    vec![
        Item::with_priority("Marry", 30),
        Item::with_priority("John", 10),
        Item::with_priority("Ricky", 40),
        Item::with_priority("Ben", 30),
    ]
}

fn names<P: PriorityValue>(items: &[Item<P>]) -> Vec<&'static str> {
    items
        .iter()
        .map(|item| *item.downcast_ref::<&str>().unwrap())
        .collect()
}

// ============================================================================
// Ordering Tests
// ============================================================================

/// Sorting is ascending with ties in insertion order.
#[test]
fn test_sort_ascending_stable() {
    let sorted = sort_items_by_priority(&scenario_items());

    assert_eq!(names(&sorted), vec!["John", "Marry", "Ben", "Ricky"]);
    assert_eq!(resolve_priorities(&sorted), vec![10, 30, 30, 40]);
}

/// String priorities sort lexicographically.
#[test]
fn test_sort_string_priorities() {
    let items = vec![
        Item::with_priority("Ruth", "b"),
        Item::with_priority("Marry", "a"),
        Item::with_priority("John", "c"),
    ];

    let sorted = sort_items_by_priority(&items);
    assert_eq!(names(&sorted), vec!["Marry", "Ruth", "John"]);
}

/// Incomparable priorities compare as equal and keep insertion order.
#[test]
fn test_incomparable_priorities_keep_order() {
    assert_eq!(compare_priorities(&f64::NAN, &1.0), Ordering::Equal);

    let items = vec![
        Item::with_priority("first", f64::NAN),
        Item::with_priority("second", f64::NAN),
    ];
    let sorted = sort_items_by_priority(&items);
    assert_eq!(names(&sorted), vec!["first", "second"]);
}

// ============================================================================
// Property Tests
// ============================================================================

/// The sorted output is a permutation of the input.
#[test]
fn test_sort_is_permutation() {
    let items = scenario_items();
    let sorted = sort_items_by_priority(&items);

    assert_eq!(sorted.len(), items.len());
    let mut sorted_names = names(&sorted);
    let mut input_names = names(&items);
    sorted_names.sort_unstable();
    input_names.sort_unstable();
    assert_eq!(sorted_names, input_names);
}

/// Sorting an already sorted sequence is a no-op permutation.
#[test]
fn test_double_sort_idempotent() {
    let once = sort_items_by_priority(&scenario_items());
    let twice = sort_items_by_priority(&once);
    assert_eq!(names(&once), names(&twice));
}

// ============================================================================
// Extraction Tests
// ============================================================================

/// Payload extraction preserves input order.
#[test]
fn test_extract_objects_in_order() {
    let items = scenario_items();
    let objects = extract_objects(&items);

    let extracted: Vec<&str> = objects
        .iter()
        .map(|object| *object.downcast_ref::<&str>().unwrap())
        .collect();
    assert_eq!(extracted, vec!["Marry", "John", "Ricky", "Ben"]);
}

/// Priority resolution is parallel to the input items.
#[test]
fn test_resolve_priorities_parallel() {
    assert_eq!(resolve_priorities(&scenario_items()), vec![30, 10, 40, 30]);
}
