//! Tests for the block construction pipeline.
//!
//! These tests verify validation, priority resolution, and blending at
//! `build()`:
//! - Strict rejection of nested block payloads
//! - Expected-type enforcement
//! - Explicit vs. aggregated block priorities
//! - Average-only back-propagation into item copies
//!
//! ## Test Organization
//!
//! 1. **Validation** - strict mode, expected types
//! 2. **Priority Resolution** - explicit, aggregated, empty
//! 3. **Blending** - gated propagation, copy semantics
//! 4. **Mutation** - set_priority re-blending

use primap::prelude::*;

fn scenario_items() -> Vec<Item<i32>> {
    vec![
        Item::with_priority("Marry", 30),
        Item::with_priority("John", 10),
        Item::with_priority("Ricky", 40),
        Item::with_priority("Ben", 30),
    ]
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Strict blocks reject nested block payloads and name the item.
#[test]
fn test_strict_rejects_nested_block() {
    let inner = Block::new(vec![Item::with_priority("Lord", 5)]).unwrap();
    let items = vec![Item::with_priority("ok", 1), Item::with_priority(inner, 2)];

    let error = Block::new(items).unwrap_err();
    assert_eq!(error, PrimapError::NestedBlock { index: 1 });
}

/// Deep blocks count as block payloads under strict mode too.
#[test]
fn test_strict_rejects_nested_deep_block() {
    let inner = DeepBlock::new(vec![Item::with_priority("Lord", 5)]).unwrap();
    let error = Block::new(vec![Item::with_priority(inner, 2)]).unwrap_err();
    assert_eq!(error, PrimapError::NestedBlock { index: 0 });
}

/// Permissive blocks keep nested blocks as opaque payloads.
#[test]
fn test_permissive_allows_nested_block() {
    let inner = Block::new(vec![Item::with_priority("Lord", 5)]).unwrap();
    let block = Block::builder()
        .strict(false)
        .build(vec![Item::with_priority(inner, 2)])
        .unwrap();

    assert_eq!(block.len(), 1);
    assert!(block.items()[0].is::<Block<i32>>());
}

/// Expected-type mismatches are reported with both type names.
#[test]
fn test_expected_type_mismatch() {
    let items = vec![
        Item::with_priority(String::from("Ruth"), 1),
        Item::with_priority(7_u8, 2),
    ];

    let error = Block::builder()
        .expect_type::<String>()
        .build(items)
        .unwrap_err();
    assert_eq!(
        error,
        PrimapError::ItemTypeMismatch {
            expected: "alloc::string::String",
            found: "u8",
        }
    );
}

/// Matching payloads pass the expected-type check.
#[test]
fn test_expected_type_match() {
    let items = vec![
        Item::with_priority(String::from("Ruth"), 1),
        Item::with_priority(String::from("Marry"), 2),
    ];

    let block = Block::builder().expect_type::<String>().build(items).unwrap();
    assert_eq!(block.len(), 2);
}

// ============================================================================
// Priority Resolution Tests
// ============================================================================

/// Without an explicit priority the configured mode aggregates.
#[test]
fn test_aggregated_priority() {
    let block = Block::new(scenario_items()).unwrap();
    assert_eq!(block.priority(), 30);
    assert_eq!(block.mode(), Median);

    let block = Block::builder()
        .mode(Min)
        .build(scenario_items())
        .unwrap();
    assert_eq!(block.priority(), 10);

    let block = Block::builder()
        .mode(Max)
        .build(scenario_items())
        .unwrap();
    assert_eq!(block.priority(), 40);
}

/// An explicit priority skips aggregation entirely.
#[test]
fn test_explicit_priority() {
    let block = Block::builder()
        .priority(99)
        .build(scenario_items())
        .unwrap();
    assert_eq!(block.priority(), 99);
}

/// Zero items with no explicit priority cannot aggregate.
#[test]
fn test_empty_without_priority() {
    let error = Block::<i32>::new(vec![]).unwrap_err();
    assert_eq!(error, PrimapError::EmptyBlock);
}

/// Zero items with an explicit priority are fine.
#[test]
fn test_empty_with_priority() {
    let block = Block::builder().priority(0).build(vec![]).unwrap();
    assert_eq!(block.priority(), 0);
    assert!(block.is_empty());
}

// ============================================================================
// Blending Tests
// ============================================================================

/// Median mode copies items but leaves their priorities untouched.
#[test]
fn test_median_does_not_blend() {
    let block = Block::new(scenario_items()).unwrap();
    assert_eq!(block.priorities(), vec![30, 10, 40, 30]);
}

/// Average mode replaces each copy's priority with the midpoint.
#[test]
fn test_average_blends_into_copies() {
    let items = vec![
        Item::with_priority("low", 10.0),
        Item::with_priority("high", 30.0),
    ];

    let block = Block::builder().mode(Average).build(items.clone()).unwrap();
    assert_eq!(block.priority(), 20.0);
    assert_eq!(block.priorities(), vec![15.0, 25.0]);

    // Caller-owned items are never mutated.
    assert_eq!(items[0].priority(), 10.0);
    assert_eq!(items[1].priority(), 30.0);
}

/// Disabling propagation keeps the supplied items as-is.
#[test]
fn test_update_priorities_disabled() {
    let items = vec![
        Item::with_priority("low", 10.0),
        Item::with_priority("high", 30.0),
    ];

    let block = Block::builder()
        .mode(Average)
        .update_priorities(false)
        .build(items)
        .unwrap();
    assert_eq!(block.priority(), 20.0);
    assert_eq!(block.priorities(), vec![10.0, 30.0]);
}

/// Average blending on non-numeric priorities fails the build.
#[test]
fn test_average_blend_non_numeric() {
    let items = vec![Item::with_priority("Ruth", "b")];
    let error = Block::builder()
        .priority("z")
        .mode(Average)
        .build(items)
        .unwrap_err();
    assert_eq!(error, PrimapError::NonNumericAverage);
}

// ============================================================================
// Mutation Tests
// ============================================================================

/// `set_priority` re-runs the blending step over item copies.
#[test]
fn test_set_priority_reblends() {
    let items = vec![
        Item::with_priority("low", 10.0),
        Item::with_priority("high", 30.0),
    ];
    let mut block = Block::builder().mode(Average).build(items).unwrap();
    assert_eq!(block.priorities(), vec![15.0, 25.0]);

    block.set_priority(5.0).unwrap();
    assert_eq!(block.priority(), 5.0);
    assert_eq!(block.priorities(), vec![10.0, 15.0]);
}

/// `set_priority` outside average mode only replaces the block priority.
#[test]
fn test_set_priority_median_mode() {
    let mut block = Block::new(scenario_items()).unwrap();
    block.set_priority(7).unwrap();

    assert_eq!(block.priority(), 7);
    assert_eq!(block.priorities(), vec![30, 10, 40, 30]);
}
