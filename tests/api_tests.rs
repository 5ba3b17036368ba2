//! Tests for the high-level functional API.
//!
//! These tests exercise the free functions end to end: constructors, the
//! bulk conversions, and the bulk queries, including the `flatten` flag
//! and the empty-input behavior of the transient block.
//!
//! ## Test Organization
//!
//! 1. **Constructors** - items, blocks, deep blocks, mappings
//! 2. **Bulk Conversions** - queue, pairs, maps, objects, sorting
//! 3. **Bulk Queries** - priority, range, type, top/bottom-k
//! 4. **Empty Inputs** - bulk functions succeed on nothing

use std::any::Any;
use std::rc::Rc;

use primap::prelude::*;

fn scenario_items() -> Vec<Item<i32>> {
    vec![
        create_item("Marry", 30),
        create_item("John", 10),
        create_item("Ricky", 40),
        create_item("Ben", 30),
    ]
}

fn names(items: &[Item<i32>]) -> Vec<&'static str> {
    items
        .iter()
        .map(|item| *item.downcast_ref::<&str>().unwrap())
        .collect()
}

fn name(object: &Rc<dyn Any>) -> &'static str {
    *object.downcast_ref::<&str>().unwrap()
}

// ============================================================================
// Constructor Tests
// ============================================================================

/// `create_item` is the item constructor with an explicit priority.
#[test]
fn test_create_item() {
    let item = create_item("John", 10);
    assert_eq!(item.priority(), 10);
    assert_eq!(*item.downcast_ref::<&str>().unwrap(), "John");
}

/// `create_block` builds a strict block; `create_deep_block` flattens.
#[test]
fn test_create_block_and_deep_block() {
    let block = create_block(scenario_items()).unwrap();
    assert_eq!(block.priority(), 30);

    let nested = create_block(vec![create_item("inner", 5)]).unwrap();
    assert!(create_block(vec![create_item(nested.clone(), 5)]).is_err());

    let deep = create_deep_block(vec![create_item(nested, 5)]).unwrap();
    assert_eq!(names(deep.items()), vec!["inner"]);
}

/// `create_mapping` selects between the two paths on `flatten`.
#[test]
fn test_create_mapping() {
    let nested = create_block(vec![create_item("inner", 5)]).unwrap();

    let flat = create_mapping(vec![create_item(nested.clone(), 5)], true).unwrap();
    assert_eq!(names(flat.items()), vec!["inner"]);

    assert!(create_mapping(vec![create_item(nested, 5)], false).is_err());
}

// ============================================================================
// Bulk Conversion Tests
// ============================================================================

/// Queue conversion drains ascending with stable ties.
#[test]
fn test_items_to_queue() {
    let mut queue = items_to_queue(scenario_items(), false).unwrap();

    let mut drained = Vec::new();
    while let Some((priority, object)) = queue.pop() {
        drained.push((priority, name(&object)));
    }
    assert_eq!(
        drained,
        vec![(10, "John"), (30, "Marry"), (30, "Ben"), (40, "Ricky")]
    );
}

/// Pair conversion, with nested blocks flattened first.
#[test]
fn test_items_to_pairs_flattened() {
    let nested = create_block(vec![create_item("Ben", 30)]).unwrap();
    let items = vec![
        create_item("John", 10),
        create_item(nested, 30),
        create_item("Ricky", 40),
    ];

    let pairs = items_to_pairs(items, true).unwrap();
    let flat: Vec<(i32, &str)> = pairs
        .iter()
        .map(|(priority, object)| (*priority, name(object)))
        .collect();
    assert_eq!(flat, vec![(10, "John"), (30, "Ben"), (40, "Ricky")]);
}

/// Map conversions mirror the block exports.
#[test]
fn test_items_to_maps() {
    let map = items_to_map(scenario_items(), false).unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(name(&map[&30]), "Ben");

    let multi = items_to_multi_map(scenario_items(), false).unwrap();
    let tied: Vec<&str> = multi[&30].iter().map(name).collect();
    assert_eq!(tied, vec!["Marry", "Ben"]);
}

/// Standalone flattening leaves leaf items untouched, in order.
#[test]
fn test_flatten_items() {
    let nested = create_block(vec![create_item("B", 2), create_item("C", 3)]).unwrap();
    let items = vec![
        create_item("A", 1),
        create_item(nested, 2),
        create_item("D", 4),
    ];

    assert_eq!(names(&flatten_items(&items)), vec!["A", "B", "C", "D"]);
    assert_eq!(names(&flatten_items(&scenario_items())).len(), 4);
}

/// Object extraction preserves input order.
#[test]
fn test_extract_objects() {
    let objects = extract_objects(scenario_items(), false).unwrap();
    let extracted: Vec<&str> = objects.iter().map(name).collect();
    assert_eq!(extracted, vec!["Marry", "John", "Ricky", "Ben"]);
}

/// Bulk sorting matches the block's sorted view.
#[test]
fn test_sort_by_priority() {
    let sorted = sort_by_priority(scenario_items(), false).unwrap();
    assert_eq!(names(&sorted), vec!["John", "Marry", "Ben", "Ricky"]);
}

// ============================================================================
// Bulk Query Tests
// ============================================================================

/// Priority-set lookups, plural and singular.
#[test]
fn test_find_by_priorities() {
    let matched = find_items_by_priorities(scenario_items(), &[30], false).unwrap();
    assert_eq!(names(&matched), vec!["Marry", "Ben"]);

    let first = find_item_by_priorities(scenario_items(), &[40, 10], false)
        .unwrap()
        .unwrap();
    assert_eq!(*first.downcast_ref::<&str>().unwrap(), "John");

    let none = find_item_by_priorities(scenario_items(), &[99], false).unwrap();
    assert!(none.is_none());
}

/// Range lookups, including the inverted-range error.
#[test]
fn test_find_by_priority_range() {
    let matched =
        find_items_by_priority_range(scenario_items(), Some(&10), Some(&30), false).unwrap();
    assert_eq!(names(&matched), vec!["Marry", "John", "Ben"]);

    let first = find_item_by_priority_range(scenario_items(), Some(&31), None, false)
        .unwrap()
        .unwrap();
    assert_eq!(*first.downcast_ref::<&str>().unwrap(), "Ricky");

    let error =
        find_items_by_priority_range(scenario_items(), Some(&40), Some(&10), false).unwrap_err();
    assert!(matches!(error, PrimapError::InvalidPriorityRange { .. }));
}

/// Type lookups over mixed payloads.
#[test]
fn test_find_by_type() {
    let items = vec![
        create_item("name", 1),
        create_item(42_i32, 2),
        create_item(String::from("owned"), 3),
    ];

    let strings = find_items_by_type::<String, i32>(items.clone(), false).unwrap();
    assert_eq!(strings.len(), 1);

    let number = find_item_by_type::<i32, i32>(items.clone(), false)
        .unwrap()
        .unwrap();
    assert_eq!(*number.downcast_ref::<i32>().unwrap(), 42);

    let none = find_item_by_type::<u8, i32>(items, false).unwrap();
    assert!(none.is_none());
}

/// Top/bottom-k lookups, plural and singular.
#[test]
fn test_find_first_and_last() {
    let lowest = find_first_items(scenario_items(), 2, false).unwrap();
    assert_eq!(names(&lowest), vec!["John", "Marry"]);

    let first = find_first_item(scenario_items(), false).unwrap().unwrap();
    assert_eq!(*first.downcast_ref::<&str>().unwrap(), "John");

    let highest = find_last_items(scenario_items(), 2, false).unwrap();
    assert_eq!(names(&highest), vec!["Ben", "Ricky"]);

    let last = find_last_item(scenario_items(), false).unwrap().unwrap();
    assert_eq!(*last.downcast_ref::<&str>().unwrap(), "Ricky");
}

// ============================================================================
// Empty Input Tests
// ============================================================================

/// Bulk functions succeed on empty input instead of failing aggregation.
#[test]
fn test_empty_inputs() {
    assert!(items_to_queue::<i32>(vec![], false).unwrap().is_empty());
    assert!(items_to_pairs::<i32>(vec![], true).unwrap().is_empty());
    assert!(items_to_map::<i32>(vec![], false).unwrap().is_empty());
    assert!(sort_by_priority::<i32>(vec![], false).unwrap().is_empty());
    assert!(find_items_by_priorities::<i32>(vec![], &[1], false)
        .unwrap()
        .is_empty());
    assert!(find_first_item::<i32>(vec![], false).unwrap().is_none());
    assert!(find_last_item::<i32>(vec![], false).unwrap().is_none());
}
