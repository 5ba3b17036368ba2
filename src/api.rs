//! High-level functional API.
//!
//! ## Purpose
//!
//! This module provides the convenience entry points for working with
//! prioritized items without managing a block yourself: constructors for
//! items and blocks, and bulk functions that internally build a transient
//! block, run one query or conversion, and return the result.
//!
//! ## Design notes
//!
//! * **Transient blocks**: Every bulk function routes through the same
//!   block pipeline, so validation, sorting, and tie-breaking behave
//!   identically to direct block usage.
//! * **Permissive by default**: The transient block is non-strict and is
//!   given the default priority constant explicitly, so empty inputs
//!   yield empty results instead of an aggregation error.
//! * **Flatten flag**: Each bulk function takes `flatten`; when set,
//!   nested blocks are recursively flattened first, as a
//!   [`DeepBlock`] would.
//! * **Performance**: For repeated queries over the same items, build a
//!   [`Block`] once instead of calling several bulk functions.
//!
//! ## Non-goals
//!
//! * This module adds no semantics of its own; everything delegates to
//!   the block layer.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(not(feature = "std"))]
use alloc::rc::Rc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::BTreeMap;
#[cfg(feature = "std")]
use std::rc::Rc;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::any::Any;

// Internal dependencies
use crate::block::builder::BlockBuilder;
use crate::block::core::Block;
use crate::block::deep::{self, DeepBlock};
use crate::primitives::errors::PrimapError;
use crate::primitives::priority::PriorityValue;
use crate::primitives::queue::PriorityQueue;
use crate::wrap::item::Item;

// ============================================================================
// Constructors
// ============================================================================

/// Create an item wrapping `object` with an explicit priority.
pub fn create_item<P: PriorityValue, T: Any>(object: T, priority: P) -> Item<P> {
    Item::with_priority(object, priority)
}

/// Create a block with default options (strict, median mode).
///
/// If `items` may contain nested blocks, consider
/// [`create_deep_block`] to extract their items instead.
pub fn create_block<P: PriorityValue>(items: Vec<Item<P>>) -> Result<Block<P>, PrimapError> {
    Block::new(items)
}

/// Create a deep block, recursively flattening any nested blocks.
pub fn create_deep_block<P: PriorityValue>(
    items: Vec<Item<P>>,
) -> Result<DeepBlock<P>, PrimapError> {
    DeepBlock::new(items)
}

/// Create a block, flattening nested blocks when `flatten` is set.
pub fn create_mapping<P: PriorityValue>(
    items: Vec<Item<P>>,
    flatten: bool,
) -> Result<Block<P>, PrimapError> {
    if flatten {
        create_deep_block(items).map(DeepBlock::into_block)
    } else {
        create_block(items)
    }
}

// ============================================================================
// Transient Block
// ============================================================================

/// Permissive throwaway block for the bulk functions.
///
/// The explicit default priority keeps empty inputs from failing
/// aggregation; queries never read the block priority.
fn transient_block<P: PriorityValue>(
    items: Vec<Item<P>>,
    flatten: bool,
) -> Result<Block<P>, PrimapError> {
    let items = if flatten { flatten_items(&items) } else { items };
    BlockBuilder::new()
        .strict(false)
        .priority(P::default_priority())
        .build(items)
}

// ============================================================================
// Bulk Conversions
// ============================================================================

/// Convert items into a materialized priority queue.
pub fn items_to_queue<P: PriorityValue>(
    items: Vec<Item<P>>,
    flatten: bool,
) -> Result<PriorityQueue<P>, PrimapError> {
    Ok(transient_block(items, flatten)?.to_queue(None))
}

/// Convert items into ascending `(priority, payload)` pairs.
pub fn items_to_pairs<P: PriorityValue>(
    items: Vec<Item<P>>,
    flatten: bool,
) -> Result<Vec<(P, Rc<dyn Any>)>, PrimapError> {
    Ok(transient_block(items, flatten)?.to_pairs())
}

/// Convert items into a priority-keyed map (last-write-wins).
pub fn items_to_map<P: PriorityValue + Ord>(
    items: Vec<Item<P>>,
    flatten: bool,
) -> Result<BTreeMap<P, Rc<dyn Any>>, PrimapError> {
    Ok(transient_block(items, flatten)?.to_map())
}

/// Convert items into a lossless priority-keyed multi-map.
pub fn items_to_multi_map<P: PriorityValue + Ord>(
    items: Vec<Item<P>>,
    flatten: bool,
) -> Result<BTreeMap<P, Vec<Rc<dyn Any>>>, PrimapError> {
    Ok(transient_block(items, flatten)?.to_multi_map())
}

/// Recursively replace nested block payloads with their leaf items.
pub fn flatten_items<P: PriorityValue>(items: &[Item<P>]) -> Vec<Item<P>> {
    let mut flattened = Vec::with_capacity(items.len());
    deep::flatten_items(items, &mut flattened);
    flattened
}

/// Extract the shared payloads of the items, in input order.
pub fn extract_objects<P: PriorityValue>(
    items: Vec<Item<P>>,
    flatten: bool,
) -> Result<Vec<Rc<dyn Any>>, PrimapError> {
    Ok(transient_block(items, flatten)?.objects())
}

/// Sort items ascending by priority, stably.
pub fn sort_by_priority<P: PriorityValue>(
    items: Vec<Item<P>>,
    flatten: bool,
) -> Result<Vec<Item<P>>, PrimapError> {
    Ok(transient_block(items, flatten)?.sorted_items())
}

// ============================================================================
// Bulk Queries
// ============================================================================

/// Find items whose priority equals any of `priorities`.
pub fn find_items_by_priorities<P: PriorityValue>(
    items: Vec<Item<P>>,
    priorities: &[P],
    flatten: bool,
) -> Result<Vec<Item<P>>, PrimapError> {
    Ok(transient_block(items, flatten)?.items_with_priority_in(priorities))
}

/// Find the first item whose priority equals any of `priorities`.
pub fn find_item_by_priorities<P: PriorityValue>(
    items: Vec<Item<P>>,
    priorities: &[P],
    flatten: bool,
) -> Result<Option<Item<P>>, PrimapError> {
    Ok(transient_block(items, flatten)?.item_with_priority_in(priorities))
}

/// Find items with priority in the inclusive range `[start, end]`.
pub fn find_items_by_priority_range<P: PriorityValue>(
    items: Vec<Item<P>>,
    start: Option<&P>,
    end: Option<&P>,
    flatten: bool,
) -> Result<Vec<Item<P>>, PrimapError> {
    transient_block(items, flatten)?.items_in_range(start, end)
}

/// Find the first item with priority in the inclusive range `[start, end]`.
pub fn find_item_by_priority_range<P: PriorityValue>(
    items: Vec<Item<P>>,
    start: Option<&P>,
    end: Option<&P>,
    flatten: bool,
) -> Result<Option<Item<P>>, PrimapError> {
    transient_block(items, flatten)?.item_in_range(start, end)
}

/// Find items whose payload is of type `T`.
pub fn find_items_by_type<T: Any, P: PriorityValue>(
    items: Vec<Item<P>>,
    flatten: bool,
) -> Result<Vec<Item<P>>, PrimapError> {
    Ok(transient_block(items, flatten)?.items_of_type::<T>())
}

/// Find the first item whose payload is of type `T`.
pub fn find_item_by_type<T: Any, P: PriorityValue>(
    items: Vec<Item<P>>,
    flatten: bool,
) -> Result<Option<Item<P>>, PrimapError> {
    Ok(transient_block(items, flatten)?.item_of_type::<T>())
}

/// Find the `limit` lowest-priority items, ascending.
pub fn find_first_items<P: PriorityValue>(
    items: Vec<Item<P>>,
    limit: usize,
    flatten: bool,
) -> Result<Vec<Item<P>>, PrimapError> {
    Ok(transient_block(items, flatten)?.first_items(limit))
}

/// Find the lowest-priority item.
pub fn find_first_item<P: PriorityValue>(
    items: Vec<Item<P>>,
    flatten: bool,
) -> Result<Option<Item<P>>, PrimapError> {
    Ok(transient_block(items, flatten)?.first_item())
}

/// Find the `limit` highest-priority items, ascending.
pub fn find_last_items<P: PriorityValue>(
    items: Vec<Item<P>>,
    limit: usize,
    flatten: bool,
) -> Result<Vec<Item<P>>, PrimapError> {
    Ok(transient_block(items, flatten)?.last_items(limit))
}

/// Find the highest-priority item.
pub fn find_last_item<P: PriorityValue>(
    items: Vec<Item<P>>,
    flatten: bool,
) -> Result<Option<Item<P>>, PrimapError> {
    Ok(transient_block(items, flatten)?.last_item())
}
