//! Export conversions for blocks.
//!
//! ## Purpose
//!
//! This module converts a block into external representations: a sorted
//! pair list, a map, a multi-map, and a materialized priority queue.
//!
//! ## Design notes
//!
//! * **Sorted source**: Every export starts from the stable
//!   priority-sorted view, so outputs are deterministic for equal
//!   priorities.
//! * **Map bounds**: The map exports require `P: Ord` (method-level
//!   bound) because they key a `BTreeMap` by priority. Float priorities
//!   are therefore excluded from the map exports at compile time; use
//!   [`to_pairs`](crate::block::core::Block::to_pairs) for those.
//! * **Collisions**: `to_map` is last-write-wins across duplicate
//!   priorities (the latest by insertion order among equals survives);
//!   `to_multi_map` is the lossless alternative.
//!
//! ## Invariants
//!
//! * `to_pairs().len()` equals the item count.
//! * The total payload count across `to_multi_map` values equals the
//!   item count.
//!
//! ## Non-goals
//!
//! * No export serializes payloads; all of them share the payload `Rc`s.

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
use crate::block::core::Block;
use crate::primitives::priority::PriorityValue;
use crate::primitives::queue::PriorityQueue;

// ============================================================================
// Export Conversions
// ============================================================================

impl<P: PriorityValue> Block<P> {
    /// `(priority, payload)` pairs, ascending by priority.
    pub fn to_pairs(&self) -> Vec<(P, Rc<dyn Any>)> {
        self.sorted_items()
            .into_iter()
            .map(|item| {
                let priority = item.priority();
                (priority, Rc::clone(item.object()))
            })
            .collect()
    }

    /// Map from priority to payload; duplicate priorities are
    /// last-write-wins in insertion order.
    pub fn to_map(&self) -> BTreeMap<P, Rc<dyn Any>>
    where
        P: Ord,
    {
        self.to_pairs().into_iter().collect()
    }

    /// Lossless map from priority to every payload sharing it.
    pub fn to_multi_map(&self) -> BTreeMap<P, Vec<Rc<dyn Any>>>
    where
        P: Ord,
    {
        let mut map: BTreeMap<P, Vec<Rc<dyn Any>>> = BTreeMap::new();
        for (priority, object) in self.to_pairs() {
            map.entry(priority).or_default().push(object);
        }
        map
    }

    /// Materialize a priority-ordered queue of `(priority, payload)` pairs.
    ///
    /// With `maxsize`, only the first `maxsize` sorted pairs are enqueued
    /// and the queue's capacity is bounded to that size.
    pub fn to_queue(&self, maxsize: Option<usize>) -> PriorityQueue<P> {
        PriorityQueue::from_sorted_pairs(self.to_pairs(), maxsize)
    }
}
