//! The block container and its query surface.
//!
//! ## Purpose
//!
//! This module provides [`Block`], an insertion-ordered, validated
//! collection of items with a derived or explicit aggregate priority, and
//! the read-only query operations over it: priority lookups, range and
//! type filters, and top/bottom-k retrieval.
//!
//! ## Design notes
//!
//! * **Two orderings**: Insertion order is the base ordering and is what
//!   [`items`](Block::items) returns; priority order is a derived,
//!   on-demand view produced by a stable sort.
//! * **Read-only queries**: Every query clones matching items (wrapper
//!   clones sharing payloads); no query mutates the block.
//! * **Copy-on-write mutation**: [`set_priority`](Block::set_priority) is
//!   the only mutation and rebuilds the item list from copies, so a
//!   failure leaves the block unchanged.
//!
//! ## Invariants
//!
//! * Items satisfy the builder's strict/expected-type constraints; queries
//!   never re-validate.
//! * `sorted_items()` is a stable ascending permutation of `items()`.
//!
//! ## Key concepts
//!
//! * **Priority equality**: Lookup methods use the priority type's own
//!   equality; range bounds are inclusive and `None` means unbounded.
//!
//! ## Non-goals
//!
//! * Construction and validation live in [`crate::block::builder`].
//! * Export conversions live in [`crate::block::exports`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::rc::Rc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::rc::Rc;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::any::Any;

// Internal dependencies
use crate::primitives::errors::PrimapError;
use crate::primitives::priority::{HasPriority, PriorityValue};
use crate::rank::aggregate::PriorityMode;
use crate::rank::sorting::{extract_objects, resolve_priorities, sort_items_by_priority};
use crate::wrap::item::Item;

// ============================================================================
// Block
// ============================================================================

/// An ordered, validated collection of items with an aggregate priority.
#[derive(Debug, Clone)]
pub struct Block<P: PriorityValue> {
    /// Items in insertion order.
    items: Vec<Item<P>>,

    /// The block's own priority, explicit or aggregated.
    priority: P,

    /// Aggregation policy used to derive and blend priorities.
    mode: PriorityMode,

    /// Whether setting a block priority propagates into item copies.
    update_priorities: bool,
}

impl<P: PriorityValue> Block<P> {
    /// Start configuring a block.
    pub fn builder() -> crate::block::builder::BlockBuilder<P> {
        crate::block::builder::BlockBuilder::new()
    }

    /// Build a block with default options (strict, median mode).
    pub fn new(items: Vec<Item<P>>) -> Result<Self, PrimapError> {
        Self::builder().build(items)
    }

    /// Assemble a validated block; called by the builder only.
    pub(crate) fn from_parts(
        items: Vec<Item<P>>,
        priority: P,
        mode: PriorityMode,
        update_priorities: bool,
    ) -> Self {
        Self {
            items,
            priority,
            mode,
            update_priorities,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The block's own priority.
    pub fn priority(&self) -> P {
        self.priority.clone()
    }

    /// The aggregation policy this block was built with.
    pub fn mode(&self) -> PriorityMode {
        self.mode
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the block holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item<P>] {
        &self.items
    }

    /// Items in ascending priority order (stable).
    pub fn sorted_items(&self) -> Vec<Item<P>> {
        sort_items_by_priority(&self.items)
    }

    /// Payloads in insertion order.
    pub fn objects(&self) -> Vec<Rc<dyn Any>> {
        extract_objects(&self.items)
    }

    /// Payloads in ascending priority order.
    pub fn sorted_objects(&self) -> Vec<Rc<dyn Any>> {
        extract_objects(&self.sorted_items())
    }

    /// Resolved item priorities, parallel to [`items`](Block::items).
    pub fn priorities(&self) -> Vec<P> {
        resolve_priorities(&self.items)
    }

    // ========================================================================
    // Filters
    // ========================================================================

    /// Items satisfying a predicate, optionally capped at `limit`.
    pub fn filter_items<F>(&self, key: F, limit: Option<usize>) -> Vec<Item<P>>
    where
        F: Fn(&Item<P>) -> bool,
    {
        let mut matched: Vec<Item<P>> = self.items.iter().filter(|i| key(i)).cloned().collect();
        if let Some(limit) = limit {
            matched.truncate(limit);
        }
        matched
    }

    /// Items whose priority equals `priority`.
    pub fn items_with_priority(&self, priority: &P) -> Vec<Item<P>> {
        self.filter_items(|item| &item.priority() == priority, None)
    }

    /// First item whose priority equals `priority`.
    pub fn item_with_priority(&self, priority: &P) -> Option<Item<P>> {
        self.filter_items(|item| &item.priority() == priority, Some(1))
            .pop()
    }

    /// Items whose priority equals any of `priorities`.
    pub fn items_with_priority_in(&self, priorities: &[P]) -> Vec<Item<P>> {
        self.filter_items(|item| priorities.contains(&item.priority()), None)
    }

    /// First item whose priority equals any of `priorities`.
    pub fn item_with_priority_in(&self, priorities: &[P]) -> Option<Item<P>> {
        self.filter_items(|item| priorities.contains(&item.priority()), Some(1))
            .pop()
    }

    /// Items with priority in the inclusive range `[start, end]`.
    ///
    /// `None` leaves that side unbounded; both `None` matches everything.
    pub fn items_in_range(
        &self,
        start: Option<&P>,
        end: Option<&P>,
    ) -> Result<Vec<Item<P>>, PrimapError> {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(PrimapError::InvalidPriorityRange {
                    start: format!("{start:?}"),
                    end: format!("{end:?}"),
                });
            }
        }
        Ok(self.filter_items(
            |item| {
                let priority = item.priority();
                if let Some(start) = start {
                    if &priority < start {
                        return false;
                    }
                }
                if let Some(end) = end {
                    if &priority > end {
                        return false;
                    }
                }
                true
            },
            None,
        ))
    }

    /// First item with priority in the inclusive range `[start, end]`.
    pub fn item_in_range(
        &self,
        start: Option<&P>,
        end: Option<&P>,
    ) -> Result<Option<Item<P>>, PrimapError> {
        Ok(self.items_in_range(start, end)?.into_iter().next())
    }

    /// Items whose payload is of type `T`.
    pub fn items_of_type<T: Any>(&self) -> Vec<Item<P>> {
        self.filter_items(|item| item.is::<T>(), None)
    }

    /// First item whose payload is of type `T`.
    pub fn item_of_type<T: Any>(&self) -> Option<Item<P>> {
        self.filter_items(|item| item.is::<T>(), Some(1)).pop()
    }

    // ========================================================================
    // Top/Bottom-k
    // ========================================================================

    /// The `limit` lowest-priority items, ascending.
    pub fn first_items(&self, limit: usize) -> Vec<Item<P>> {
        let mut sorted = self.sorted_items();
        sorted.truncate(limit);
        sorted
    }

    /// The lowest-priority item.
    pub fn first_item(&self) -> Option<Item<P>> {
        self.first_items(1).pop()
    }

    /// The `limit` highest-priority items, still ascending.
    pub fn last_items(&self, limit: usize) -> Vec<Item<P>> {
        let sorted = self.sorted_items();
        let cut = sorted.len().saturating_sub(limit);
        sorted[cut..].to_vec()
    }

    /// The highest-priority item.
    pub fn last_item(&self) -> Option<Item<P>> {
        self.last_items(1).pop()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Replace the block priority and re-run the blending step.
    ///
    /// Items are copied before blending; on error the block is unchanged.
    pub fn set_priority(&mut self, priority: P) -> Result<(), PrimapError> {
        let items = crate::block::builder::blend_into_copies(
            self.items.clone(),
            &priority,
            self.mode,
            self.update_priorities,
        )?;
        self.priority = priority;
        self.items = items;
        Ok(())
    }
}

impl<P: PriorityValue> HasPriority<P> for Block<P> {
    fn priority(&self) -> P {
        self.priority.clone()
    }
}

/// Iterate over priority-sorted items.
impl<'a, P: PriorityValue> IntoIterator for &'a Block<P> {
    type Item = Item<P>;
    #[cfg(feature = "std")]
    type IntoIter = std::vec::IntoIter<Item<P>>;
    #[cfg(not(feature = "std"))]
    type IntoIter = alloc::vec::IntoIter<Item<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sorted_items().into_iter()
    }
}
