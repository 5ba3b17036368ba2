//! Block construction pipeline.
//!
//! ## Purpose
//!
//! This module provides [`BlockBuilder`], the fluent configuration type
//! through which every block is constructed, and the validation,
//! aggregation, and priority-blending steps of its `build` pipeline.
//!
//! ## Design notes
//!
//! * **Validated at build**: Strict and expected-type constraints are
//!   checked once, at `build()`; a constructed block never re-validates.
//! * **Fail-fast**: Checks run cheapest-first and stop at the first
//!   violation; nothing observable is mutated on failure.
//! * **Copy-never-mutate**: When priorities propagate, every item is
//!   cloned first, so caller-owned items are never touched.
//! * **Gated blending**: Blending applies in average mode only; other
//!   modes copy items without touching their priorities.
//!
//! ## Key concepts
//!
//! * **Strict mode** (default on): payloads that are themselves blocks
//!   are rejected; turn it off to nest blocks deliberately.
//! * **Expected type**: an optional `TypeId` constraint every payload
//!   must match exactly.
//! * **Priority resolution**: an explicit priority wins; otherwise the
//!   configured mode aggregates the item priorities, and zero items with
//!   no explicit priority is an error.
//!
//! ## Invariants
//!
//! * `build` leaves its input unusable only on success (it is consumed);
//!   errors carry enough context to identify the offending item.
//!
//! ## Non-goals
//!
//! * This module does not flatten nested blocks; see [`crate::block::deep`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::any::{type_name, Any, TypeId};

// Internal dependencies
use crate::block::core::Block;
use crate::block::deep::DeepBlock;
use crate::primitives::errors::PrimapError;
use crate::primitives::priority::PriorityValue;
use crate::rank::aggregate::{aggregate_priorities, blend_priorities, PriorityMode};
use crate::rank::sorting::resolve_priorities;
use crate::wrap::item::Item;

// ============================================================================
// Block Builder
// ============================================================================

/// Fluent builder for [`Block`] construction.
#[derive(Debug, Clone)]
pub struct BlockBuilder<P: PriorityValue> {
    /// Explicit block priority; `None` means aggregate from items.
    priority: Option<P>,

    /// Aggregation policy.
    mode: PriorityMode,

    /// Reject block payloads when set.
    strict: bool,

    /// Exact payload type every item must wrap, with its name.
    expected: Option<(TypeId, &'static str)>,

    /// Whether the block priority propagates into item copies.
    update_priorities: bool,
}

impl<P: PriorityValue> BlockBuilder<P> {
    /// Builder with defaults: strict, median mode, priorities propagated.
    pub fn new() -> Self {
        Self {
            priority: None,
            mode: PriorityMode::default(),
            strict: true,
            expected: None,
            update_priorities: true,
        }
    }

    /// Supply the block priority instead of aggregating it.
    pub fn priority(mut self, priority: P) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Select the aggregation policy.
    pub fn mode(mut self, mode: PriorityMode) -> Self {
        self.mode = mode;
        self
    }

    /// Allow or reject block payloads (rejected by default).
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Require every payload to be exactly of type `T`.
    pub fn expect_type<T: Any>(mut self) -> Self {
        self.expected = Some((TypeId::of::<T>(), type_name::<T>()));
        self
    }

    /// Enable or disable priority propagation into item copies.
    pub fn update_priorities(mut self, update: bool) -> Self {
        self.update_priorities = update;
        self
    }

    /// Validate items, resolve the block priority, and assemble the block.
    pub fn build(self, items: Vec<Item<P>>) -> Result<Block<P>, PrimapError> {
        validate_items(&items, self.strict, self.expected)?;

        let priority = match self.priority {
            Some(priority) => priority,
            None => aggregate_priorities(&resolve_priorities(&items), self.mode)?,
        };

        let items = blend_into_copies(items, &priority, self.mode, self.update_priorities)?;
        Ok(Block::from_parts(
            items,
            priority,
            self.mode,
            self.update_priorities,
        ))
    }
}

impl<P: PriorityValue> Default for BlockBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Pipeline Steps
// ============================================================================

/// Check every item against the strict and expected-type constraints.
pub(crate) fn validate_items<P: PriorityValue>(
    items: &[Item<P>],
    strict: bool,
    expected: Option<(TypeId, &'static str)>,
) -> Result<(), PrimapError> {
    for (index, item) in items.iter().enumerate() {
        if strict && is_block_payload(item) {
            return Err(PrimapError::NestedBlock { index });
        }
        if let Some((type_id, expected_name)) = expected {
            if (**item.object()).type_id() != type_id {
                return Err(PrimapError::ItemTypeMismatch {
                    expected: expected_name,
                    found: item.type_name(),
                });
            }
        }
    }
    Ok(())
}

/// Whether an item's payload is a block of either kind.
pub(crate) fn is_block_payload<P: PriorityValue>(item: &Item<P>) -> bool {
    item.is::<Block<P>>() || item.is::<DeepBlock<P>>()
}

/// Copy items and blend the block priority into the copies.
///
/// With propagation off, items pass through untouched and uncloned. With
/// it on, every item is cloned; in average mode each clone's priority is
/// replaced by the midpoint of its own and the block's.
pub(crate) fn blend_into_copies<P: PriorityValue>(
    items: Vec<Item<P>>,
    block_priority: &P,
    mode: PriorityMode,
    update_priorities: bool,
) -> Result<Vec<Item<P>>, PrimapError> {
    if !update_priorities {
        return Ok(items);
    }
    let mut copies = Vec::with_capacity(items.len());
    for item in &items {
        let mut copy = item.clone();
        if mode == PriorityMode::Average {
            let blended = blend_priorities(block_priority, &copy.priority())?;
            copy.set_priority(blended);
        }
        copies.push(copy);
    }
    Ok(copies)
}
