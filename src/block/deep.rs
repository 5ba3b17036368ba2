//! Deep blocks: recursive flattening of nested blocks.
//!
//! ## Purpose
//!
//! This module provides [`DeepBlock`], a block variant that recursively
//! replaces any nested block found among its input items with that
//! block's own (already flattened) items before the standard construction
//! pipeline runs.
//!
//! ## Design notes
//!
//! * **Newtype, not inheritance**: `DeepBlock` wraps a [`Block`] and
//!   derefs to it, so the whole query and export surface is available
//!   unchanged.
//! * **Permissive input**: The builder defaults `strict` to off because
//!   nested blocks are expected as *input*; the flattening pre-pass
//!   guarantees none survive into the output.
//! * **Order preserving**: A nested block's items are spliced in place of
//!   the nested item, keeping relative order at every depth.
//!
//! ## Invariants
//!
//! * No item of a constructed deep block has a block payload (of either
//!   kind, at any input nesting depth).
//!
//! ## Non-goals
//!
//! * This module does not deduplicate items that appear in several nested
//!   blocks; each occurrence is spliced where it was found.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::any::Any;
use core::ops::Deref;

// Internal dependencies
use crate::block::builder::BlockBuilder;
use crate::block::core::Block;
use crate::primitives::errors::PrimapError;
use crate::primitives::priority::{HasPriority, PriorityValue};
use crate::rank::aggregate::PriorityMode;
use crate::wrap::item::Item;

// ============================================================================
// Deep Block
// ============================================================================

/// A block guaranteed free of nested block payloads.
#[derive(Debug, Clone)]
pub struct DeepBlock<P: PriorityValue> {
    inner: Block<P>,
}

impl<P: PriorityValue> DeepBlock<P> {
    /// Start configuring a deep block (permissive by default).
    pub fn builder() -> DeepBlockBuilder<P> {
        DeepBlockBuilder::new()
    }

    /// Build a deep block with default options.
    pub fn new(items: Vec<Item<P>>) -> Result<Self, PrimapError> {
        Self::builder().build(items)
    }

    /// The flattened block.
    pub fn as_block(&self) -> &Block<P> {
        &self.inner
    }

    /// Consume into the flattened block.
    pub fn into_block(self) -> Block<P> {
        self.inner
    }
}

impl<P: PriorityValue> Deref for DeepBlock<P> {
    type Target = Block<P>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<P: PriorityValue> HasPriority<P> for DeepBlock<P> {
    fn priority(&self) -> P {
        self.inner.priority()
    }
}

// ============================================================================
// Deep Block Builder
// ============================================================================

/// Fluent builder for [`DeepBlock`] construction.
///
/// Mirrors [`BlockBuilder`] with `strict` defaulting to off, and runs the
/// recursive flattening pre-pass before the standard pipeline.
#[derive(Debug, Clone)]
pub struct DeepBlockBuilder<P: PriorityValue> {
    inner: BlockBuilder<P>,
}

impl<P: PriorityValue> DeepBlockBuilder<P> {
    /// Builder with deep-block defaults: permissive, median mode.
    pub fn new() -> Self {
        Self {
            inner: BlockBuilder::new().strict(false),
        }
    }

    /// Supply the block priority instead of aggregating it.
    pub fn priority(mut self, priority: P) -> Self {
        self.inner = self.inner.priority(priority);
        self
    }

    /// Select the aggregation policy.
    pub fn mode(mut self, mode: PriorityMode) -> Self {
        self.inner = self.inner.mode(mode);
        self
    }

    /// Re-enable strictness; flattening leaves nothing for it to reject.
    pub fn strict(mut self, strict: bool) -> Self {
        self.inner = self.inner.strict(strict);
        self
    }

    /// Require every flattened payload to be exactly of type `T`.
    pub fn expect_type<T: Any>(mut self) -> Self {
        self.inner = self.inner.expect_type::<T>();
        self
    }

    /// Enable or disable priority propagation into item copies.
    pub fn update_priorities(mut self, update: bool) -> Self {
        self.inner = self.inner.update_priorities(update);
        self
    }

    /// Flatten nested blocks, then run the standard build pipeline.
    pub fn build(self, items: Vec<Item<P>>) -> Result<DeepBlock<P>, PrimapError> {
        let mut flattened = Vec::with_capacity(items.len());
        flatten_items(&items, &mut flattened);
        let inner = self.inner.build(flattened)?;
        Ok(DeepBlock { inner })
    }
}

impl<P: PriorityValue> Default for DeepBlockBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Flattening
// ============================================================================

/// Recursively splice nested block items in place of block payloads.
///
/// Recursion continues until a non-block payload is found, so arbitrarily
/// deep nesting flattens to leaf items only.
pub(crate) fn flatten_items<P: PriorityValue>(items: &[Item<P>], out: &mut Vec<Item<P>>) {
    for item in items {
        if let Some(block) = item.downcast_ref::<Block<P>>() {
            flatten_items(block.items(), out);
        } else if let Some(deep) = item.downcast_ref::<DeepBlock<P>>() {
            flatten_items(deep.items(), out);
        } else {
            out.push(item.clone());
        }
    }
}
