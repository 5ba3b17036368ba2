//! Sorting utilities for prioritized items.
//!
//! ## Purpose
//!
//! This module provides the stable priority sort used by every derived
//! view in the crate, plus payload extraction over item slices.
//!
//! ## Design notes
//!
//! * **Stability**: Uses stable sorting so equal-priority items retain
//!   their relative insertion order, making query results deterministic.
//! * **Decorate-sort-undecorate**: Priorities are resolved once per item
//!   before sorting, so lazily computed priorities are evaluated O(n)
//!   times rather than O(n log n).
//! * **Partial orders**: Incomparable priority pairs compare as equal,
//!   which the stable sort then leaves in insertion order.
//!
//! ## Invariants
//!
//! * The output is a permutation of the input.
//! * Resolved priorities are non-decreasing across the output.
//!
//! ## Non-goals
//!
//! * This module does not aggregate priorities; see [`crate::rank::aggregate`].
//! * This module does not filter items; blocks do.

// Feature-gated imports
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
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::priority::PriorityValue;
use crate::wrap::item::Item;

// ============================================================================
// Comparison
// ============================================================================

/// Total comparison over a partially ordered priority type.
///
/// Incomparable pairs are treated as equal; combined with a stable sort
/// this keeps them in insertion order.
pub fn compare_priorities<P: PartialOrd>(a: &P, b: &P) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort items ascending by resolved priority, stably.
///
/// 1. Resolves every item's priority once.
/// 2. Pairs priorities with original indices.
/// 3. Performs a stable sort on the priority keys alone.
/// 4. Clones items into the sorted order.
pub fn sort_items_by_priority<P: PriorityValue>(items: &[Item<P>]) -> Vec<Item<P>> {
    let mut keyed: Vec<(P, usize)> = items
        .iter()
        .map(|item| item.priority())
        .zip(0..items.len())
        .collect();
    keyed.sort_by(|a, b| compare_priorities(&a.0, &b.0));
    keyed
        .into_iter()
        .map(|(_, index)| items[index].clone())
        .collect()
}

/// Resolve every item's priority, in input order.
pub fn resolve_priorities<P: PriorityValue>(items: &[Item<P>]) -> Vec<P> {
    items.iter().map(|item| item.priority()).collect()
}

/// Extract the shared payloads of an item slice, in input order.
pub fn extract_objects<P: PriorityValue>(items: &[Item<P>]) -> Vec<Rc<dyn Any>> {
    items.iter().map(|item| Rc::clone(item.object())).collect()
}
