//! Materialized priority queue export.
//!
//! ## Purpose
//!
//! This module provides the queue structure returned by
//! [`Block::to_queue`](crate::block::core::Block::to_queue). The queue is
//! materialized from an already priority-sorted pair list, so dequeue
//! order is fully determined at construction time.
//!
//! ## Design notes
//!
//! * **Determinism**: Ties dequeue in original insertion order because the
//!   source pairs come from a stable sort; the queue never reorders.
//! * **Bounded**: An optional `maxsize` caps the queue at construction;
//!   excess pairs are dropped before enqueueing, so filling never blocks.
//! * **Payloads**: Entries pair a priority with the shared `Rc<dyn Any>`
//!   payload of the originating item.
//!
//! ## Invariants
//!
//! * Entries are non-decreasing in priority from front to back.
//! * `len() <= maxsize` whenever a maxsize is set.
//!
//! ## Non-goals
//!
//! * This is not a general-purpose heap; entries cannot be pushed after
//!   construction.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;
#[cfg(not(feature = "std"))]
use alloc::rc::Rc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::VecDeque;
#[cfg(feature = "std")]
use std::rc::Rc;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::any::Any;
use core::fmt::{Debug, Formatter, Result as FmtResult};

// Internal dependencies
use crate::primitives::priority::PriorityValue;

// ============================================================================
// Priority Queue
// ============================================================================

/// A priority-ordered queue of `(priority, payload)` pairs.
///
/// Lowest priority dequeues first; equal priorities dequeue in their
/// original insertion order.
pub struct PriorityQueue<P: PriorityValue> {
    /// Entries in dequeue order.
    entries: VecDeque<(P, Rc<dyn Any>)>,

    /// Optional capacity bound fixed at construction.
    maxsize: Option<usize>,
}

impl<P: PriorityValue> PriorityQueue<P> {
    /// Build a queue from pairs already sorted ascending by priority.
    ///
    /// When `maxsize` is given, only the first `maxsize` pairs are kept.
    pub fn from_sorted_pairs(mut pairs: Vec<(P, Rc<dyn Any>)>, maxsize: Option<usize>) -> Self {
        if let Some(size) = maxsize {
            pairs.truncate(size);
        }
        Self {
            entries: pairs.into_iter().collect(),
            maxsize,
        }
    }

    /// Remove and return the lowest-priority entry.
    pub fn pop(&mut self) -> Option<(P, Rc<dyn Any>)> {
        self.entries.pop_front()
    }

    /// The lowest-priority entry without removing it.
    pub fn peek(&self) -> Option<&(P, Rc<dyn Any>)> {
        self.entries.front()
    }

    /// Number of entries remaining.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The capacity bound, if one was set.
    pub fn maxsize(&self) -> Option<usize> {
        self.maxsize
    }

    /// Whether the queue is at its capacity bound.
    pub fn is_full(&self) -> bool {
        match self.maxsize {
            Some(size) => self.entries.len() >= size,
            None => false,
        }
    }
}

impl<P: PriorityValue> Debug for PriorityQueue<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PriorityQueue")
            .field("len", &self.entries.len())
            .field("maxsize", &self.maxsize)
            .finish()
    }
}
