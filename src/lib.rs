//! # primap — Priority-Tagged Item Collections for Rust
//!
//! In-memory collections of arbitrary values tagged with sortable
//! priorities. Values are wrapped as prioritized items, items are grouped
//! into blocks that derive their own aggregate priority from their
//! members (median, average, min, or max) and can propagate it back down,
//! and blocks expose a query/sort/export surface: priority lookups, range
//! and type filters, top/bottom-k retrieval, and conversions to pair
//! lists, maps, and priority queues. A deep-block variant recursively
//! flattens nested blocks into a single flat collection of leaf items.
//!
//! ## Quick Start
//!
//! ```rust
//! use primap::prelude::*;
//!
//! let items = vec![
//!     Item::with_priority("John", 10),
//!     Item::with_priority("Marry", 30),
//!     Item::with_priority("Ben", 30),
//!     Item::with_priority("Ricky", 40),
//! ];
//!
//! // The block derives its own priority: the median of [10, 30, 30, 40].
//! let block = Block::new(items)?;
//! assert_eq!(block.priority(), 30);
//!
//! // Lowest priority dequeues first; ties keep insertion order.
//! let mut queue = block.to_queue(None);
//! let (priority, name) = queue.pop().unwrap();
//! assert_eq!(priority, 10);
//! assert_eq!(name.downcast_ref::<&str>(), Some(&"John"));
//! # Result::<(), PrimapError>::Ok(())
//! ```
//!
//! ## Aggregation and Back-Propagation
//!
//! The aggregation policy is configured on the builder. Average mode also
//! blends the block priority back into each member's priority — always
//! into copies, never into the caller's items:
//!
//! ```rust
//! use primap::prelude::*;
//!
//! let block = Block::builder()
//!     .mode(Average)
//!     .build(vec![
//!         Item::with_priority("low", 10.0),
//!         Item::with_priority("high", 30.0),
//!     ])?;
//!
//! assert_eq!(block.priority(), 20.0);
//! assert_eq!(block.priorities(), vec![15.0, 25.0]);
//! # Result::<(), PrimapError>::Ok(())
//! ```
//!
//! ## Deep Flattening
//!
//! Blocks reject nested blocks by default (`strict`). Deep blocks expect
//! them and recursively splice their leaf items in place:
//!
//! ```rust
//! use primap::prelude::*;
//!
//! let inner = Block::new(vec![
//!     Item::with_priority("Marry", 30),
//!     Item::with_priority("Ben", 30),
//! ])?;
//!
//! let deep = DeepBlock::new(vec![
//!     Item::with_priority(inner, 20),
//!     Item::with_priority("John", 10),
//! ])?;
//!
//! assert_eq!(deep.len(), 3);
//! assert!(deep.items().iter().all(|item| !item.is::<Block<i32>>()));
//! # Result::<(), PrimapError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Construction and range queries return `Result<_, PrimapError>`; the
//! `?` operator is idiomatic. All errors are synchronous and local —
//! a failed call never leaves a partially mutated block behind.
//!
//! ```rust
//! use primap::prelude::*;
//!
//! // Zero items and no explicit priority: nothing to aggregate from.
//! let empty: Result<Block<i32>, _> = Block::new(vec![]);
//! assert_eq!(empty.unwrap_err(), PrimapError::EmptyBlock);
//!
//! // An explicit priority makes the empty block fine.
//! let block = Block::builder().priority(0).build(vec![])?;
//! assert_eq!(block.priority(), 0);
//! # Result::<(), PrimapError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments through `alloc`. Disable
//! default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! primap = { version = "0.1", default-features = false }
//! ```
//!
//! ## Concurrency
//!
//! All operations are pure computations over in-memory sequences; reads
//! are freely shareable. [`Block::set_priority`] is the only mutation and
//! requires external synchronization if blocks cross threads (payloads
//! are `Rc`-shared, so blocks are single-threaded by construction).

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - priorities, errors, and the queue export.
pub mod primitives;

// Layer 2: Wrap - reference and item wrappers around raw values.
pub mod wrap;

// Layer 3: Rank - stable sorting and aggregation policies.
pub mod rank;

// Layer 4: Block - containers, validation, queries, and flattening.
pub mod block;

// High-level functional API over transient blocks.
pub mod api;

// Standard primap prelude.
pub mod prelude {
    pub use crate::api::{
        create_block, create_deep_block, create_item, create_mapping, extract_objects,
        find_first_item, find_first_items, find_item_by_priorities, find_item_by_priority_range,
        find_item_by_type, find_items_by_priorities, find_items_by_priority_range,
        find_items_by_type, find_last_item, find_last_items, flatten_items, items_to_map,
        items_to_multi_map, items_to_pairs, items_to_queue, sort_by_priority,
    };
    pub use crate::block::builder::BlockBuilder;
    pub use crate::block::core::Block;
    pub use crate::block::deep::{DeepBlock, DeepBlockBuilder};
    pub use crate::primitives::errors::PrimapError;
    pub use crate::primitives::priority::{HasPriority, Priority, PriorityValue};
    pub use crate::primitives::queue::PriorityQueue;
    pub use crate::rank::aggregate::PriorityMode::{self, Average, Max, Median, Min};
    pub use crate::wrap::item::Item;
    pub use crate::wrap::reference::Reference;
}
