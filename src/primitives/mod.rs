//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions used throughout the
//! crate: the priority representation and its capability traits, the
//! shared error type, and the materialized queue export structure. It
//! depends on no higher layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Block
//!   ↓
//! Layer 3: Rank
//!   ↓
//! Layer 2: Wrap
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Priority values, capability traits, and lazy resolution.
pub mod priority;

/// Materialized priority queue export.
pub mod queue;
