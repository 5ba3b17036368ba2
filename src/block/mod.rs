//! Layer 4: Block
//!
//! # Purpose
//!
//! This layer provides the block containers: construction and validation,
//! the query surface, export conversions, and the deep-flattening
//! variant.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Block ← You are here
//!   ↓
//! Layer 3: Rank
//!   ↓
//! Layer 2: Wrap
//!   ↓
//! Layer 1: Primitives
//! ```

/// The block container and its query surface.
pub mod core;

/// Block construction pipeline.
pub mod builder;

/// Export conversions (pairs, maps, queue).
pub mod exports;

/// Deep blocks and recursive flattening.
pub mod deep;
