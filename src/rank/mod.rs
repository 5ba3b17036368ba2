//! Layer 3: Rank
//!
//! # Purpose
//!
//! This layer provides the pure ranking computations blocks are built on:
//! stable priority sorting and the median/average/min/max aggregation
//! policies. These are reusable building blocks with no container logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Block
//!   ↓
//! Layer 3: Rank ← You are here
//!   ↓
//! Layer 2: Wrap
//!   ↓
//! Layer 1: Primitives
//! ```

/// Stable priority sorting and payload extraction.
pub mod sorting;

/// Priority aggregation policies.
pub mod aggregate;
