//! Layer 2: Wrap
//!
//! # Purpose
//!
//! This layer wraps raw values for use in blocks: a [`reference::Reference`]
//! pairs a payload with a priority, and an [`item::Item`] adds an
//! independently overridable (possibly lazy) priority on top.
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
//! Layer 2: Wrap ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Payload wrapper pairing a value with a priority.
pub mod reference;

/// Prioritized item wrapper.
pub mod item;
