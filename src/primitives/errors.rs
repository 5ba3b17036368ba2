//! Error types for primap operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while constructing
//! or querying blocks, including item validation, priority aggregation,
//! and range-query constraints.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., expected vs. found type names).
//! * **Eager**: Violations are reported at the call that caused them; prior state is unaffected.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Item validation**: Payload type mismatches and nested blocks under strict mode.
//! 2. **Aggregation**: Empty blocks and non-numeric averaging.
//! 3. **Query constraints**: Inverted priority ranges.
//! 4. **Mode parsing**: Unrecognized priority-mode names.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for primap operations.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimapError {
    /// An item's payload does not match the block's expected type.
    ItemTypeMismatch {
        /// Name of the type the block expects.
        expected: &'static str,
        /// Name of the type the item actually wraps.
        found: &'static str,
    },

    /// A strict block received an item whose payload is itself a block.
    NestedBlock {
        /// Position of the offending item in the input sequence.
        index: usize,
    },

    /// A block priority cannot be derived from zero items; supply one explicitly.
    EmptyBlock,

    /// Priority-mode name was not recognized.
    UnknownPriorityMode(String),

    /// Range query with a start bound greater than the end bound.
    InvalidPriorityRange {
        /// Formatted start bound.
        start: String,
        /// Formatted end bound.
        end: String,
    },

    /// Average-mode aggregation or blending was requested on a priority
    /// type that does not support arithmetic.
    NonNumericAverage,
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for PrimapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::ItemTypeMismatch { expected, found } => {
                write!(
                    f,
                    "Item payload should be of type '{expected}', not '{found}'"
                )
            }
            Self::NestedBlock { index } => {
                write!(
                    f,
                    "Nested block payloads are not allowed when 'strict' is enabled (item {index})"
                )
            }
            Self::EmptyBlock => {
                write!(
                    f,
                    "Cannot derive a block priority from zero items; supply an explicit priority"
                )
            }
            Self::UnknownPriorityMode(mode) => {
                write!(
                    f,
                    "Priority mode should be one of [median, average, min, max], not '{mode}'"
                )
            }
            Self::InvalidPriorityRange { start, end } => {
                write!(
                    f,
                    "Start priority {start} cannot be greater than end priority {end}"
                )
            }
            Self::NonNumericAverage => {
                write!(f, "Average mode requires numeric priorities")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for PrimapError {}
