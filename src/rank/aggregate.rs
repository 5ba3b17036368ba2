//! Priority aggregation policies.
//!
//! ## Purpose
//!
//! This module defines [`PriorityMode`], the policy by which a block
//! derives its own priority from its members' priorities, and the
//! aggregation and blending functions the block pipeline calls.
//!
//! ## Design notes
//!
//! * **Median default**: Median is position-based, so it works for any
//!   ordered priority type; average requires numeric priorities and is
//!   therefore the only mode that can fail on exotic types.
//! * **Upper-middle median**: For even counts the upper of the two middle
//!   elements is taken (index `n / 2` after a stable ascending sort),
//!   which is also the exact middle for odd counts.
//! * **Partial orders**: Min/max fold with the same incomparable-as-equal
//!   comparison the sorter uses.
//!
//! ## Key concepts
//!
//! * **Aggregation**: Deriving one block priority from many item priorities.
//! * **Blending**: Propagating a block priority back into an item priority
//!   as the midpoint of the two (average mode only).
//!
//! ## Invariants
//!
//! * Aggregation over a non-empty slice always yields one of the input
//!   values for median/min/max.
//! * Aggregation never mutates its input.
//!
//! ## Non-goals
//!
//! * This module does not decide *when* to blend; the block builder does.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;

// Internal dependencies
use crate::primitives::errors::PrimapError;
use crate::primitives::priority::PriorityValue;
use crate::rank::sorting::compare_priorities;

// ============================================================================
// Priority Mode
// ============================================================================

/// Policy for deriving a block's priority from its members' priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityMode {
    /// Upper-middle element of the ascending-sorted priorities.
    #[default]
    Median,

    /// Arithmetic mean; requires numeric priorities.
    Average,

    /// Minimum under the comparison order.
    Min,

    /// Maximum under the comparison order.
    Max,
}

impl PriorityMode {
    /// Every supported mode.
    pub const ALL: [PriorityMode; 4] = [
        PriorityMode::Median,
        PriorityMode::Average,
        PriorityMode::Min,
        PriorityMode::Max,
    ];

    /// Canonical name of the mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Median => "median",
            Self::Average => "average",
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

impl Display for PriorityMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl FromStr for PriorityMode {
    type Err = PrimapError;

    /// Parse a mode name; `avg` and `mean` are accepted aliases for average.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "median" => Ok(Self::Median),
            "average" | "avg" | "mean" => Ok(Self::Average),
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            other => Err(PrimapError::UnknownPriorityMode(String::from(other))),
        }
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Derive one priority from a non-empty slice of priorities.
pub fn aggregate_priorities<P: PriorityValue>(
    priorities: &[P],
    mode: PriorityMode,
) -> Result<P, PrimapError> {
    if priorities.is_empty() {
        return Err(PrimapError::EmptyBlock);
    }
    match mode {
        PriorityMode::Median => {
            let mut sorted: Vec<P> = priorities.to_vec();
            sorted.sort_by(compare_priorities);
            Ok(sorted[sorted.len() / 2].clone())
        }
        PriorityMode::Average => P::average(priorities).ok_or(PrimapError::NonNumericAverage),
        PriorityMode::Min => Ok(fold_extreme(priorities, Ordering::Less)),
        PriorityMode::Max => Ok(fold_extreme(priorities, Ordering::Greater)),
    }
}

/// Midpoint of a block priority and an item priority.
pub fn blend_priorities<P: PriorityValue>(block: &P, item: &P) -> Result<P, PrimapError> {
    block.blend(item).ok_or(PrimapError::NonNumericAverage)
}

/// First element winning every comparison toward `target`.
fn fold_extreme<P: PriorityValue>(priorities: &[P], target: Ordering) -> P {
    let mut extreme = &priorities[0];
    for priority in &priorities[1..] {
        if compare_priorities(priority, extreme) == target {
            extreme = priority;
        }
    }
    extreme.clone()
}
