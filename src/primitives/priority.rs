//! Priority values and the capabilities they opt into.
//!
//! ## Purpose
//!
//! This module defines how priorities are represented and resolved. A
//! priority can be a fixed value, a lazily computed value, or a delegation
//! to another priority-bearing object. The [`PriorityValue`] trait captures
//! what a type must provide to serve as a priority, and [`HasPriority`]
//! lets arbitrary types expose a priority of their own.
//!
//! ## Design notes
//!
//! * **Explicit capability**: Types opt into priority arithmetic through
//!   `PriorityValue`; there is no runtime probing for numeric support.
//! * **Tagged laziness**: Dynamic priorities are an explicit [`Priority::Computed`]
//!   variant, re-evaluated on every resolution.
//! * **Ordering**: Only `PartialOrd` is required; incomparable pairs are
//!   treated as equal by the sorting and aggregation layers.
//! * **Generics**: Numeric averaging for floats is implemented once over
//!   `num_traits::Float`.
//!
//! ## Key concepts
//!
//! * **Default priority**: The constant used when neither an explicit
//!   priority nor a payload-provided one is available (1 for numbers).
//! * **Averaging and blending**: Optional capabilities returning `None`
//!   for non-numeric priority types, surfaced as errors only when an
//!   average-mode operation actually needs them.
//!
//! ## Invariants
//!
//! * `resolve()` is side-effect free on `Fixed` values.
//! * `Computed` and `Delegated` priorities are re-read on every call.
//!
//! ## Non-goals
//!
//! * This module does not sort or aggregate; see the `rank` layer.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::rc::Rc;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::rc::Rc;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Debug, Formatter, Result as FmtResult};
use num_traits::Float;

// ============================================================================
// Priority Value Capability
// ============================================================================

/// Capability trait for types usable as priorities.
///
/// Smaller values compare as "first" by convention throughout the crate.
/// The arithmetic methods default to `None`, marking the type as ordered
/// but non-numeric; average-mode operations report
/// [`PrimapError::NonNumericAverage`](crate::primitives::errors::PrimapError::NonNumericAverage)
/// when they hit such a type.
pub trait PriorityValue: Clone + PartialOrd + Debug + 'static {
    /// The priority assigned when none is supplied or derivable.
    fn default_priority() -> Self;

    /// Arithmetic mean of a non-empty slice, or `None` for non-numeric types.
    fn average(values: &[Self]) -> Option<Self> {
        let _ = values;
        None
    }

    /// Midpoint of two priorities, or `None` for non-numeric types.
    fn blend(&self, other: &Self) -> Option<Self> {
        let _ = other;
        None
    }
}

// ============================================================================
// Numeric Implementations
// ============================================================================

/// Mean of a float slice, `None` on empty input.
fn float_average<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let n = T::from(values.len())?;
    let sum = values.iter().fold(T::zero(), |acc, v| acc + *v);
    Some(sum / n)
}

macro_rules! float_priority {
    ($($t:ty),* $(,)?) => {$(
        impl PriorityValue for $t {
            fn default_priority() -> Self {
                1.0
            }

            fn average(values: &[Self]) -> Option<Self> {
                float_average(values)
            }

            fn blend(&self, other: &Self) -> Option<Self> {
                Some((*self + *other) / 2.0)
            }
        }
    )*};
}

float_priority!(f32, f64);

macro_rules! integer_priority {
    ($($t:ty),* $(,)?) => {$(
        impl PriorityValue for $t {
            fn default_priority() -> Self {
                1
            }

            /// Integer mean truncates toward zero.
            fn average(values: &[Self]) -> Option<Self> {
                if values.is_empty() {
                    return None;
                }
                let sum: i128 = values.iter().map(|v| *v as i128).sum();
                Some((sum / values.len() as i128) as $t)
            }

            fn blend(&self, other: &Self) -> Option<Self> {
                Some(((*self as i128 + *other as i128) / 2) as $t)
            }
        }
    )*};
}

integer_priority!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// ============================================================================
// Ordered Non-numeric Implementations
// ============================================================================

// String priorities sort lexicographically; the empty string is the
// lowest value and doubles as the default.
impl PriorityValue for String {
    fn default_priority() -> Self {
        String::new()
    }
}

impl PriorityValue for &'static str {
    fn default_priority() -> Self {
        ""
    }
}

// ============================================================================
// Priority Sources
// ============================================================================

/// Types that carry a priority of their own.
///
/// Wrapping such a value through the `from_prioritized` constructors reads
/// its priority instead of falling back to the default constant. Blocks
/// implement this trait, so a block can serve as the priority source for
/// an item in another block.
pub trait HasPriority<P: PriorityValue> {
    /// The current priority of this value.
    fn priority(&self) -> P;
}

// ============================================================================
// Priority Representation
// ============================================================================

/// A priority as stored on an item: fixed, lazily computed, or delegated.
///
/// `Computed` priorities are re-evaluated on every [`resolve`](Priority::resolve),
/// so an item's effective priority can change over time. `Delegated`
/// priorities read through another priority-bearing value transitively.
#[derive(Clone)]
pub enum Priority<P: PriorityValue> {
    /// A plain value.
    Fixed(P),

    /// A zero-argument closure evaluated at each resolution.
    Computed(Rc<dyn Fn() -> P>),

    /// Another priority-bearing value, read through on each resolution.
    Delegated(Rc<dyn HasPriority<P>>),
}

impl<P: PriorityValue> Priority<P> {
    /// Wrap a closure as a lazily computed priority.
    pub fn computed(f: impl Fn() -> P + 'static) -> Self {
        Self::Computed(Rc::new(f))
    }

    /// Delegate to a shared priority-bearing value.
    pub fn delegated(source: Rc<dyn HasPriority<P>>) -> Self {
        Self::Delegated(source)
    }

    /// Resolve to a concrete priority value.
    pub fn resolve(&self) -> P {
        match self {
            Self::Fixed(value) => value.clone(),
            Self::Computed(f) => f(),
            Self::Delegated(source) => source.priority(),
        }
    }

    /// Whether this priority is a plain fixed value.
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }
}

impl<P: PriorityValue> From<P> for Priority<P> {
    fn from(value: P) -> Self {
        Self::Fixed(value)
    }
}

impl<P: PriorityValue> Debug for Priority<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
            Self::Delegated(_) => f.write_str("Delegated(..)"),
        }
    }
}
