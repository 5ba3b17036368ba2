//! Prioritized item wrapper.
//!
//! ## Purpose
//!
//! This module provides [`Item`], which links a [`Reference`] to an
//! independently overridable priority. Items are what blocks collect,
//! validate, sort, and query.
//!
//! ## Design notes
//!
//! * **Override order**: An item's own priority takes precedence over its
//!   reference's priority, which in turn defaulted per the reference's
//!   construction. Every constructor makes the chosen source explicit.
//! * **Lazy priorities**: An item priority can be a [`Priority::Computed`]
//!   closure, re-evaluated on every read, or a [`Priority::Delegated`]
//!   read-through to another priority-bearing value.
//! * **Copy semantics**: `Clone` produces a fresh wrapper sharing the
//!   payload, mirroring the reference's own clone behavior. Blocks rely on
//!   this to blend priorities into copies without mutating caller-owned
//!   items.
//!
//! ## Invariants
//!
//! * The reference is owned exclusively by its item; it is never aliased
//!   across items (cloning clones the reference wrapper too).
//!
//! ## Non-goals
//!
//! * This module does not enforce payload type constraints; blocks do.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::rc::Rc;
#[cfg(feature = "std")]
use std::rc::Rc;

// External dependencies
use core::any::Any;

// Internal dependencies
use crate::primitives::priority::{HasPriority, Priority, PriorityValue};
use crate::wrap::reference::Reference;

// ============================================================================
// Item
// ============================================================================

/// A reference plus an independently overridable priority.
#[derive(Debug, Clone)]
pub struct Item<P: PriorityValue> {
    /// The wrapped payload and its own priority.
    reference: Reference<P>,

    /// The effective priority, overriding the reference's.
    priority: Priority<P>,
}

impl<P: PriorityValue> Item<P> {
    /// Build an item from a reference with an explicit priority override.
    pub fn new(reference: Reference<P>, priority: impl Into<Priority<P>>) -> Self {
        Self {
            reference,
            priority: priority.into(),
        }
    }

    /// Build an item that inherits its reference's priority.
    pub fn from_reference(reference: Reference<P>) -> Self {
        let priority = Priority::Fixed(reference.priority().clone());
        Self {
            reference,
            priority,
        }
    }

    /// Wrap a raw payload with an explicit priority.
    pub fn with_priority<T: Any>(object: T, priority: P) -> Self {
        Self::new(Reference::new(object, priority.clone()), priority)
    }

    /// Wrap a raw payload with the default priority constant.
    pub fn from_value<T: Any>(object: T) -> Self {
        Self::from_reference(Reference::with_default(object))
    }

    /// Wrap a payload that exposes its own priority.
    pub fn from_prioritized<T: Any + HasPriority<P>>(object: T) -> Self {
        Self::from_reference(Reference::from_prioritized(object))
    }

    /// Wrap a raw payload with a lazily computed priority.
    pub fn computed<T: Any>(object: T, f: impl Fn() -> P + 'static) -> Self {
        Self {
            reference: Reference::with_default(object),
            priority: Priority::computed(f),
        }
    }

    /// Resolve the item's effective priority.
    pub fn priority(&self) -> P {
        self.priority.resolve()
    }

    /// Replace the stored priority (fixed, computed, or delegated).
    pub fn set_priority(&mut self, priority: impl Into<Priority<P>>) {
        self.priority = priority.into();
    }

    /// The underlying reference.
    pub fn reference(&self) -> &Reference<P> {
        &self.reference
    }

    /// The shared payload.
    pub fn object(&self) -> &Rc<dyn Any> {
        self.reference.object()
    }

    /// The payload downcast to a concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.reference.downcast_ref()
    }

    /// Whether the payload is of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.reference.is::<T>()
    }

    /// The recorded name of the payload's concrete type.
    pub fn type_name(&self) -> &'static str {
        self.reference.type_name()
    }
}

impl<P: PriorityValue> From<Reference<P>> for Item<P> {
    fn from(reference: Reference<P>) -> Self {
        Self::from_reference(reference)
    }
}

impl<P: PriorityValue> HasPriority<P> for Item<P> {
    fn priority(&self) -> P {
        self.priority.resolve()
    }
}
