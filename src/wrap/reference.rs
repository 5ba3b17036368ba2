//! Payload wrapper pairing a value with a priority.
//!
//! ## Purpose
//!
//! This module provides [`Reference`], the minimal wrapper that pairs an
//! arbitrary payload with a priority. References are the leaves of the
//! crate's data model: items wrap references, blocks wrap items.
//!
//! ## Design notes
//!
//! * **Type erasure**: Payloads are stored as `Rc<dyn Any>`, so a single
//!   block can hold values of different types; the concrete type name is
//!   recorded at wrap time for diagnostics and type filtering.
//! * **Shared payloads**: Cloning a reference clones the wrapper and
//!   shares the payload. This is the deliberate shallow-copy-of-wrapper /
//!   share-of-payload split that lets blocks copy items freely without
//!   duplicating user data.
//! * **Resolution order**: An explicit priority wins; a payload
//!   implementing [`HasPriority`] is read next; otherwise the type's
//!   default constant applies. Each case is a distinct constructor rather
//!   than a runtime probe.
//!
//! ## Invariants
//!
//! * The payload and its recorded type name never change after wrapping.
//! * A reference's priority is fixed; overriding happens at the item level.
//!
//! ## Non-goals
//!
//! * This module does not validate payload types; blocks do that against
//!   their expected type at construction.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::rc::Rc;
#[cfg(feature = "std")]
use std::rc::Rc;

// External dependencies
use core::any::{type_name, Any};
use core::fmt::{Debug, Formatter, Result as FmtResult};

// Internal dependencies
use crate::primitives::priority::{HasPriority, PriorityValue};

// ============================================================================
// Reference
// ============================================================================

/// Wraps an arbitrary payload and associates it with a priority.
pub struct Reference<P: PriorityValue> {
    /// Shared, type-erased payload.
    object: Rc<dyn Any>,

    /// Concrete type name recorded when the payload was wrapped.
    type_name: &'static str,

    /// Priority fixed at construction.
    priority: P,
}

impl<P: PriorityValue> Reference<P> {
    /// Wrap a payload with an explicit priority.
    pub fn new<T: Any>(object: T, priority: P) -> Self {
        Self {
            object: Rc::new(object),
            type_name: type_name::<T>(),
            priority,
        }
    }

    /// Wrap a payload with the default priority constant.
    pub fn with_default<T: Any>(object: T) -> Self {
        Self::new(object, P::default_priority())
    }

    /// Wrap a payload that exposes its own priority.
    pub fn from_prioritized<T: Any + HasPriority<P>>(object: T) -> Self {
        let priority = object.priority();
        Self::new(object, priority)
    }

    /// The shared payload.
    pub fn object(&self) -> &Rc<dyn Any> {
        &self.object
    }

    /// The payload downcast to a concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.object.downcast_ref()
    }

    /// Whether the payload is of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.object.is::<T>()
    }

    /// The priority fixed at construction.
    pub fn priority(&self) -> &P {
        &self.priority
    }

    /// The recorded name of the payload's concrete type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl<P: PriorityValue> Clone for Reference<P> {
    fn clone(&self) -> Self {
        Self {
            object: Rc::clone(&self.object),
            type_name: self.type_name,
            priority: self.priority.clone(),
        }
    }
}

impl<P: PriorityValue> Debug for Reference<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Reference")
            .field("type_name", &self.type_name)
            .field("priority", &self.priority)
            .finish()
    }
}

impl<P: PriorityValue> HasPriority<P> for Reference<P> {
    fn priority(&self) -> P {
        self.priority.clone()
    }
}
