//! Holder for an imperative map instance that is created once.

#[cfg(test)]
#[path = "slot_test.rs"]
mod slot_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Shared, initially empty cell for a map widget.
///
/// The widget is bound the first time its DOM node exists; later bind
/// attempts are ignored.
pub struct MapSlot<M> {
    inner: Rc<RefCell<Option<M>>>,
}

impl<M> MapSlot<M> {
    #[must_use]
    pub fn new() -> Self {
        Self { inner: Rc::new(RefCell::new(None)) }
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.inner.borrow().is_some()
    }

    /// Create the widget with `create` unless one is already bound.
    ///
    /// Returns `true` only for the call that performed the bind. A `create`
    /// that yields `None` leaves the slot empty.
    pub fn bind_with(&self, create: impl FnOnce() -> Option<M>) -> bool {
        if self.is_bound() {
            return false;
        }
        let Some(map) = create() else {
            return false;
        };
        *self.inner.borrow_mut() = Some(map);
        true
    }

    /// Run `f` against the bound widget, or against `None` while unbound.
    pub fn with<R>(&self, f: impl FnOnce(Option<&M>) -> R) -> R {
        f(self.inner.borrow().as_ref())
    }
}

impl<M> Clone for MapSlot<M> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<M> Default for MapSlot<M> {
    fn default() -> Self {
        Self::new()
    }
}
