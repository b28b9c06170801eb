//! Bike actions reachable from marker popups.
//!
//! Popup buttons live in provider-owned DOM, so the click handler only knows
//! a bike id. The registry maps that id to the typed action the marker plan
//! allowed and forwards it to a single handler.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::net::types::BikeAction;

type Handler = Rc<dyn Fn(i64, BikeAction)>;

/// Bike id to action table with one dispatch target.
#[derive(Clone)]
pub struct ActionRegistry {
    handler: Handler,
    bound: Rc<RefCell<HashMap<i64, BikeAction>>>,
}

impl ActionRegistry {
    pub fn new(handler: impl Fn(i64, BikeAction) + 'static) -> Self {
        Self { handler: Rc::new(handler), bound: Rc::default() }
    }

    /// Allow `action` for `bike_id`, replacing any earlier entry.
    pub fn register(&self, bike_id: i64, action: BikeAction) {
        self.bound.borrow_mut().insert(bike_id, action);
    }

    pub fn clear(&self) {
        self.bound.borrow_mut().clear();
    }

    #[must_use]
    pub fn registered(&self, bike_id: i64) -> Option<BikeAction> {
        self.bound.borrow().get(&bike_id).copied()
    }

    /// Run the action registered for `bike_id`. Returns `false` if none is.
    pub fn dispatch(&self, bike_id: i64) -> bool {
        // Release the borrow before calling out; the handler may re-register.
        let Some(action) = self.registered(bike_id) else {
            return false;
        };
        (self.handler)(bike_id, action);
        true
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry").field("bound", &self.bound.borrow()).finish_non_exhaustive()
    }
}
