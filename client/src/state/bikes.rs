//! Client-side cache of the bike list.
//!
//! DESIGN
//! ======
//! The list is a server-owned snapshot. It is written by the initial fetch
//! and by rent/return responses, each of which swaps in the server's copy of
//! one bike. At most one entry per bike id is ever held.

#[cfg(test)]
#[path = "bikes_test.rs"]
mod bikes_test;

use std::collections::HashMap;

use crate::error::ApiError;
use crate::net::types::{Bike, BikeAction};

/// Lifecycle of the bike list query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryStatus {
    Idle,
    Loading,
    Error,
    Success,
}

/// Cached bike list plus fetch/mutation bookkeeping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BikesState {
    /// `None` until the first successful fetch.
    pub items: Option<Vec<Bike>>,
    pub loading: bool,
    /// Mutation in flight, if any.
    pub pending: Option<(i64, BikeAction)>,
    pub error: Option<String>,
}

impl BikesState {
    #[must_use]
    pub fn status(&self) -> QueryStatus {
        if self.loading {
            QueryStatus::Loading
        } else if self.items.is_some() {
            QueryStatus::Success
        } else if self.error.is_some() {
            QueryStatus::Error
        } else {
            QueryStatus::Idle
        }
    }

    /// Whether nothing has been fetched or attempted yet.
    #[must_use]
    pub fn needs_fetch(&self) -> bool {
        self.status() == QueryStatus::Idle
    }

    /// Cached bikes, empty while absent.
    #[must_use]
    pub fn bikes(&self) -> &[Bike] {
        self.items.as_deref().unwrap_or(&[])
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<Bike>, ApiError>) {
        self.loading = false;
        match result {
            Ok(bikes) => self.items = Some(dedupe_by_id(bikes)),
            Err(e) => self.error = Some(e.message()),
        }
    }

    /// Mark a mutation as in flight. Returns `false` if another one already is.
    pub fn begin_action(&mut self, bike_id: i64, action: BikeAction) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some((bike_id, action));
        self.error = None;
        true
    }

    pub fn finish_action(&mut self, result: Result<Bike, ApiError>) {
        self.pending = None;
        match result {
            Ok(bike) => {
                self.replace_bike(bike);
            }
            Err(e) => self.error = Some(e.message()),
        }
    }

    /// Swap in the server's copy of a bike.
    ///
    /// A no-op returning `false` while the list is absent. A bike missing from
    /// a present list is appended.
    pub fn replace_bike(&mut self, bike: Bike) -> bool {
        let Some(items) = self.items.as_mut() else {
            return false;
        };
        match items.iter_mut().find(|b| b.id == bike.id) {
            Some(slot) => *slot = bike,
            None => items.push(bike),
        }
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Collapse duplicate ids, keeping the first position and the last value.
fn dedupe_by_id(bikes: Vec<Bike>) -> Vec<Bike> {
    let mut index_by_id: HashMap<i64, usize> = HashMap::with_capacity(bikes.len());
    let mut out: Vec<Bike> = Vec::with_capacity(bikes.len());
    for bike in bikes {
        if let Some(&idx) = index_by_id.get(&bike.id) {
            out[idx] = bike;
        } else {
            index_by_id.insert(bike.id, out.len());
            out.push(bike);
        }
    }
    out
}
