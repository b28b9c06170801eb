//! Marker planning and reconciliation.
//!
//! DESIGN
//! ======
//! Planning is pure: bikes plus the signed-in user's id become a list of
//! [`MarkerSpec`]s. Placement goes through [`MapSurface`] so the browser map
//! and test doubles share the same reconcile path.
//!
//! A user who holds a bike sees every other bike as unrentable and only
//! their own bike offers an action (return). Otherwise available bikes offer
//! rent and rented bikes show a disabled button.

#[cfg(test)]
#[path = "markers_test.rs"]
mod markers_test;

use super::actions::ActionRegistry;
use super::popup::{self, Affordance};
use crate::net::types::{Bike, BikeAction, LatLng, held_bike};

/// SVG path of the map pin, anchored at its tip.
pub const PIN_PATH: &str = "M 0,0 C -2,-20 -10,-22 -10,-30 A 10,10 0 1,1 10,-30 C 10,-22 2,-20 0,0 z M -2,-30 a 2,2 0 1,1 4,0 2,2 0 1,1 -4,0";

/// Pin colour variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerIcon {
    Available,
    Rented,
}

impl MarkerIcon {
    #[must_use]
    pub fn fill_color(self) -> &'static str {
        match self {
            Self::Available => "#2ecc71",
            Self::Rented => "#34495e",
        }
    }
}

/// Everything needed to place one bike's marker.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerSpec {
    pub bike_id: i64,
    pub title: String,
    pub position: LatLng,
    pub icon: MarkerIcon,
    pub affordance: Affordance,
    pub popup_html: String,
}

impl MarkerSpec {
    fn new(bike: &Bike, position: LatLng, icon: MarkerIcon, affordance: Affordance) -> Self {
        let title = if bike.name.trim().is_empty() { format!("Bike {}", bike.id) } else { bike.name.clone() };
        Self {
            bike_id: bike.id,
            title,
            position,
            icon,
            affordance,
            popup_html: popup::render_popup(bike, affordance),
        }
    }

    #[must_use]
    pub fn button_id(&self) -> String {
        popup::button_id(self.bike_id)
    }

    #[must_use]
    pub fn action(&self) -> Option<BikeAction> {
        self.affordance.action()
    }
}

/// A map that can host bike markers.
pub trait MapSurface {
    /// Handle that keeps a placed marker alive; dropping it detaches the marker.
    type Marker;

    fn place(&self, spec: &MarkerSpec, actions: &ActionRegistry) -> Self::Marker;
}

/// Marker specs for `bikes` as seen by `user_id`, skipping unplaceable bikes.
#[must_use]
pub fn plan_markers(bikes: &[Bike], user_id: Option<i64>) -> Vec<MarkerSpec> {
    let held = user_id.and_then(|uid| held_bike(bikes, uid));
    if let Some(own) = held.filter(|b| b.position().is_none()) {
        log::warn!("rented bike {} has invalid coordinates; it cannot be returned from the map", own.id);
    }
    bikes
        .iter()
        .filter_map(|bike| {
            let Some(position) = bike.position() else {
                log::warn!("skipping bike {} with invalid coordinates ({:?}, {:?})", bike.id, bike.lat, bike.long);
                return None;
            };
            let (icon, affordance) = match held {
                Some(own) if own.id == bike.id => (MarkerIcon::Available, Affordance::Return),
                Some(_) => (MarkerIcon::Rented, Affordance::RentDisabled),
                None if bike.is_available() => (MarkerIcon::Available, Affordance::Rent),
                None => (MarkerIcon::Rented, Affordance::RentDisabled),
            };
            Some(MarkerSpec::new(bike, position, icon, affordance))
        })
        .collect()
}

/// Place a fresh marker set on `map`, rebuilding the action table to match.
///
/// Returns no markers while the map is not bound.
pub fn reconcile<M: MapSurface>(
    map: Option<&M>,
    bikes: &[Bike],
    user_id: Option<i64>,
    actions: &ActionRegistry,
) -> Vec<M::Marker> {
    actions.clear();
    let Some(map) = map else {
        return Vec::new();
    };
    let specs = plan_markers(bikes, user_id);
    log::debug!("placing {} bike markers", specs.len());
    specs
        .iter()
        .map(|spec| {
            if let Some(action) = spec.action() {
                actions.register(spec.bike_id, action);
            }
            map.place(spec, actions)
        })
        .collect()
}
