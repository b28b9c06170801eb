//! Bike map: provider loading, widget binding and marker reconciliation.
//!
//! ARCHITECTURE
//! ============
//! Three effects drive the map once the dashboard mounts:
//!
//! 1. Load the provider scripts as soon as the runtime config has a key.
//! 2. Bind the widget to the map node the first time both exist.
//! 3. Re-place markers whenever the bike list, the user, or map readiness
//!    changes. The previous marker set is dropped (and so detached) first.
//!
//! Everything except the provider bindings is plain Rust and runs under test.

pub mod actions;
#[cfg(feature = "hydrate")]
pub mod google;
pub mod loader;
pub mod markers;
pub mod popup;
pub mod slot;

use leptos::prelude::*;

use crate::net::types::LatLng;
use crate::state::AppContext;

/// Initial map center.
pub const DEFAULT_CENTER: LatLng = LatLng { lat: 50.119_504, lng: 8.638_137 };
pub const DEFAULT_ZOOM: u8 = 8;

/// Attach the bike map to `map_ref` for the lifetime of the calling component.
pub fn install_bike_map(ctx: AppContext, map_ref: NodeRef<leptos::html::Div>) {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::{Cell, RefCell};
        use std::rc::Rc;

        use self::actions::ActionRegistry;
        use self::google::{GoogleMap, PlacedMarker};
        use self::slot::MapSlot;
        use crate::state::session::SessionState;

        let library_ready = RwSignal::new(false);
        let map_ready = RwSignal::new(false);
        let slot = MapSlot::<GoogleMap>::new();
        let placed: Rc<RefCell<Vec<PlacedMarker>>> = Rc::default();
        let actions = ActionRegistry::new(move |bike_id, action| {
            crate::queries::run_bike_action(ctx, bike_id, action);
        });

        let requested = Rc::new(Cell::new(false));
        Effect::new(move || {
            let Some(key) = ctx.config.with(|c| c.config.as_ref().map(|c| c.google_map_api_key.clone())) else {
                return;
            };
            if requested.replace(true) {
                return;
            }
            leptos::task::spawn_local(async move {
                match loader::load_map_library(&key).await {
                    Ok(()) => library_ready.set(true),
                    Err(e) => {
                        log::error!("map library failed to load: {e}");
                        ctx.bikes.update(|b| b.error = Some(e.to_string()));
                    }
                }
            });
        });

        {
            let slot = slot.clone();
            Effect::new(move || {
                if !library_ready.get() {
                    return;
                }
                let Some(node) = map_ref.get() else {
                    return;
                };
                let bound = slot.bind_with(|| {
                    GoogleMap::mount(&node)
                        .map_err(|e| log::warn!("map mount skipped: {e}"))
                        .ok()
                });
                if bound {
                    map_ready.set(true);
                }
            });
        }

        let items = Memo::new(move |_| ctx.bikes.with(|b| b.items.clone()));
        let user_id = Memo::new(move |_| ctx.session.with(SessionState::user_id));
        Effect::new(move || {
            let _ = map_ready.get();
            let user_id = user_id.get();
            items.with(|bikes| {
                let bikes = bikes.as_deref().unwrap_or(&[]);
                placed.borrow_mut().clear();
                let fresh = slot.with(|map| {
                    if let Some(map) = map {
                        map.clear_clusters();
                    }
                    let fresh = markers::reconcile(map, bikes, user_id, &actions);
                    if let Some(map) = map {
                        map.render_clusters();
                    }
                    fresh
                });
                *placed.borrow_mut() = fresh;
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ctx, map_ref);
    }
}
