//! Application state held in reactive signals.
//!
//! DESIGN
//! ======
//! Session identity and the bike cache are plain structs; the root component
//! wraps each in an `RwSignal` and hands them out through [`AppContext`].

pub mod bikes;
pub mod session;

use leptos::prelude::*;

use self::bikes::BikesState;
use self::session::SessionState;
use crate::config::ConfigState;
use crate::net::http::ApiClient;

/// Application-scoped state, created once by the root component.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: RwSignal<SessionState>,
    pub bikes: RwSignal<BikesState>,
    pub config: RwSignal<ConfigState>,
}

impl AppContext {
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(SessionState::restoring()),
            bikes: RwSignal::new(BikesState::default()),
            config: RwSignal::new(ConfigState::default()),
        }
    }

    /// API client for the loaded configuration, without tracking.
    #[must_use]
    pub fn api(&self) -> Option<ApiClient> {
        self.config
            .with_untracked(|c| c.config.as_ref().map(ApiClient::from_config))
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
