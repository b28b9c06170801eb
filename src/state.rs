//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the runtime configuration document, built once at startup.

use std::sync::Arc;

use client::config::RuntimeConfig;

#[derive(Clone)]
pub struct AppState {
    pub runtime: Arc<RuntimeConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(runtime: RuntimeConfig) -> Self {
        Self { runtime: Arc::new(runtime) }
    }
}
