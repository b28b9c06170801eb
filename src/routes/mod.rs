//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the runtime config and health endpoints together
//! with Leptos SSR rendering under a single Axum router. The WASM bundle is
//! served from the site root's `/pkg` directory.

pub mod config;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Plain HTTP routes that do not involve Leptos.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(client::config::CONFIG_PATH, get(config::runtime_config))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full host router: config + health endpoints, Leptos SSR and `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
