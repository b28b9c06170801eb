//! Runtime configuration endpoint.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use client::config::RuntimeConfig;

use crate::state::AppState;

/// `GET /config.json`: the document the browser bundle boots from.
pub async fn runtime_config(State(state): State<AppState>) -> impl IntoResponse {
    let body: RuntimeConfig = (*state.runtime).clone();
    ([(header::CACHE_CONTROL, "no-store")], Json(body))
}
