#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

use std::process::ExitCode;

use crate::config::HostConfig;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match HostConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(app_env = ?config.app_env, api = %config.api_base_url, "configuration loaded");

    let state = state::AppState::new(config.runtime_config());
    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router setup failed");
            return ExitCode::FAILURE;
        }
    };

    let port = config.port;
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %port, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%port, "shared-bike listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
