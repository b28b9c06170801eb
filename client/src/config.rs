//! Runtime configuration document served at `/config.json`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The same WASM bundle runs against different API hosts, so the API base URL
//! and map key are fetched once after hydration instead of being compiled in.
//! The host binary serializes this exact type.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Path the host serves the configuration document from.
pub const CONFIG_PATH: &str = "/config.json";

/// Deployment flavour reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppEnv {
    #[default]
    Development,
    Production,
}

/// Configuration the client needs before it can talk to the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    #[serde(default)]
    pub app_env: AppEnv,
    pub base_url: String,
    pub google_map_api_key: String,
}

/// Loading state of the configuration document.
#[derive(Clone, Debug, Default)]
pub struct ConfigState {
    pub config: Option<RuntimeConfig>,
    pub error: Option<String>,
}

impl ConfigState {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.config.is_some()
    }
}

/// Join a base URL and a resource path with exactly one slash.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return base.to_owned();
    }
    format!("{base}/{path}")
}

/// Fetch the configuration document from the page's origin.
///
/// # Errors
///
/// Returns an error if the document cannot be fetched or parsed.
#[allow(clippy::unused_async)]
pub async fn fetch_runtime_config() -> Result<RuntimeConfig, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CONFIG_PATH)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status {
                status: resp.status(),
                message: format!("config request failed: {}", resp.status()),
            });
        }
        resp.json::<RuntimeConfig>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
