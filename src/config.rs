//! Host configuration parsed from environment variables.
//!
//! Required:
//! - `API_BASE_URL`: bike API root handed to the browser (trailing `/` trimmed)
//! - `GOOGLE_MAPS_API_KEY`: key for the Maps JavaScript API
//!
//! Optional:
//! - `APP_ENV`: `development` (default) or `production`
//! - `PORT`: listen port, default 3000

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::config::{AppEnv, RuntimeConfig};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is required")]
    Missing { var: &'static str },
    #[error("{var} has invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub api_base_url: String,
    pub google_maps_api_key: String,
    pub app_env: AppEnv,
    pub port: u16,
}

impl HostConfig {
    /// Build typed host config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or a value
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed host config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required key is missing or a value
    /// cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url = required(&lookup, "API_BASE_URL")?.trim_end_matches('/').to_owned();
        let google_maps_api_key = required(&lookup, "GOOGLE_MAPS_API_KEY")?;
        let app_env = parse_app_env(lookup("APP_ENV").as_deref())?;
        let port = match lookup("PORT").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw.clone() })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { api_base_url, google_maps_api_key, app_env, port })
    }

    /// Document served at `/config.json`.
    #[must_use]
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            app_env: self.app_env,
            base_url: self.api_base_url.clone(),
            google_map_api_key: self.google_maps_api_key.clone(),
        }
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> Result<String, ConfigError> {
    lookup(var)
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing { var })
}

fn parse_app_env(raw: Option<&str>) -> Result<AppEnv, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or("development") {
        "development" => Ok(AppEnv::Development),
        "production" => Ok(AppEnv::Production),
        other => Err(ConfigError::Invalid { var: "APP_ENV", value: other.to_owned() }),
    }
}
