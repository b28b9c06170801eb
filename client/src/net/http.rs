//! Authenticated JSON client for the bike API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`ApiError::Unavailable`] since the
//! API is only meaningful from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses are normalized into [`ApiError`] with the server's
//! message text. An auth failure wipes local storage and forces a full-page
//! navigation to `/` before the error is returned, so callers never need to
//! special-case expired sessions.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::{RuntimeConfig, join_url};
use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
}

/// REST client rooted at the configured API base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    #[must_use]
    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    /// Absolute URL for a resource path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// `GET` a JSON resource.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// unexpected body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::Get, path, None).await
    }

    /// `PATCH` a resource without a body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// unexpected body.
    pub async fn patch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::Patch, path, None).await
    }

    /// `POST` a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the body cannot be encoded, or on transport
    /// failure, non-success status, or an unexpected response body.
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.send(Method::Post, path, Some(body)).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.url(path);
            let mut builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Patch => Request::patch(&url),
            }
            .header("Accept", "application/json")
            .header("Content-Type", "application/json");
            if let Some(value) = authorization_header(crate::util::storage::load_token().as_deref()) {
                builder = builder.header("Authorization", &value);
            }
            let request = match body {
                Some(body) => builder.json(&body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Transport(e.to_string()))?;

            let resp = request.send().await.map_err(|e| {
                log::error!("{method:?} {url} failed: {e}");
                ApiError::Transport(e.to_string())
            })?;
            if !resp.ok() {
                let status = resp.status();
                let text = resp.text().await.unwrap_or_default();
                let err = classify_failure(status, &text);
                log::error!("{method:?} {url} returned {status}: {err}");
                if err.is_unauthorized() {
                    reset_client_state();
                }
                return Err(err);
            }
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }
}

/// `Authorization` header value for a stored token, if there is one.
#[cfg(any(test, feature = "hydrate"))]
fn authorization_header(token: Option<&str>) -> Option<String> {
    let token = token?.trim();
    (!token.is_empty()).then(|| format!("Bearer {token}"))
}

/// Statuses the API uses for a rejected or missing bearer token.
#[cfg(any(test, feature = "hydrate"))]
fn is_auth_failure(status: u16) -> bool {
    matches!(status, 401 | 403)
}

/// Human-readable message from an error response body.
///
/// The API answers failures with a bare JSON string; object bodies with a
/// `message` or `error` field and plain text are accepted too.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    let parsed = match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(text)) => Some(text),
        Ok(serde_json::Value::Object(map)) => ["message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(serde_json::Value::as_str))
            .map(str::to_owned),
        Ok(_) => None,
        Err(_) => (!trimmed.is_empty()).then(|| trimmed.to_owned()),
    };
    parsed
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| format!("request failed: {status}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_failure(status: u16, body: &str) -> ApiError {
    let message = error_message(status, body);
    if is_auth_failure(status) {
        ApiError::Unauthorized { status, message }
    } else {
        ApiError::Status { status, message }
    }
}

/// Drop every trace of the session and hard-navigate to the landing page.
#[cfg(feature = "hydrate")]
fn reset_client_state() {
    crate::util::storage::clear_all();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
}
