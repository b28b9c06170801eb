//! Client-side error types.
//!
//! ERROR HANDLING
//! ==============
//! Every REST failure is folded into [`ApiError`] so pages only ever render a
//! message string. Token decoding has its own [`TokenError`] because a bad
//! token is a session concern, not a transport one.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Normalized failure of an API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server rejected the bearer token. Local state has already been reset.
    #[error("{message}")]
    Unauthorized { status: u16, message: String },
    /// Any other non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),
    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// Called outside a browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message suitable for an inline alert.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

/// Failure to read identity claims out of a bearer token.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token must have three dot-separated segments")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token claims are not valid: {0}")]
    Claims(#[from] serde_json::Error),
    #[error("token expired")]
    Expired,
}

/// Failure to bring up the map provider.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("map script url is invalid: {0}")]
    ScriptUrl(String),
    #[error("failed to load script {0}")]
    ScriptLoad(String),
    #[error("map library is not available")]
    LibraryMissing,
}
