//! Login and registration endpoints.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::http::ApiClient;
use super::types::{Credentials, LoginRequest, RegisterRequest};
use crate::error::ApiError;

pub const LOGIN_PATH: &str = "/users/login";
pub const REGISTER_PATH: &str = "/users/register";

/// Exchange a username and password for a bearer token.
///
/// # Errors
///
/// Returns [`ApiError`] if the credentials are rejected or the request fails.
pub async fn login(client: &ApiClient, body: &LoginRequest) -> Result<Credentials, ApiError> {
    client.post(LOGIN_PATH, body).await
}

/// Create an account and receive a bearer token for it.
///
/// # Errors
///
/// Returns [`ApiError`] if the username is taken or the request fails.
pub async fn register(client: &ApiClient, body: &RegisterRequest) -> Result<Credentials, ApiError> {
    client.post(REGISTER_PATH, body).await
}
