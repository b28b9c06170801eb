//! Bearer token decoding.
//!
//! The API signs tokens server-side; the client only reads the claims segment
//! to learn who is logged in. No signature verification happens here.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::error::TokenError;
use crate::net::types::User;

/// Decode the claims segment of a JWT into a [`User`].
///
/// # Errors
///
/// Returns [`TokenError`] if the token does not have three segments, the
/// payload is not base64url, or the claims do not describe a user.
pub fn decode_user(token: &str) -> Result<User, TokenError> {
    let mut segments = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(TokenError::Malformed);
    };
    if payload.is_empty() {
        return Err(TokenError::Malformed);
    }
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Whether `user`'s token expiry lies at or before `now_secs`.
///
/// Tokens without an `exp` claim never expire on the client.
#[must_use]
pub fn is_expired(user: &User, now_secs: u64) -> bool {
    user.exp.is_some_and(|exp| exp <= now_secs)
}

/// Decode `token` and reject it if already expired at `now_secs`.
///
/// # Errors
///
/// Returns [`TokenError::Expired`] for stale tokens, otherwise whatever
/// [`decode_user`] reports.
pub fn decode_live_user(token: &str, now_secs: u64) -> Result<User, TokenError> {
    let user = decode_user(token)?;
    if is_expired(&user, now_secs) {
        return Err(TokenError::Expired);
    }
    Ok(user)
}

/// Current wall-clock time in whole seconds.
pub fn now_secs() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let secs = (js_sys::Date::now() / 1000.0).max(0.0) as u64;
        secs
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs())
    }
}
