//! Session store for the signed-in browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity is derived from the stored bearer token and lives only in
//! memory. Route guards wait for `loading` to clear before redirecting, so
//! SSR output and the first hydrated frame agree.
//!
//! The pure transitions live on [`SessionState`]; the free functions pair
//! them with `localStorage` writes.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::error::TokenError;
use crate::net::types::User;
use crate::util::storage;
use crate::util::token::{decode_live_user, decode_user, now_secs};

/// Current identity plus whether the stored token has been inspected yet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    /// State before the stored token has been read.
    #[must_use]
    pub fn restoring() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Adopt the identity in a stored token.
    ///
    /// Returns `true` when the token was present but unusable (malformed or
    /// expired) and should be discarded by the caller.
    pub fn restore_from(&mut self, token: Option<&str>, now_secs: u64) -> bool {
        self.loading = false;
        let Some(token) = token else {
            self.user = None;
            return false;
        };
        match decode_live_user(token, now_secs) {
            Ok(user) => {
                self.user = Some(user);
                false
            }
            Err(e) => {
                log::warn!("discarding stored token: {e}");
                self.user = None;
                true
            }
        }
    }

    /// Adopt the identity in a freshly issued token.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError`] if the token cannot be decoded; the session is
    /// left signed out in that case.
    pub fn sign_in_with(&mut self, token: &str) -> Result<&User, TokenError> {
        self.loading = false;
        match decode_user(token) {
            Ok(user) => Ok(self.user.insert(user)),
            Err(e) => {
                self.user = None;
                Err(e)
            }
        }
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
    }
}

/// Read the stored token into `session`, dropping it if unusable.
pub fn restore(session: RwSignal<SessionState>) {
    let token = storage::load_token();
    let mut discard = false;
    session.update(|s| discard = s.restore_from(token.as_deref(), now_secs()));
    if discard {
        storage::remove_token();
    }
}

/// Persist a token returned by login/register and adopt its identity.
///
/// # Errors
///
/// Returns [`TokenError`] if the token cannot be decoded; nothing is stored.
pub fn establish(session: RwSignal<SessionState>, token: &str) -> Result<User, TokenError> {
    let mut outcome = Err(TokenError::Malformed);
    session.update(|s| outcome = s.sign_in_with(token).cloned());
    match outcome {
        Ok(user) => {
            storage::save_token(token);
            log::debug!("signed in as {}", user.username);
            Ok(user)
        }
        Err(e) => {
            storage::remove_token();
            Err(e)
        }
    }
}

/// Forget the token and the identity.
pub fn end(session: RwSignal<SessionState>) {
    storage::remove_token();
    session.update(SessionState::sign_out);
}
