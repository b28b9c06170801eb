//! Route guards shared by the public and private pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page is public: a signed-in visitor is sent on to the dashboard.
//! The dashboard is private: once the session has finished restoring, a
//! visitor without one is sent back to the login page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

pub const LOGIN_ROUTE: &str = "/";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && state.user.is_none()
}

pub fn should_redirect_authed(state: &SessionState) -> bool {
    !state.loading && state.user.is_some()
}

/// Redirect to the login page whenever the session has loaded empty.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(should_redirect_unauth) {
            navigate(LOGIN_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Redirect to the dashboard whenever a session is present.
pub fn install_authed_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(should_redirect_authed) {
            navigate(DASHBOARD_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
