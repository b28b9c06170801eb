//! Browser `localStorage` helpers for the bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP client, session store and route guards all read the same key.
//! Keeping the web-sys glue here means SSR builds see an empty store instead
//! of failing.

/// Fixed storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "shared_bike_token";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored bearer token, ignoring empty values.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(TOKEN_KEY).ok().flatten()?;
        (!raw.trim().is_empty()).then_some(raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the bearer token.
pub fn save_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the bearer token only.
pub fn remove_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// Wipe every key this origin stored.
pub fn clear_all() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.clear();
        }
    }
}
