//! One-shot loading of the map provider scripts.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Google Maps key arrives with the runtime configuration, so the
//! provider script is injected after hydration instead of being part of the
//! SSR shell. Both scripts are added at most once per page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use crate::error::MapError;

const MAPS_SCRIPT_BASE: &str = "https://maps.googleapis.com/maps/api/js";

/// UMD build of `@googlemaps/markerclusterer`; exposes `markerClusterer`.
pub const CLUSTERER_SCRIPT_URL: &str = "https://unpkg.com/@googlemaps/markerclusterer/dist/index.min.js";

/// Global object paths that prove a script already ran.
pub const MAPS_GLOBAL: &[&str] = &["google", "maps", "Map"];
pub const CLUSTERER_GLOBAL: &[&str] = &["markerClusterer", "MarkerClusterer"];

/// Provider script URL for an API key.
///
/// # Errors
///
/// Returns [`MapError::ScriptUrl`] if the URL cannot be assembled.
pub fn maps_script_url(api_key: &str) -> Result<String, MapError> {
    let url = url::Url::parse_with_params(MAPS_SCRIPT_BASE, &[("key", api_key), ("v", "weekly")])
        .map_err(|e| MapError::ScriptUrl(e.to_string()))?;
    Ok(url.into())
}

/// Load the map provider and the clusterer, in that order.
///
/// # Errors
///
/// Returns [`MapError`] if either script fails to load.
pub async fn load_map_library(api_key: &str) -> Result<(), MapError> {
    let maps_url = maps_script_url(api_key)?;
    load_script(&maps_url, MAPS_GLOBAL).await?;
    load_script(CLUSTERER_SCRIPT_URL, CLUSTERER_GLOBAL).await
}

/// Inject a `<script>` and wait for it to load.
///
/// Resolves immediately when `global` already resolves on `window`. An
/// existing tag with the same `src` is awaited instead of duplicated.
///
/// # Errors
///
/// Returns [`MapError::ScriptLoad`] if the script fires `error`.
pub async fn load_script(src: &str, global: &[&str]) -> Result<(), MapError> {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use futures::channel::oneshot;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        if global_exists(global) {
            return Ok(());
        }
        let load_err = || MapError::ScriptLoad(src.to_owned());
        let document = web_sys::window().and_then(|w| w.document()).ok_or_else(load_err)?;

        let selector = format!("script[src=\"{src}\"]");
        let existing = document.query_selector(&selector).ok().flatten();
        let script: web_sys::HtmlScriptElement = match existing {
            Some(el) => el.dyn_into().map_err(|_| load_err())?,
            None => {
                let el: web_sys::HtmlScriptElement =
                    document.create_element("script").map_err(|_| load_err())?.dyn_into().map_err(|_| load_err())?;
                el.set_src(src);
                el.set_async(true);
                let head = document.head().ok_or_else(load_err)?;
                head.append_child(&el).map_err(|_| load_err())?;
                log::debug!("injected script {src}");
                el
            }
        };

        let (tx, rx) = oneshot::channel::<bool>();
        let tx = Rc::new(RefCell::new(Some(tx)));
        let on_load = {
            let tx = Rc::clone(&tx);
            Closure::<dyn FnMut()>::new(move || {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(true);
                }
            })
        };
        let on_error = {
            let tx = Rc::clone(&tx);
            Closure::<dyn FnMut()>::new(move || {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(false);
                }
            })
        };
        script.set_onload(Some(on_load.as_ref().unchecked_ref()));
        script.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        // The tag may have finished between the first check and the listeners.
        if global_exists(global) {
            script.set_onload(None);
            script.set_onerror(None);
            return Ok(());
        }

        let loaded = rx.await.unwrap_or(false);
        script.set_onload(None);
        script.set_onerror(None);
        if loaded {
            Ok(())
        } else {
            log::error!("script failed to load: {src}");
            Err(load_err())
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (src, global);
        Err(MapError::LibraryMissing)
    }
}

/// Whether `window.<path[0]>.<path[1]>...` resolves to a defined value.
#[cfg(feature = "hydrate")]
pub(crate) fn global_exists(path: &[&str]) -> bool {
    global_lookup(path).is_some()
}

#[cfg(feature = "hydrate")]
pub(crate) fn global_lookup(path: &[&str]) -> Option<wasm_bindgen::JsValue> {
    let mut current: wasm_bindgen::JsValue = js_sys::global().into();
    for key in path {
        let next = js_sys::Reflect::get(&current, &wasm_bindgen::JsValue::from_str(key)).ok()?;
        if next.is_undefined() || next.is_null() {
            return None;
        }
        current = next;
    }
    Some(current)
}
