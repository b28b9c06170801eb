//! Google Maps bindings and the browser [`MapSurface`].
//!
//! Only `Map`, `Marker`, `InfoWindow` and the marker clusterer are bound.
//! Option objects are plain JSON, so they are built with `serde_json` and
//! parsed into JS objects; references to live JS objects are attached after.
//!
//! Popup buttons are provider-owned DOM. Wiring them is best effort: a
//! missing button or library piece is skipped without error.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::actions::ActionRegistry;
use super::loader::global_lookup;
use super::markers::{MapSurface, MarkerSpec, PIN_PATH};
use super::{DEFAULT_CENTER, DEFAULT_ZOOM};
use crate::error::MapError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Map)]
    #[derive(Clone, Debug)]
    type JsMap;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "Map")]
    fn new(node: &web_sys::HtmlElement, options: &JsValue) -> JsMap;

    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Marker)]
    #[derive(Clone, Debug)]
    type JsMarker;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "Marker")]
    fn new(options: &JsValue) -> JsMarker;

    #[wasm_bindgen(method, js_name = setMap)]
    fn set_map(this: &JsMarker, map: &JsValue);

    #[wasm_bindgen(method, js_name = addListener)]
    fn add_listener(this: &JsMarker, event: &str, handler: &js_sys::Function) -> JsListener;

    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = InfoWindow)]
    #[derive(Clone, Debug)]
    type JsInfoWindow;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "InfoWindow")]
    fn new(options: &JsValue) -> JsInfoWindow;

    #[wasm_bindgen(method)]
    fn open(this: &JsInfoWindow, options: &JsValue);

    #[wasm_bindgen(method)]
    fn close(this: &JsInfoWindow);

    #[wasm_bindgen(method, js_name = addListener)]
    fn add_listener(this: &JsInfoWindow, event: &str, handler: &js_sys::Function) -> JsListener;

    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = MapsEventListener)]
    type JsListener;

    #[wasm_bindgen(method)]
    fn remove(this: &JsListener);

    #[wasm_bindgen(js_namespace = markerClusterer, js_name = MarkerClusterer)]
    type JsClusterer;

    #[wasm_bindgen(constructor, js_namespace = markerClusterer, js_class = "MarkerClusterer")]
    fn new(options: &JsValue) -> JsClusterer;

    #[wasm_bindgen(method, js_name = addMarker)]
    fn add_marker(this: &JsClusterer, marker: &JsMarker, no_draw: bool);

    #[wasm_bindgen(method, js_name = clearMarkers)]
    fn clear_markers(this: &JsClusterer, no_draw: bool);

    #[wasm_bindgen(method)]
    fn render(this: &JsClusterer);
}

/// A bound Google map plus its optional clusterer.
pub struct GoogleMap {
    map: JsMap,
    clusterer: Option<JsClusterer>,
}

impl GoogleMap {
    /// Create the map widget inside `node`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::LibraryMissing`] if the provider script has not run.
    pub fn mount(node: &web_sys::HtmlElement) -> Result<Self, MapError> {
        if global_lookup(super::loader::MAPS_GLOBAL).is_none() {
            return Err(MapError::LibraryMissing);
        }
        let options = json_object(&serde_json::json!({
            "center": { "lat": DEFAULT_CENTER.lat, "lng": DEFAULT_CENTER.lng },
            "zoom": DEFAULT_ZOOM,
            "fullscreenControl": false,
        }));
        let map = JsMap::new(node, &options);

        let clusterer = global_lookup(super::loader::CLUSTERER_GLOBAL).map(|_| {
            let options = js_sys::Object::new();
            set_field(&options, "map", &map);
            JsClusterer::new(&options)
        });
        if clusterer.is_none() {
            log::warn!("marker clusterer unavailable; markers are shown individually");
        }
        log::debug!("map bound");
        Ok(Self { map, clusterer })
    }

    /// Drop every marker from the clusterer before a new set is placed.
    pub fn clear_clusters(&self) {
        if let Some(clusterer) = &self.clusterer {
            clusterer.clear_markers(true);
        }
    }

    /// Redraw clusters after a batch of placements.
    pub fn render_clusters(&self) {
        if let Some(clusterer) = &self.clusterer {
            clusterer.render();
        }
    }
}

/// A marker on the map together with the callbacks that keep it interactive.
///
/// Dropping it closes the popup and removes the marker from the map.
pub struct PlacedMarker {
    marker: JsMarker,
    popup: JsInfoWindow,
    listeners: Vec<JsListener>,
    _on_marker_click: Closure<dyn FnMut()>,
    _on_dom_ready: Closure<dyn FnMut()>,
    _on_button_click: Rc<Closure<dyn FnMut()>>,
}

impl Drop for PlacedMarker {
    fn drop(&mut self) {
        for listener in &self.listeners {
            listener.remove();
        }
        self.popup.close();
        self.marker.set_map(&JsValue::NULL);
    }
}

impl MapSurface for GoogleMap {
    type Marker = PlacedMarker;

    fn place(&self, spec: &MarkerSpec, actions: &ActionRegistry) -> PlacedMarker {
        let options = json_object(&serde_json::json!({
            "position": { "lat": spec.position.lat, "lng": spec.position.lng },
            "title": spec.title,
            "icon": {
                "path": PIN_PATH,
                "fillColor": spec.icon.fill_color(),
                "fillOpacity": 1,
                "strokeColor": "#000",
                "strokeWeight": 2,
                "scale": 1,
            },
        }));
        set_field(&options, "map", &self.map);
        let marker = JsMarker::new(&options);
        if let Some(clusterer) = &self.clusterer {
            clusterer.add_marker(&marker, true);
        }

        let popup = JsInfoWindow::new(&json_object(&serde_json::json!({ "content": spec.popup_html })));

        let on_marker_click = {
            let popup = popup.clone();
            let marker = marker.clone();
            let map = self.map.clone();
            Closure::<dyn FnMut()>::new(move || {
                let options = json_object(&serde_json::json!({ "shouldFocus": false }));
                set_field(&options, "anchor", &marker);
                set_field(&options, "map", &map);
                popup.open(&options);
            })
        };

        let on_button_click = {
            let popup = popup.clone();
            let actions = actions.clone();
            let bike_id = spec.bike_id;
            Rc::new(Closure::<dyn FnMut()>::new(move || {
                popup.close();
                actions.dispatch(bike_id);
            }))
        };

        let on_dom_ready = {
            let actions = actions.clone();
            let bike_id = spec.bike_id;
            let button_id = spec.button_id();
            let click = Rc::clone(&on_button_click);
            Closure::<dyn FnMut()>::new(move || {
                if actions.registered(bike_id).is_none() {
                    return;
                }
                let Some(button) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id(&button_id))
                    .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
                else {
                    return;
                };
                // Assigning onclick keeps repeated domready events idempotent.
                button.set_onclick(Some((*click).as_ref().unchecked_ref()));
            })
        };

        let listeners = vec![
            marker.add_listener("click", on_marker_click.as_ref().unchecked_ref()),
            popup.add_listener("domready", on_dom_ready.as_ref().unchecked_ref()),
        ];

        PlacedMarker {
            marker,
            popup,
            listeners,
            _on_marker_click: on_marker_click,
            _on_dom_ready: on_dom_ready,
            _on_button_click: on_button_click,
        }
    }
}

fn json_object(value: &serde_json::Value) -> js_sys::Object {
    js_sys::JSON::parse(&value.to_string())
        .ok()
        .and_then(|v| v.dyn_into::<js_sys::Object>().ok())
        .unwrap_or_default()
}

fn set_field(target: &js_sys::Object, key: &str, value: &JsValue) {
    let _ = js_sys::Reflect::set(target, &JsValue::from_str(key), value);
}
