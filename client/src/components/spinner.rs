//! Loading indicator.

use leptos::prelude::*;

/// Centered spinner; `overlay` covers the parent instead of taking space.
#[component]
pub fn Spinner(#[prop(optional)] overlay: bool) -> impl IntoView {
    let class = if overlay { "spinner spinner--overlay" } else { "spinner" };
    view! {
        <div class=class role="status" aria-live="polite">
            <span class="spinner__wheel" aria-hidden="true"></span>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}
