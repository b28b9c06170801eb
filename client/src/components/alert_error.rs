//! Inline error banner.

use leptos::prelude::*;

/// Renders `message` in an alert box, or nothing while it is `None`.
#[component]
pub fn AlertError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class="alert alert--error" role="alert">
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
