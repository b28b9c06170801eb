//! Labelled text field bound to a string signal.

use leptos::prelude::*;

#[component]
pub fn TextInput(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] autocomplete: &'static str,
    #[prop(into, default = Signal::stored(None))] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field__label" for=id>{label}</label>
            <input
                id=id
                name=id
                class="field__input"
                class:field__input--invalid=move || error.with(Option::is_some)
                type=kind
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || error.with(Option::is_some)>
                <p class="field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
