//! Account registration form.

#[cfg(test)]
#[path = "register_form_test.rs"]
mod register_form_test;

use leptos::prelude::*;

use super::alert_error::AlertError;
use super::text_input::TextInput;
use crate::net::types::RegisterRequest;
#[cfg(feature = "hydrate")]
use crate::state::AppContext;

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterErrors {
    pub username: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub name: Option<String>,
}

/// Presence checks plus password confirmation.
///
/// # Errors
///
/// Returns the message for every field that fails.
pub fn validate_register(
    username: &str,
    password: &str,
    confirm_password: &str,
    name: &str,
) -> Result<RegisterRequest, RegisterErrors> {
    let username = username.trim();
    let name = name.trim();
    let confirm_message = if confirm_password.is_empty() {
        Some("Confirm your password".to_owned())
    } else if confirm_password != password {
        Some("Passwords do not match".to_owned())
    } else {
        None
    };
    let errors = RegisterErrors {
        username: username.is_empty().then(|| "Username is required".to_owned()),
        password: password.is_empty().then(|| "Password is required".to_owned()),
        confirm_password: confirm_message,
        name: name.is_empty().then(|| "Name is required".to_owned()),
    };
    if errors == RegisterErrors::default() {
        Ok(RegisterRequest { username: username.to_owned(), password: password.to_owned(), name: name.to_owned() })
    } else {
        Err(errors)
    }
}

#[component]
pub fn RegisterForm(on_switch: Callback<()>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let ctx = expect_context::<AppContext>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let errors = RwSignal::new(RegisterErrors::default());
    let server_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        server_error.set(None);
        let validated = validate_register(
            &username.get_untracked(),
            &password.get_untracked(),
            &confirm_password.get_untracked(),
            &name.get_untracked(),
        );
        let request = match validated {
            Ok(request) => {
                errors.set(RegisterErrors::default());
                request
            }
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(message) = crate::queries::sign_up(ctx, request).await {
                server_error.set(Some(message));
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit novalidate=true>
            <TextInput
                id="username"
                label="Username"
                value=username
                placeholder="Your username"
                autocomplete="username"
                error=Signal::derive(move || errors.with(|e| e.username.clone()))
            />
            <TextInput
                id="password"
                label="Password"
                kind="password"
                value=password
                placeholder="Your password"
                autocomplete="new-password"
                error=Signal::derive(move || errors.with(|e| e.password.clone()))
            />
            <TextInput
                id="confirmPassword"
                label="Confirm password"
                kind="password"
                value=confirm_password
                placeholder="Your password confirm"
                autocomplete="new-password"
                error=Signal::derive(move || errors.with(|e| e.confirm_password.clone()))
            />
            <TextInput
                id="name"
                label="Name"
                value=name
                placeholder="Your name"
                autocomplete="name"
                error=Signal::derive(move || errors.with(|e| e.name.clone()))
            />
            <div class="auth-form__actions">
                <button
                    class="btn btn--primary"
                    class:btn--loading=move || busy.get()
                    type="submit"
                    disabled=move || busy.get()
                >
                    "Register"
                </button>
                <button class="btn btn--link" type="button" on:click=move |_| on_switch.run(())>
                    "Login"
                </button>
            </div>
            <AlertError message=server_error/>
        </form>
    }
}
