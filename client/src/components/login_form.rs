//! Username/password login form.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use leptos::prelude::*;

use super::alert_error::AlertError;
use super::text_input::TextInput;
use crate::net::types::LoginRequest;
#[cfg(feature = "hydrate")]
use crate::state::AppContext;

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Presence checks; usernames are trimmed, passwords are taken verbatim.
///
/// # Errors
///
/// Returns the message for every empty field.
pub fn validate_login(username: &str, password: &str) -> Result<LoginRequest, LoginErrors> {
    let username = username.trim();
    let errors = LoginErrors {
        username: username.is_empty().then(|| "Username is required".to_owned()),
        password: password.is_empty().then(|| "Password is required".to_owned()),
    };
    if errors == LoginErrors::default() {
        Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
    } else {
        Err(errors)
    }
}

#[component]
pub fn LoginForm(on_switch: Callback<()>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let ctx = expect_context::<AppContext>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(LoginErrors::default());
    let server_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        server_error.set(None);
        let request = match validate_login(&username.get_untracked(), &password.get_untracked()) {
            Ok(request) => {
                errors.set(LoginErrors::default());
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
            if let Err(message) = crate::queries::sign_in(ctx, request).await {
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
                autocomplete="current-password"
                error=Signal::derive(move || errors.with(|e| e.password.clone()))
            />
            <div class="auth-form__actions">
                <button
                    class="btn btn--primary"
                    class:btn--loading=move || busy.get()
                    type="submit"
                    disabled=move || busy.get()
                >
                    "Login"
                </button>
                <button class="btn btn--link" type="button" on:click=move |_| on_switch.run(())>
                    "Register"
                </button>
            </div>
            <AlertError message=server_error/>
        </form>
    }
}
