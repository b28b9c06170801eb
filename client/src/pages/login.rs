//! Public landing page with login and registration.
//!
//! SYSTEM CONTEXT
//! ==============
//! A visitor who already has a session is forwarded to the dashboard, both on
//! arrival and right after a successful login or registration.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::alert_error::AlertError;
use crate::components::login_form::LoginForm;
use crate::components::register_form::RegisterForm;
use crate::state::AppContext;
use crate::util::auth::install_authed_redirect;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    install_authed_redirect(ctx.session, use_navigate());

    let show_login = RwSignal::new(true);
    let to_register = Callback::new(move |()| show_login.set(false));
    let to_login = Callback::new(move |()| show_login.set(true));
    let config_error = Signal::derive(move || ctx.config.with(|c| c.error.clone()));

    view! {
        <div class="login-page">
            <section class="login-page__hero">
                <h1>"Shared Bike"</h1>
                <p class="login-page__tagline">"Shared bike platform for everyone"</p>
            </section>
            <section class="login-card">
                <h2 class="login-card__title">
                    {move || if show_login.get() { "Sign in" } else { "Create an account" }}
                </h2>
                <AlertError message=config_error/>
                <Show
                    when=move || show_login.get()
                    fallback=move || view! { <RegisterForm on_switch=to_login/> }
                >
                    <LoginForm on_switch=to_register/>
                </Show>
            </section>
        </div>
    }
}
