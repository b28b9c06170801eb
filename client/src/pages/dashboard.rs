//! Bike map page for signed-in users.
//!
//! SYSTEM CONTEXT
//! ==============
//! The map node is always mounted so the widget binds exactly once; loading
//! is shown as an overlay on top of it. Bikes are fetched once both the
//! runtime config and a session are available.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::alert_error::AlertError;
use crate::components::spinner::Spinner;
use crate::components::user_menu::UserMenu;
use crate::config::ConfigState;
use crate::map::install_bike_map;
use crate::state::AppContext;
use crate::state::bikes::QueryStatus;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    install_unauth_redirect(ctx.session, use_navigate());

    Effect::new(move || {
        let ready = ctx.config.with(ConfigState::is_ready);
        let signed_in = ctx.session.with(SessionState::is_signed_in);
        if ready && signed_in {
            crate::queries::fetch_bikes(ctx);
        }
    });

    let map_ref = NodeRef::<leptos::html::Div>::new();
    install_bike_map(ctx, map_ref);

    let busy = move || ctx.bikes.with(|b| b.status() == QueryStatus::Loading || b.pending.is_some());
    let alert = Signal::derive(move || {
        ctx.bikes
            .with(|b| b.error.clone())
            .or_else(|| ctx.config.with(|c| c.error.clone()))
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <span class="dashboard-page__title">"Shared Bike"</span>
                <UserMenu/>
            </header>
            <div class="dashboard-page__alert">
                <AlertError message=alert/>
            </div>
            <div class="dashboard-page__map">
                <div class="bike-map" node_ref=map_ref></div>
                <Show when=busy>
                    <Spinner overlay=true/>
                </Show>
            </div>
        </div>
    }
}
