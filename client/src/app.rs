//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::AppContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the [`AppContext`] once, restores the session from storage and
/// loads the runtime configuration after hydration.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx = AppContext::new();
    provide_context(ctx);

    #[cfg(feature = "hydrate")]
    {
        // Runs after hydration so the first client frame matches the SSR markup.
        Effect::new(move || crate::state::session::restore(ctx.session));
        leptos::task::spawn_local(async move {
            match crate::config::fetch_runtime_config().await {
                Ok(config) => {
                    log::debug!("runtime config loaded ({:?})", config.app_env);
                    ctx.config.update(|c| {
                        c.config = Some(config);
                        c.error = None;
                    });
                }
                Err(e) => {
                    log::error!("runtime config unavailable: {e}");
                    ctx.config.update(|c| c.error = Some(format!("Configuration could not be loaded: {e}")));
                }
            }
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/shared-bike.css"/>
        <Title text="Shared Bike"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
