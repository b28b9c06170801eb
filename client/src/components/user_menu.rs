//! Avatar button with a logout dropdown.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::AppContext;
use crate::util::auth::LOGIN_ROUTE;

#[component]
pub fn UserMenu() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let navigate = use_navigate();
    let open = RwSignal::new(false);

    let initial = move || ctx.session.with(|s| s.user.as_ref().map(crate::net::types::User::initial).unwrap_or_default());
    let full_name = move || ctx.session.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());

    let on_logout = move |_| {
        open.set(false);
        crate::queries::sign_out(ctx);
        navigate(LOGIN_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    view! {
        <div class="user-menu">
            <button
                class="user-menu__avatar"
                data-testid="avatar"
                title=full_name
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {initial}
            </button>
            <ul class="user-menu__dropdown" hidden=move || !open.get()>
                <li>
                    <button class="user-menu__item" on:click=on_logout>
                        "Logout"
                    </button>
                </li>
            </ul>
        </div>
    }
}
