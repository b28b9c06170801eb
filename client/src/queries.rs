//! Glue between UI events and the REST API.
//!
//! Each query reads the API client from [`AppContext`], runs the request on
//! the local executor and folds the result back into state. Callers never
//! await; they observe the signals instead.

use crate::net::types::{BikeAction, LoginRequest, RegisterRequest, User};
use crate::state::AppContext;
#[cfg(feature = "hydrate")]
use crate::state::bikes::BikesState;
use leptos::prelude::*;

/// Fetch the bike list unless it is already cached or in flight.
pub fn fetch_bikes(ctx: AppContext) {
    let Some(client) = ctx.api() else {
        return;
    };
    if !ctx.bikes.with_untracked(|b| b.needs_fetch()) {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        ctx.bikes.update(BikesState::begin_fetch);
        leptos::task::spawn_local(async move {
            let result = crate::net::bikes::fetch_bikes(&client).await;
            if let Ok(bikes) = &result {
                log::debug!("fetched {} bikes", bikes.len());
            }
            ctx.bikes.update(|b| b.finish_fetch(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = client;
    }
}

/// Rent or return a bike and swap the server's copy into the cache.
///
/// Ignored while another rent/return is in flight.
pub fn run_bike_action(ctx: AppContext, bike_id: i64, action: BikeAction) {
    let Some(client) = ctx.api() else {
        return;
    };
    let mut started = false;
    ctx.bikes.update(|b| started = b.begin_action(bike_id, action));
    if !started {
        log::debug!("{action:?} on bike {bike_id} ignored; another action is pending");
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = match action {
            BikeAction::Rent => crate::net::bikes::rent_bike(&client, bike_id).await,
            BikeAction::Return => crate::net::bikes::return_bike(&client, bike_id).await,
        };
        ctx.bikes.update(|b| b.finish_action(result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = client;
        ctx.bikes.update(|b| b.finish_action(Err(crate::error::ApiError::Unavailable)));
    }
}

/// Log in and adopt the returned token.
///
/// # Errors
///
/// Returns a display message if the API or the token rejects the attempt.
pub async fn sign_in(ctx: AppContext, request: LoginRequest) -> Result<User, String> {
    let client = ctx.api().ok_or_else(config_missing)?;
    let credentials = crate::net::users::login(&client, &request).await.map_err(|e| e.message())?;
    crate::state::session::establish(ctx.session, &credentials.access_token).map_err(|e| e.to_string())
}

/// Register and adopt the returned token.
///
/// # Errors
///
/// Returns a display message if the API or the token rejects the attempt.
pub async fn sign_up(ctx: AppContext, request: RegisterRequest) -> Result<User, String> {
    let client = ctx.api().ok_or_else(config_missing)?;
    let credentials = crate::net::users::register(&client, &request).await.map_err(|e| e.message())?;
    crate::state::session::establish(ctx.session, &credentials.access_token).map_err(|e| e.to_string())
}

/// Forget the session and everything cached for it.
pub fn sign_out(ctx: AppContext) {
    crate::state::session::end(ctx.session);
    ctx.bikes.update(|b| b.reset());
}

fn config_missing() -> String {
    "Configuration is still loading. Try again in a moment.".to_owned()
}
