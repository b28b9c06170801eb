//! Bike list and rent/return endpoints.

#[cfg(test)]
#[path = "bikes_test.rs"]
mod bikes_test;

use super::http::ApiClient;
use super::types::{Bike, BikeAction};
use crate::error::ApiError;

/// Collection path for `GET /bikes`.
pub const BIKES_PATH: &str = "/bikes";

fn bike_action_path(bike_id: i64, action: BikeAction) -> String {
    format!("{BIKES_PATH}/{bike_id}/{}", action.path_segment())
}

/// Fetch every bike.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails or the body is not a bike list.
pub async fn fetch_bikes(client: &ApiClient) -> Result<Vec<Bike>, ApiError> {
    client.get(BIKES_PATH).await
}

/// Rent a bike for the current user via `PATCH /bikes/{id}/rent`.
///
/// # Errors
///
/// Returns [`ApiError`] if the server refuses the rental.
pub async fn rent_bike(client: &ApiClient, bike_id: i64) -> Result<Bike, ApiError> {
    run_bike_action(client, bike_id, BikeAction::Rent).await
}

/// Return the current user's bike via `PATCH /bikes/{id}/return`.
///
/// # Errors
///
/// Returns [`ApiError`] if the server refuses the return.
pub async fn return_bike(client: &ApiClient, bike_id: i64) -> Result<Bike, ApiError> {
    run_bike_action(client, bike_id, BikeAction::Return).await
}

/// Perform `action` on `bike_id` and yield the server's updated copy.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails or the body is not a bike.
async fn run_bike_action(client: &ApiClient, bike_id: i64, action: BikeAction) -> Result<Bike, ApiError> {
    client.patch(&bike_action_path(bike_id, action)).await
}
