//! Wire DTOs for the bike-sharing REST API.
//!
//! DESIGN
//! ======
//! These types mirror the API's camelCase JSON so serde round-trips stay
//! lossless. The server encodes coordinates as decimal strings and uses `0`
//! for "no renter"; both quirks are normalized here so the rest of the client
//! never sees them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Rental status of a bike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BikeStatus {
    Available,
    Rented,
}

/// A bike as returned by `GET /bikes` and the rent/return endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bike {
    /// Server-assigned bike identifier.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Display name, may be empty.
    #[serde(default)]
    pub name: String,
    /// Latitude as a decimal string; empty when the server sent none.
    #[serde(default, deserialize_with = "deserialize_coordinate")]
    pub lat: String,
    /// Longitude as a decimal string; empty when the server sent none.
    #[serde(default, deserialize_with = "deserialize_coordinate")]
    pub long: String,
    pub status: BikeStatus,
    /// Renter's user id; `None` when nobody holds the bike.
    #[serde(default, deserialize_with = "deserialize_renter_id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub name_of_renter: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub username_of_renter: Option<String>,
}

impl Bike {
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == BikeStatus::Available
    }

    /// Whether `user_id` is the current renter of this bike.
    #[must_use]
    pub fn is_held_by(&self, user_id: i64) -> bool {
        self.user_id == Some(user_id)
    }

    /// Parsed map position, or `None` when either coordinate is not a finite number.
    #[must_use]
    pub fn position(&self) -> Option<LatLng> {
        let lat = self.lat.trim().parse::<f64>().ok()?;
        let lng = self.long.trim().parse::<f64>().ok()?;
        (lat.is_finite() && lng.is_finite()).then_some(LatLng { lat, lng })
    }
}

/// First bike rented by `user_id`, if any.
#[must_use]
pub fn held_bike(bikes: &[Bike], user_id: i64) -> Option<&Bike> {
    bikes.iter().find(|b| b.is_held_by(user_id))
}

/// A geographic position in the shape the map library expects.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Mutation a user can perform on a single bike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BikeAction {
    Rent,
    Return,
}

impl BikeAction {
    /// Trailing path segment of the mutation endpoint.
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Rent => "rent",
            Self::Return => "return",
        }
    }
}

/// Identity carried in the bearer token's claims.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
    pub username: String,
    #[serde(default, deserialize_with = "deserialize_nullable_list")]
    pub permissions: Vec<String>,
    /// Expiry in seconds since the Unix epoch, when the token carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

impl User {
    /// First character of the display name, for avatar placeholders.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .or_else(|| self.username.chars().next())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Body of `POST /users/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /users/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub name: String,
}

/// Token pair returned by login and register.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub access_token: String,
}

fn deserialize_coordinate<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!("expected coordinate, got {other}"))),
    }
}

fn deserialize_renter_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(number)) => {
            let id = number
                .as_i64()
                .ok_or_else(|| D::Error::custom("expected integer user id"))?;
            Ok((id != 0).then_some(id))
        }
        Some(_) => Err(D::Error::custom("expected number")),
    }
}

fn deserialize_nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|text| !text.is_empty()))
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
