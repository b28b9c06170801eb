//! Networking modules for the bike REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns auth headers and error normalization, `bikes` and `users` map
//! endpoints onto typed calls, and `types` defines the wire schema.

pub mod bikes;
pub mod http;
pub mod types;
pub mod users;
