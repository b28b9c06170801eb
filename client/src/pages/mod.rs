//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route guard and data loading and delegates rendering
//! details to `components`.

pub mod dashboard;
pub mod login;
