//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form controls and page chrome while reading shared
//! state from the [`AppContext`](crate::state::AppContext) provider.

pub mod alert_error;
pub mod login_form;
pub mod register_form;
pub mod spinner;
pub mod text_input;
pub mod user_menu;
