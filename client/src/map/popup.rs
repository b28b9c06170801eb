//! HTML content for a bike's marker popup.
//!
//! The map provider takes popup content as a raw HTML string, so everything
//! interpolated from bike data is escaped here.

#[cfg(test)]
#[path = "popup_test.rs"]
mod popup_test;

use std::fmt::Write as _;

use crate::net::types::{Bike, BikeAction};

/// What the popup button offers for a bike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Affordance {
    Rent,
    RentDisabled,
    Return,
}

impl Affordance {
    /// Action the button dispatches, if it is clickable.
    #[must_use]
    pub fn action(self) -> Option<BikeAction> {
        match self {
            Self::Rent => Some(BikeAction::Rent),
            Self::RentDisabled => None,
            Self::Return => Some(BikeAction::Return),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Rent | Self::RentDisabled => "RENT BIKE",
            Self::Return => "RETURN BIKE",
        }
    }
}

/// DOM id of the action button inside a bike's popup.
#[must_use]
pub fn button_id(bike_id: i64) -> String {
    format!("bike-action-{bike_id}")
}

#[must_use]
pub fn render_popup(bike: &Bike, affordance: Affordance) -> String {
    let title = if bike.name.trim().is_empty() {
        format!("Bike &raquo;{}&laquo;", bike.id)
    } else {
        format!("{} &raquo;{}&laquo;", escape_html(&bike.name), bike.id)
    };

    let mut html = String::with_capacity(768);
    html.push_str(r#"<div class="bike-popup">"#);
    let _ = write!(html, r#"<h1 class="bike-popup__title">{title}</h1>"#);
    html.push_str(concat!(
        r#"<h2 class="bike-popup__subtitle">This bike is for rent</h2>"#,
        r#"<ol class="bike-popup__steps">"#,
        "<li>Click on &ldquo;Rent Bike&rdquo;</li>",
        "<li>Bicycle lock will unlock automatically</li>",
        "<li>Adjust saddle height</li>",
        "</ol>",
    ));
    let (class, disabled) = match affordance {
        Affordance::RentDisabled => ("btn btn--disabled", " disabled"),
        Affordance::Rent | Affordance::Return => ("btn btn--primary", ""),
    };
    let _ = write!(
        html,
        r#"<div class="bike-popup__actions"><button id="{id}" type="button" class="{class}"{disabled}>{label}</button></div>"#,
        id = button_id(bike.id),
        label = affordance.label(),
    );
    html.push_str("</div>");
    html
}

/// Escape text for interpolation into HTML element content or attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
