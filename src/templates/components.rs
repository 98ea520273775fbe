use maud::{html, Markup};

use crate::models::Experience;
use crate::navigation::experience_url;

pub fn experience_card(exp: &Experience) -> Markup {
    html! {
        div class="experience-card" {
            div class="card-image" {
                img src=(exp.image) alt=(exp.name) loading="lazy";
            }
            div class="card-body" {
                div class="card-title" {
                    h3 { (exp.name) }
                    span class="tag" { (exp.location) }
                }
                p class="card-description" { (exp.description) }
                div class="card-footer" {
                    span class="from" { "From" }
                    span class="price" { "₹" (exp.price) }
                    a href=(experience_url(&exp.id)) class="button" { "View Details" }
                }
            }
        }
    }
}

/// Label/value line in a price or order summary.
pub fn summary_row(label: &str, value: &str) -> Markup {
    html! {
        div class="summary-row" {
            span class="label" { (label) }
            span class="value" { (value) }
        }
    }
}

pub fn field_error(message: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = message {
            p class="field-error" { (message) }
        }
    }
}

/// Page-level failure with a single way out.
pub fn error_panel(title: &str, message: &str, action_href: &str, action_label: &str) -> Markup {
    html! {
        div class="error-state" role="alert" {
            p class="error-title" { (title) }
            p class="error-message" { (message) }
            a href=(action_href) class="button" { (action_label) }
        }
    }
}
