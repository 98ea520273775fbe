use maud::{html, Markup};

use crate::templates::components::error_panel;
use crate::templates::page_layout;

/// Terminal error screen; the only way on is back to the catalog.
pub fn error_page(message: &str) -> Markup {
    page_layout("Error", "", html! { (error_panel("Error", message, "/", "Go Home")) })
}
