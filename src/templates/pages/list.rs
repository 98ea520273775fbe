use maud::{html, Markup};

use crate::models::Experience;
use crate::navigation::list_url;
use crate::templates::components::{error_panel, experience_card};
use crate::templates::page_layout;

/// Catalog grid for `search`, or the failure message when the catalog could not be loaded.
pub fn list_page(search: &str, experiences: Result<&[Experience], &str>) -> Markup {
    let content = match experiences {
        Err(message) => error_panel("Error", &format!("Error: {message}"), &list_url(search), "Retry"),
        Ok([]) if !search.is_empty() => html! {
            p class="empty" { "No experiences found for “" (search) "”." }
        },
        Ok([]) => html! {
            p class="empty" { "No experiences available at the moment." }
        },
        Ok(experiences) => html! {
            div class="experience-grid" {
                @for exp in experiences {
                    (experience_card(exp))
                }
            }
        },
    };

    page_layout("Experiences", search, content)
}
