use maud::{html, Markup};

use crate::templates::page_layout;

pub fn confirmation_page(reference: Option<&str>) -> Markup {
    page_layout(
        "Booking Confirmed",
        "",
        html! {
            div class="confirmation" {
                img src="/success.png" alt="Success" width="70" height="70";
                h1 { "Booking Confirmed" }
                @if let Some(reference) = reference {
                    p class="reference" { "Ref ID: " (reference) }
                }
                a href="/" class="button" { "Back to Home" }
            }
        },
    )
}
