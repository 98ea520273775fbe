use maud::{html, Markup, DOCTYPE};

use super::SITE_NAME;

/// Full HTML document with the brand header and search box. `search` prefills the box.
pub fn page_layout(title: &str, search: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content="Curated small-group experiences.";
                title { (title) " | " (SITE_NAME) }
            }
            body {
                nav class="site-header" {
                    a href="/" class="brand" {
                        img src="/logo.png" alt="Highway Delite Logo" width="100" height="55";
                    }
                    form method="get" action="/" class="search" {
                        input type="text" name="search" placeholder="Search experiences" value=(search);
                        button type="submit" { "Search" }
                    }
                }
                div class="container" {
                    (content)
                }
            }
        }
    }
}
