use axum::extract::Query;
use maud::Markup;
use serde::Deserialize;

use crate::templates::pages;

#[derive(Deserialize)]
pub struct ConfirmationQuery {
    #[serde(rename = "ref")]
    pub reference: Option<String>,
}

// GET /confirmation?ref=
pub async fn confirmation_page(Query(query): Query<ConfirmationQuery>) -> Markup {
    let reference = query.reference.as_deref().map(str::trim).filter(|r| !r.is_empty());
    pages::confirmation_page(reference)
}
