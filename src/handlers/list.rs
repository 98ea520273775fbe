use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::state::AppState;
use crate::templates::pages;

#[derive(Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
}

// GET /?search=
pub async fn list_page(State(state): State<Arc<AppState>>, Query(query): Query<ListQuery>) -> Response {
    let search = query
        .search
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_default();
    let term = Some(search.as_str()).filter(|s| !s.is_empty());

    match state.api.list_experiences(term).await {
        Ok(experiences) => pages::list_page(&search, Ok(experiences.as_slice())).into_response(),
        Err(e) => {
            tracing::error!(error = %e, search = %search, "failed to load experiences");
            let message = e.to_string();
            (StatusCode::BAD_GATEWAY, pages::list_page(&search, Err(message.as_str()))).into_response()
        }
    }
}
