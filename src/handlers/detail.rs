use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::navigation::{checkout_url, detail_url};
use crate::services::selection::SelectionState;
use crate::state::AppState;
use crate::templates::pages::{self, DetailView};

const SELECT_TIME_FIRST: &str = "Please select a time slot before confirming.";

/// Selection carried in the detail page URL. Values are untrusted and get
/// re-checked against the freshly fetched slots.
#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    pub date: Option<String>,
    pub slot: Option<String>,
    pub qty: Option<String>,
    pub action: Option<String>,
}

// GET /experiences/:id
pub async fn detail_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<DetailQuery>,
) -> Response {
    let experience = match state.api.get_experience(&id).await {
        Ok(exp) => exp,
        Err(e) => {
            tracing::warn!(experience_id = %id, error = %e, "failed to load experience");
            let status = match e.status() {
                Some(404) => StatusCode::NOT_FOUND,
                _ => StatusCode::BAD_GATEWAY,
            };
            return (status, pages::detail_error_page(&e.to_string())).into_response();
        }
    };

    let slots = experience.slots();
    let mut selection = SelectionState::restore(
        slots,
        query.date.as_deref(),
        query.slot.as_deref(),
        query.qty.as_deref().and_then(|q| q.parse().ok()),
    );

    let mut alert = None;
    match query.action.as_deref() {
        // Reloading the step target must not apply the step again.
        Some(step @ ("inc" | "dec")) => {
            if step == "inc" {
                selection.increment(slots);
            } else {
                selection.decrement();
            }
            return Redirect::to(&detail_url(&experience.id, &selection, None)).into_response();
        }
        Some("confirm") => match selection.selected_slot(slots) {
            Some(slot) => {
                let target = checkout_url(&experience.id, &slot.id, selection.quantity);
                return Redirect::to(&target).into_response();
            }
            None => alert = Some(SELECT_TIME_FIRST),
        },
        _ => {}
    }

    pages::detail_page(&DetailView {
        experience: &experience,
        selection: &selection,
        alert,
    })
    .into_response()
}
