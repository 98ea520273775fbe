pub mod checkout;
pub mod confirmation;
pub mod detail;
pub mod health;
pub mod list;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::errors::AppError;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list::list_page))
        .route("/experiences/:id", get(detail::detail_page))
        .route(
            "/checkout",
            get(checkout::checkout_page).post(checkout::submit_checkout),
        )
        .route("/confirmation", get(confirmation::confirmation_page))
        .route("/health", get(health::health))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}
