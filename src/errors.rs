use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::navigation::ParamError;
use crate::services::api::ApiError;
use crate::templates::pages;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("{0}")]
    Params(#[from] ParamError),

    /// The booking can no longer go ahead as requested (slot gone, too few tickets).
    #[error("{0}")]
    Unavailable(String),

    #[error("Page not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Api(e) if e.status() == Some(404) => StatusCode::NOT_FOUND,
            AppError::Api(_) => StatusCode::BAD_GATEWAY,
            AppError::Params(_) => StatusCode::BAD_REQUEST,
            AppError::Unavailable(_) => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
        };

        (status, pages::error_page(&self.to_string())).into_response()
    }
}
