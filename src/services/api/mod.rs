pub mod http;

use async_trait::async_trait;

use crate::models::{Booking, BookingData, Experience, PromoValidationResponse};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend could not be reached or its body could not be decoded.
    /// `message` is the operation's customer-facing text; `source` stays in logs.
    #[error("{message}")]
    Transport {
        message: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success response; `message` is the backend's own message when it
    /// sent one, otherwise the operation's fallback text.
    #[error("{message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            ApiError::Status { status, .. } => Some(*status),
        }
    }
}

/// Client for the booking backend.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn list_experiences(&self, search: Option<&str>) -> Result<Vec<Experience>, ApiError>;

    async fn get_experience(&self, id: &str) -> Result<Experience, ApiError>;

    async fn validate_promo(
        &self,
        code: &str,
        experience_id: &str,
        quantity: u32,
    ) -> Result<PromoValidationResponse, ApiError>;

    /// Creates a booking. Resubmissions of the same attempt must reuse
    /// `idempotency_key`.
    async fn create_booking(&self, data: &BookingData, idempotency_key: &str) -> Result<Booking, ApiError>;

    async fn get_booking_by_reference(&self, reference: &str) -> Result<Booking, ApiError>;
}
