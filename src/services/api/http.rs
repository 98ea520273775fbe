use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{ApiError, BookingApi};
use crate::models::{Booking, BookingData, Experience, PromoValidationRequest, PromoValidationResponse};
use crate::navigation::encode_segment;

pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

const LIST_FAILED: &str = "Failed to fetch experiences";
const EXPERIENCE_FAILED: &str = "Failed to fetch experience";
const PROMO_FAILED: &str = "Failed to validate promo code";
const BOOKING_FAILED: &str = "Failed to create booking";
const LOOKUP_FAILED: &str = "Failed to fetch booking";

pub struct HttpBookingApi {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl HttpBookingApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(transport("Failed to set up the booking client"))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Wraps a reqwest failure under the customer-facing `message`, logging the
/// underlying cause.
fn transport(message: &'static str) -> impl FnOnce(reqwest::Error) -> ApiError {
    move |source| {
        tracing::warn!(error = %source, "{message}");
        ApiError::Transport { message, source }
    }
}

/// Decodes a 2xx body, or fails with `fallback` without reading the body.
async fn json_or<T: DeserializeOwned>(resp: Response, fallback: &'static str) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        tracing::warn!(status = %status, "backend request failed");
        return Err(status_error(status, fallback));
    }
    resp.json().await.map_err(transport(fallback))
}

/// Decodes a 2xx body, or fails with the body's `message` field, falling
/// back to `fallback` when there is none.
async fn json_or_message<T: DeserializeOwned>(resp: Response, fallback: &'static str) -> Result<T, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return resp.json().await.map_err(transport(fallback));
    }

    let message = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_string());
    tracing::warn!(status = %status, message = %message, "backend rejected request");

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

fn status_error(status: StatusCode, message: &str) -> ApiError {
    ApiError::Status {
        status: status.as_u16(),
        message: message.to_string(),
    }
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn list_experiences(&self, search: Option<&str>) -> Result<Vec<Experience>, ApiError> {
        let mut req = self.client.get(self.url("/experiences"));
        if let Some(q) = search.filter(|q| !q.is_empty()) {
            req = req.query(&[("search", q)]);
        }

        tracing::debug!(search = ?search, "fetching experiences");
        let resp = req.send().await.map_err(transport(LIST_FAILED))?;
        json_or(resp, LIST_FAILED).await
    }

    async fn get_experience(&self, id: &str) -> Result<Experience, ApiError> {
        tracing::debug!(experience_id = %id, "fetching experience");
        let resp = self
            .client
            .get(self.url(&format!("/experiences/{}", encode_segment(id))))
            .send()
            .await
            .map_err(transport(EXPERIENCE_FAILED))?;
        json_or(resp, EXPERIENCE_FAILED).await
    }

    async fn validate_promo(
        &self,
        code: &str,
        experience_id: &str,
        quantity: u32,
    ) -> Result<PromoValidationResponse, ApiError> {
        tracing::debug!(code = %code, experience_id = %experience_id, quantity, "validating promo code");
        let body = PromoValidationRequest {
            code,
            experience_id,
            quantity,
        };
        let resp = self
            .client
            .post(self.url("/promos/validate"))
            .json(&body)
            .send()
            .await
            .map_err(transport(PROMO_FAILED))?;
        json_or_message(resp, PROMO_FAILED).await
    }

    async fn create_booking(&self, data: &BookingData, idempotency_key: &str) -> Result<Booking, ApiError> {
        tracing::info!(
            experience_id = %data.experience_id,
            slot_id = %data.slot_id,
            quantity = data.quantity,
            "creating booking"
        );
        let resp = self
            .client
            .post(self.url("/bookings"))
            .header(IDEMPOTENCY_HEADER, idempotency_key)
            .json(data)
            .send()
            .await
            .map_err(transport(BOOKING_FAILED))?;
        json_or_message(resp, BOOKING_FAILED).await
    }

    async fn get_booking_by_reference(&self, reference: &str) -> Result<Booking, ApiError> {
        let resp = self
            .client
            .get(self.url(&format!("/bookings/{}", encode_segment(reference))))
            .send()
            .await
            .map_err(transport(LOOKUP_FAILED))?;
        json_or(resp, LOOKUP_FAILED).await
    }
}
