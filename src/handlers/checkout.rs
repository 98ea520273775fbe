use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{AppliedPromo, CheckoutForm, Experience, Slot};
use crate::navigation::{confirmation_url, CheckoutParams};
use crate::services::api::{ApiError, BookingApi};
use crate::services::validation::{validate_booking_form, FieldErrors};
use crate::state::AppState;
use crate::templates::pages::{self, CheckoutView};

const ENTER_PROMO: &str = "Please enter a promo code.";
const INVALID_PROMO: &str = "Invalid promo code.";

/// Re-fetches the experience and checks the requested slot can still take
/// `params.quantity` tickets.
async fn load_booking(api: &dyn BookingApi, params: &CheckoutParams) -> Result<(Experience, Slot), AppError> {
    let experience = api.get_experience(&params.experience_id).await.map_err(|e| {
        tracing::warn!(experience_id = %params.experience_id, error = %e, "failed to load experience for checkout");
        e
    })?;

    let slot = experience
        .find_slot(&params.slot_id)
        .cloned()
        .ok_or_else(|| AppError::Unavailable("Selected slot is no longer available.".to_string()))?;

    if params.quantity > slot.available {
        tracing::info!(
            slot_id = %slot.id,
            requested = params.quantity,
            available = slot.available,
            "requested quantity exceeds availability"
        );
        return Err(AppError::Unavailable(format!(
            "Only {} tickets are available. Please adjust your quantity.",
            slot.available
        )));
    }

    Ok((experience, slot))
}

/// Keeps the key of an ongoing submission attempt, or starts a new attempt.
fn attempt_key(raw: &str) -> String {
    Uuid::parse_str(raw.trim())
        .unwrap_or_else(|_| Uuid::new_v4())
        .to_string()
}

// GET /checkout?expId=&slotId=&qty=
pub async fn checkout_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let params = CheckoutParams::parse(&query)?;
    let (experience, slot) = load_booking(state.api.as_ref(), &params).await?;

    let form = CheckoutForm::default();
    let idempotency_key = Uuid::new_v4().to_string();

    Ok(pages::checkout_page(&CheckoutView {
        experience: &experience,
        slot: &slot,
        quantity: params.quantity,
        form: &form,
        idempotency_key: &idempotency_key,
        errors: &FieldErrors::default(),
        applied: None,
        promo_error: None,
        submit_error: None,
    })
    .into_response())
}

// POST /checkout
pub async fn submit_checkout(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CheckoutForm>,
) -> Result<Response, AppError> {
    let params = CheckoutParams::from_parts(&form.exp_id, &form.slot_id, &form.qty)?;
    let (experience, slot) = load_booking(state.api.as_ref(), &params).await?;

    let mut idempotency_key = attempt_key(&form.idempotency_key);
    let mut applied = form.applied_promo();
    let mut errors = FieldErrors::default();
    let mut promo_error: Option<String> = None;
    let mut submit_error: Option<String> = None;
    let mut status = StatusCode::OK;

    if form.intent == "apply" {
        applied = None;
        let code = form.promo_code.trim();
        if code.is_empty() {
            promo_error = Some(ENTER_PROMO.to_string());
        } else {
            match state.api.validate_promo(code, &experience.id, params.quantity).await {
                Ok(response) if response.is_valid => {
                    applied = Some(AppliedPromo {
                        code: form.promo_code.clone(),
                        response,
                    });
                }
                Ok(response) => {
                    let message = Some(response.message).filter(|m| !m.is_empty());
                    promo_error = Some(message.unwrap_or_else(|| INVALID_PROMO.to_string()));
                }
                Err(e) => {
                    tracing::warn!(code = %code, error = %e, "promo validation failed");
                    promo_error = Some(e.to_string());
                }
            }
        }
    } else {
        errors = validate_booking_form(&form.full_name, &form.email, form.agreed());
        if !errors.is_empty() {
            status = StatusCode::UNPROCESSABLE_ENTITY;
        } else {
            let data = form.booking_data(&experience.id, &slot.id, params.quantity);
            match state.api.create_booking(&data, &idempotency_key).await {
                Ok(booking) => {
                    tracing::info!(reference = %booking.booking_reference, "booking created");
                    return Ok(Redirect::to(&confirmation_url(&booking.booking_reference)).into_response());
                }
                Err(e) => {
                    tracing::error!(error = %e, slot_id = %slot.id, "failed to create booking");
                    status = match &e {
                        ApiError::Status { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                        ApiError::Transport { .. } => StatusCode::BAD_GATEWAY,
                    };
                    // A rejection ends the attempt; after a transport failure the
                    // outcome is unknown, so a retry must reuse the same key.
                    if matches!(e, ApiError::Status { .. }) {
                        idempotency_key = Uuid::new_v4().to_string();
                    }
                    submit_error = Some(e.to_string());
                }
            }
        }
    }

    let page = pages::checkout_page(&CheckoutView {
        experience: &experience,
        slot: &slot,
        quantity: params.quantity,
        form: &form,
        idempotency_key: &idempotency_key,
        errors: &errors,
        applied: applied.as_ref(),
        promo_error: promo_error.as_deref(),
        submit_error: submit_error.as_deref(),
    });

    Ok((status, page).into_response())
}
