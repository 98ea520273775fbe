use serde::Deserialize;

use super::{AppliedPromo, BookingData, PromoValidationResponse};

/// Everything the checkout form posts back. Fields the browser left out
/// deserialize as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutForm {
    pub exp_id: String,
    pub slot_id: String,
    pub qty: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub promo_code: String,
    /// Checkbox value; present only when ticked.
    pub agreed_to_terms: Option<String>,
    pub applied_promo_code: String,
    pub applied_discount: String,
    pub applied_message: String,
    pub idempotency_key: String,
    pub intent: String,
}

impl CheckoutForm {
    pub fn agreed(&self) -> bool {
        self.agreed_to_terms.is_some()
    }

    /// The promo applied on an earlier render, as long as the code field
    /// still holds the exact text it was applied for.
    pub fn applied_promo(&self) -> Option<AppliedPromo> {
        if self.applied_promo_code.is_empty() {
            return None;
        }
        let applied = AppliedPromo {
            code: self.applied_promo_code.clone(),
            response: PromoValidationResponse {
                is_valid: true,
                message: self.applied_message.clone(),
                subtotal: None,
                discount_amount: self.applied_discount.parse().ok(),
                total: None,
            },
        };
        applied.matches(&self.promo_code).then_some(applied)
    }

    pub fn booking_data(&self, experience_id: &str, slot_id: &str, quantity: u32) -> BookingData {
        let non_empty = |s: &str| Some(s.trim().to_string()).filter(|s| !s.is_empty());
        BookingData {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: non_empty(&self.phone),
            experience_id: experience_id.to_string(),
            slot_id: slot_id.to_string(),
            quantity,
            promo_code: non_empty(&self.promo_code),
            agreed_to_terms: self.agreed(),
        }
    }
}
