use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoValidationRequest<'a> {
    pub code: &'a str,
    pub experience_id: &'a str,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromoValidationResponse {
    pub is_valid: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub subtotal: Option<f64>,
    #[serde(default)]
    pub discount_amount: Option<f64>,
    #[serde(default)]
    pub total: Option<f64>,
}

/// A promo the backend accepted, bound to the exact code text it was applied for.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedPromo {
    pub code: String,
    pub response: PromoValidationResponse,
}

impl AppliedPromo {
    pub fn discount(&self) -> f64 {
        self.response.discount_amount.unwrap_or(0.0)
    }

    /// Whether this promo still applies to the code currently typed in the form.
    pub fn matches(&self, code: &str) -> bool {
        self.code == code
    }
}
