use std::sync::OnceLock;

use regex::Regex;

/// Per-field messages for the checkout form. Empty means the form may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub full_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub agreed_to_terms: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.email.is_none() && self.agreed_to_terms.is_none()
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").unwrap())
}

pub fn is_plausible_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

pub fn validate_booking_form(full_name: &str, email: &str, agreed_to_terms: bool) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if full_name.trim().is_empty() {
        errors.full_name = Some("Full name is required");
    }

    if email.trim().is_empty() {
        errors.email = Some("Email is required");
    } else if !is_plausible_email(email) {
        errors.email = Some("Email is invalid");
    }

    if !agreed_to_terms {
        errors.agreed_to_terms = Some("You must agree to the terms and policy");
    }

    errors
}
