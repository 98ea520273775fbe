use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outbound booking request, built once per submission attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingData {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub experience_id: String,
    pub slot_id: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
    pub agreed_to_terms: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    pub booking_reference: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub experience_id: String,
    pub slot_id: String,
    pub quantity: u32,
    #[serde(default)]
    pub promo_code: Option<String>,
    #[serde(default)]
    pub agreed_to_terms: bool,
    pub date: DateTime<Utc>,
    pub time: String,
    pub subtotal: f64,
    pub taxes: f64,
    #[serde(default)]
    pub discount: Option<f64>,
    pub total: f64,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    Refunded,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}
