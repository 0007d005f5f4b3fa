use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::PaymentStatus;

/// Which service a checkout line bills for
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Room,
    Food,
    Car,
    CustomFood,
}

/// One billed service on a checkout session. `details` is a free-form blob
/// whose shape depends on `service_type`, so it stays untyped here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub service_id: String,
    pub service_model: String,
    pub description: String,
    pub amount: f64,
    pub status: String,
    pub added_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CheckoutStatus {
    Active,
    Completed,
    Cancelled,
}

/// A stay-wide bill aggregating every service consumed between check-in and
/// check-out
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: DateTime<Utc>,
    pub number_of_nights: u32,
    pub services: Vec<ServiceItem>,
    pub subtotal: f64,
    pub taxes: f64,
    pub total_amount: f64,
    pub status: CheckoutStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `POST /checkout/complete`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompleteCheckout {
    pub checkout_id: String,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Aggregate figures for the admin checkout dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutStats {
    pub total_sessions: u64,
    pub active_sessions: u64,
    pub completed_sessions: u64,
    pub total_revenue: f64,
}
