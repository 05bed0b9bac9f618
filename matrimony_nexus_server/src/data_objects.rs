use std::fmt::Display;

use matrimony_nexus_engine::db_types::NewPaymentRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse {
    pub success: bool,
    pub message: String,
}

impl JsonResponse {
    pub fn success<S: Display>(message: S) -> Self {
        Self { success: true, message: message.to_string() }
    }

    pub fn failure<S: Display>(message: S) -> Self {
        Self { success: false, message: message.to_string() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PremiumRequestParams {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntentParams {
    /// The charge amount in decimal dollars.
    pub price: f64,
}

/// The body of a payment submission. Clients may send a `cartIds` array alongside the payment fields; it is accepted
/// and acknowledged but nothing is ever deleted (see the handler).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentParams {
    #[serde(flatten)]
    pub payment: NewPaymentRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart_ids: Option<Vec<Value>>,
}
