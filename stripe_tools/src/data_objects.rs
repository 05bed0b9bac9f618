use serde::{Deserialize, Serialize};

/// The subset of a Stripe PaymentIntent object that the server cares about. Unknown fields in the API response are
/// ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
    pub amount: i64,
    pub currency: String,
    pub status: String,
    pub created: i64,
}
