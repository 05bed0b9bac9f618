use thiserror::Error;

use crate::db_types::{NewPaymentRecord, PaymentRecord};

#[derive(Debug, Clone, Error)]
pub enum PaymentError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for PaymentError {
    fn from(e: sqlx::Error) -> Self {
        PaymentError::DatabaseError(e.to_string())
    }
}

/// The `PaymentManagement` trait defines behaviour for recording and querying payments.
///
/// Payment records are written after the payment processor has already settled the charge. There is no transactional
/// link between a payment record and the contact request it pays for.
#[allow(async_fn_in_trait)]
pub trait PaymentManagement {
    async fn fetch_payments_for_email(&self, email: &str) -> Result<Vec<PaymentRecord>, PaymentError>;

    /// Persists a payment record and returns its id.
    async fn insert_payment(&self, payment: NewPaymentRecord) -> Result<i64, PaymentError>;
}
