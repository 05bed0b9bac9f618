//! Unified API for accessing payment records.

use std::fmt::Debug;

use crate::{
    db_types::{NewPaymentRecord, PaymentRecord},
    traits::{PaymentError, PaymentManagement},
};

/// The `PaymentApi` provides a unified API for accessing payment records.
pub struct PaymentApi<B> {
    db: B,
}

impl<B: Debug> Debug for PaymentApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PaymentApi ({:?})", self.db)
    }
}

impl<B> PaymentApi<B>
where B: PaymentManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    pub async fn payments_for_email(&self, email: &str) -> Result<Vec<PaymentRecord>, PaymentError> {
        self.db.fetch_payments_for_email(email).await
    }

    pub async fn record_payment(&self, payment: NewPaymentRecord) -> Result<i64, PaymentError> {
        self.db.insert_payment(payment).await
    }
}
