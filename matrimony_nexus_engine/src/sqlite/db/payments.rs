use log::debug;
use sqlx::SqliteConnection;

use crate::{
    db_types::{NewPaymentRecord, PaymentRecord},
    traits::PaymentError,
};

pub async fn fetch_payments_for_email(
    email: &str,
    conn: &mut SqliteConnection,
) -> Result<Vec<PaymentRecord>, PaymentError> {
    let payments =
        sqlx::query_as("SELECT * FROM payments WHERE email = $1 ORDER BY id").bind(email).fetch_all(conn).await?;
    Ok(payments)
}

pub async fn insert_payment(payment: NewPaymentRecord, conn: &mut SqliteConnection) -> Result<i64, PaymentError> {
    let result = sqlx::query(
        r#"
        INSERT INTO payments (email, price, transaction_id, biodata_id, status)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(payment.email)
    .bind(payment.price)
    .bind(payment.transaction_id)
    .bind(payment.biodata_id)
    .bind(payment.status)
    .execute(conn)
    .await?;
    let id = result.last_insert_rowid();
    debug!("💰️ Payment {id} recorded");
    Ok(id)
}
