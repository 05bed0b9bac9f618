use log::debug;
use sqlx::SqliteConnection;

use crate::{
    db_types::{Biodata, ContactRequest, NewContactRequest, RequestStatus, UpdateResult},
    sqlite::db::biodatas,
    traits::ContactRequestError,
};

pub async fn fetch_all_contact_requests(
    conn: &mut SqliteConnection,
) -> Result<Vec<ContactRequest>, ContactRequestError> {
    let requests = sqlx::query_as("SELECT * FROM contact_requests ORDER BY id").fetch_all(conn).await?;
    Ok(requests)
}

/// Fetches the requests made by the given requester email, resolving the referenced biodata for each with one
/// dependent lookup per row. A missing biodata yields `None` rather than an error; there is no foreign key on
/// `biodata_id`.
pub async fn fetch_contact_requests_for_email(
    email: &str,
    conn: &mut SqliteConnection,
) -> Result<Vec<(ContactRequest, Option<Biodata>)>, ContactRequestError> {
    let requests: Vec<ContactRequest> = sqlx::query_as("SELECT * FROM contact_requests WHERE email = $1 ORDER BY id")
        .bind(email)
        .fetch_all(&mut *conn)
        .await?;
    let mut result = Vec::with_capacity(requests.len());
    for request in requests {
        let biodata = biodatas::fetch_biodata_by_id(request.biodata_id, &mut *conn)
            .await
            .map_err(|e| ContactRequestError::DatabaseError(e.to_string()))?;
        result.push((request, biodata));
    }
    Ok(result)
}

pub async fn insert_contact_request(
    request: NewContactRequest,
    conn: &mut SqliteConnection,
) -> Result<i64, ContactRequestError> {
    let status = request.status.unwrap_or(RequestStatus::Pending);
    let result = sqlx::query(
        r#"
        INSERT INTO contact_requests (biodata_id, name, email, payment_id, status, mobile_number)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(request.biodata_id)
    .bind(request.name)
    .bind(request.email)
    .bind(request.payment_id)
    .bind(status)
    .bind(request.mobile_number)
    .execute(conn)
    .await?;
    let id = result.last_insert_rowid();
    debug!("🙏️ Contact request {id} created");
    Ok(id)
}

pub async fn approve_contact_request(
    request_id: i64,
    conn: &mut SqliteConnection,
) -> Result<UpdateResult, ContactRequestError> {
    let matched: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_requests WHERE id = $1")
        .bind(request_id)
        .fetch_one(&mut *conn)
        .await?;
    // The status guard keeps `rows_affected` at zero for a no-op, so `modified_count` only counts real changes.
    let result = sqlx::query("UPDATE contact_requests SET status = $1 WHERE id = $2 AND status != $1")
        .bind(RequestStatus::Approved)
        .bind(request_id)
        .execute(conn)
        .await?;
    Ok(UpdateResult::new(matched as u64, result.rows_affected()))
}

pub async fn delete_contact_request(request_id: i64, conn: &mut SqliteConnection) -> Result<bool, ContactRequestError> {
    let result = sqlx::query("DELETE FROM contact_requests WHERE id = $1").bind(request_id).execute(conn).await?;
    Ok(result.rows_affected() > 0)
}
