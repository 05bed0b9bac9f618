use thiserror::Error;

use crate::db_types::{Biodata, ContactRequest, NewContactRequest, UpdateResult};

#[derive(Debug, Clone, Error)]
pub enum ContactRequestError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for ContactRequestError {
    fn from(e: sqlx::Error) -> Self {
        ContactRequestError::DatabaseError(e.to_string())
    }
}

/// The `ContactRequestManagement` trait defines behaviour for managing contact-reveal requests.
///
/// Requests reference biodatas by id without foreign-key enforcement. The per-email listing resolves the referenced
/// biodata at read time with one dependent lookup per request row.
#[allow(async_fn_in_trait)]
pub trait ContactRequestManagement {
    async fn fetch_all_contact_requests(&self) -> Result<Vec<ContactRequest>, ContactRequestError>;

    /// Fetches the requests made by the given requester email, each paired with the biodata it references, or `None`
    /// when the biodata no longer exists.
    async fn fetch_contact_requests_for_email(
        &self,
        email: &str,
    ) -> Result<Vec<(ContactRequest, Option<Biodata>)>, ContactRequestError>;

    /// Inserts a new request and returns its id. The request status defaults to pending.
    async fn insert_contact_request(&self, request: NewContactRequest) -> Result<i64, ContactRequestError>;

    /// Marks the request as approved.
    async fn approve_contact_request(&self, request_id: i64) -> Result<UpdateResult, ContactRequestError>;

    /// Deletes the request. Returns `false` if no request with that id exists.
    async fn delete_contact_request(&self, request_id: i64) -> Result<bool, ContactRequestError>;
}
