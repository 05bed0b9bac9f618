//! Unified API for accessing contact-reveal requests.

use std::fmt::Debug;

use serde_json::Value;

use crate::{
    db_types::{ContactRequest, NewContactRequest, UpdateResult},
    traits::{ContactRequestError, ContactRequestManagement},
};

/// The `ContactRequestApi` provides a unified API for accessing contact-reveal requests.
pub struct ContactRequestApi<B> {
    db: B,
}

impl<B: Debug> Debug for ContactRequestApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ContactRequestApi ({:?})", self.db)
    }
}

impl<B> ContactRequestApi<B>
where B: ContactRequestManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    pub async fn all_requests(&self) -> Result<Vec<ContactRequest>, ContactRequestError> {
        self.db.fetch_all_contact_requests().await
    }

    /// Fetches the requests made by the given email, merged with the biodata each references. The merge overlays the
    /// biodata's fields onto the request's, with biodata fields winning on key overlap. Requests whose biodata is
    /// missing pass through unchanged.
    pub async fn requests_for_email(&self, email: &str) -> Result<Vec<Value>, ContactRequestError> {
        let rows = self.db.fetch_contact_requests_for_email(email).await?;
        let merged = rows
            .into_iter()
            .map(|(request, biodata)| {
                let mut doc = serde_json::to_value(&request).unwrap_or(Value::Null);
                if let (Value::Object(doc), Some(biodata)) = (&mut doc, biodata) {
                    if let Ok(Value::Object(fields)) = serde_json::to_value(&biodata) {
                        doc.extend(fields);
                    }
                }
                doc
            })
            .collect();
        Ok(merged)
    }

    pub async fn create_request(&self, request: NewContactRequest) -> Result<i64, ContactRequestError> {
        self.db.insert_contact_request(request).await
    }

    pub async fn approve_request(&self, request_id: i64) -> Result<UpdateResult, ContactRequestError> {
        self.db.approve_contact_request(request_id).await
    }

    pub async fn delete_request(&self, request_id: i64) -> Result<bool, ContactRequestError> {
        self.db.delete_contact_request(request_id).await
    }
}
