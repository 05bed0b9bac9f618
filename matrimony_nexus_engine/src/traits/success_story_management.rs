use thiserror::Error;

use crate::db_types::{NewSuccessStory, SuccessStory};

#[derive(Debug, Clone, Error)]
pub enum SuccessStoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for SuccessStoryError {
    fn from(e: sqlx::Error) -> Self {
        SuccessStoryError::DatabaseError(e.to_string())
    }
}

/// The `SuccessStoryManagement` trait defines behaviour for managing testimonials. Stories are free-form; nothing is
/// validated beyond the shape of the record.
#[allow(async_fn_in_trait)]
pub trait SuccessStoryManagement {
    /// Fetches all stories in insertion order.
    async fn fetch_all_success_stories(&self) -> Result<Vec<SuccessStory>, SuccessStoryError>;

    /// Inserts a story and returns its id.
    async fn insert_success_story(&self, story: NewSuccessStory) -> Result<i64, SuccessStoryError>;
}
