//! Unified API for accessing success stories.

use std::fmt::Debug;

use crate::{
    db_types::{NewSuccessStory, SuccessStory},
    traits::{SuccessStoryError, SuccessStoryManagement},
};

/// The `SuccessStoryApi` provides a unified API for accessing testimonials.
pub struct SuccessStoryApi<B> {
    db: B,
}

impl<B: Debug> Debug for SuccessStoryApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SuccessStoryApi ({:?})", self.db)
    }
}

impl<B> SuccessStoryApi<B>
where B: SuccessStoryManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    pub async fn all_stories(&self) -> Result<Vec<SuccessStory>, SuccessStoryError> {
        self.db.fetch_all_success_stories().await
    }

    pub async fn add_story(&self, story: NewSuccessStory) -> Result<i64, SuccessStoryError> {
        self.db.insert_success_story(story).await
    }
}
