use thiserror::Error;

use crate::{
    db_types::{Favorite, NewFavorite},
    traits::InsertRecordResult,
};

#[derive(Debug, Clone, Error)]
pub enum FavoriteError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for FavoriteError {
    fn from(e: sqlx::Error) -> Self {
        FavoriteError::DatabaseError(e.to_string())
    }
}

/// The `FavoriteManagement` trait defines behaviour for managing biodata bookmarks.
#[allow(async_fn_in_trait)]
pub trait FavoriteManagement {
    async fn fetch_all_favorites(&self) -> Result<Vec<Favorite>, FavoriteError>;

    async fn fetch_favorites_for_user(&self, user_id: &str) -> Result<Vec<Favorite>, FavoriteError>;

    /// Inserts the favorite unless an identical one exists. The duplicate check matches on every denormalised field,
    /// not just the (biodata, user) pair. Clients only ever pass the biodata id here.
    async fn insert_favorite(&self, favorite: NewFavorite) -> Result<InsertRecordResult, FavoriteError>;

    /// Deletes one favorite referencing the given biodata id. Returns `false` if none exists.
    async fn delete_favorite_by_biodata_id(&self, biodata_id: i64) -> Result<bool, FavoriteError>;
}
