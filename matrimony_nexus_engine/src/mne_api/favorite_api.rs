//! Unified API for accessing favorites.

use std::fmt::Debug;

use crate::{
    db_types::{Favorite, NewFavorite},
    traits::{FavoriteError, FavoriteManagement, InsertRecordResult},
};

/// The `FavoriteApi` provides a unified API for accessing biodata bookmarks.
pub struct FavoriteApi<B> {
    db: B,
}

impl<B: Debug> Debug for FavoriteApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FavoriteApi ({:?})", self.db)
    }
}

impl<B> FavoriteApi<B>
where B: FavoriteManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    pub async fn all_favorites(&self) -> Result<Vec<Favorite>, FavoriteError> {
        self.db.fetch_all_favorites().await
    }

    pub async fn favorites_for_user(&self, user_id: &str) -> Result<Vec<Favorite>, FavoriteError> {
        self.db.fetch_favorites_for_user(user_id).await
    }

    pub async fn add_favorite(&self, favorite: NewFavorite) -> Result<InsertRecordResult, FavoriteError> {
        self.db.insert_favorite(favorite).await
    }

    pub async fn remove_favorite(&self, biodata_id: i64) -> Result<bool, FavoriteError> {
        self.db.delete_favorite_by_biodata_id(biodata_id).await
    }
}
