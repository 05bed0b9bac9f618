use log::debug;
use sqlx::SqliteConnection;

use crate::{
    db_types::{Favorite, NewFavorite},
    traits::{FavoriteError, InsertRecordResult},
};

pub async fn fetch_all_favorites(conn: &mut SqliteConnection) -> Result<Vec<Favorite>, FavoriteError> {
    let favorites = sqlx::query_as("SELECT * FROM favorites ORDER BY id").fetch_all(conn).await?;
    Ok(favorites)
}

pub async fn fetch_favorites_for_user(
    user_id: &str,
    conn: &mut SqliteConnection,
) -> Result<Vec<Favorite>, FavoriteError> {
    let favorites =
        sqlx::query_as("SELECT * FROM favorites WHERE user_id = $1 ORDER BY id").bind(user_id).fetch_all(conn).await?;
    Ok(favorites)
}

/// Inserts the favorite unless an identical one exists. The duplicate check matches on every field, not just the
/// (biodata, user) pair. `IS` comparisons keep NULL display fields comparable.
pub async fn insert_favorite_if_absent(
    favorite: NewFavorite,
    conn: &mut SqliteConnection,
) -> Result<InsertRecordResult, FavoriteError> {
    let existing: Option<i64> = sqlx::query_scalar(
        r#"
        SELECT id FROM favorites
        WHERE biodata_id = $1 AND user_id = $2 AND name IS $3 AND permanent_division IS $4 AND occupation IS $5
        LIMIT 1
        "#,
    )
    .bind(favorite.biodata_id)
    .bind(&favorite.user_id)
    .bind(&favorite.name)
    .bind(&favorite.permanent_division)
    .bind(&favorite.occupation)
    .fetch_optional(&mut *conn)
    .await?;
    if existing.is_some() {
        debug!("⭐️ Favorite for biodata {} already exists. Nothing to do", favorite.biodata_id);
        return Ok(InsertRecordResult::AlreadyExists);
    }
    let result = sqlx::query(
        r#"
        INSERT INTO favorites (user_id, biodata_id, name, permanent_division, occupation)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(favorite.user_id)
    .bind(favorite.biodata_id)
    .bind(favorite.name)
    .bind(favorite.permanent_division)
    .bind(favorite.occupation)
    .execute(conn)
    .await?;
    Ok(InsertRecordResult::Inserted(result.last_insert_rowid()))
}

/// Deletes one favorite referencing the given biodata id.
pub async fn delete_favorite_by_biodata_id(biodata_id: i64, conn: &mut SqliteConnection) -> Result<bool, FavoriteError> {
    let result = sqlx::query(
        "DELETE FROM favorites WHERE id = (SELECT id FROM favorites WHERE biodata_id = $1 ORDER BY id LIMIT 1)",
    )
    .bind(biodata_id)
    .execute(conn)
    .await?;
    Ok(result.rows_affected() > 0)
}
