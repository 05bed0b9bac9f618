use log::debug;
use sqlx::SqliteConnection;

use crate::{
    db_types::{NewUser, UpdateResult, User},
    traits::{InsertRecordResult, UserAccountError},
};

pub async fn fetch_all_users(conn: &mut SqliteConnection) -> Result<Vec<User>, UserAccountError> {
    let users = sqlx::query_as("SELECT * FROM users ORDER BY id").fetch_all(conn).await?;
    Ok(users)
}

pub async fn fetch_user_by_email(email: &str, conn: &mut SqliteConnection) -> Result<Option<User>, UserAccountError> {
    let user = sqlx::query_as("SELECT * FROM users WHERE email = $1 ORDER BY id LIMIT 1")
        .bind(email)
        .fetch_optional(conn)
        .await?;
    Ok(user)
}

/// Inserts the user unless a user with the same email already exists. Check and insert run on the same connection
/// but are not atomic; run inside a transaction if that matters to the caller.
pub async fn insert_user_if_absent(
    user: NewUser,
    conn: &mut SqliteConnection,
) -> Result<InsertRecordResult, UserAccountError> {
    if fetch_user_by_email(&user.email, &mut *conn).await?.is_some() {
        debug!("🧑️ User with email {} already exists. Nothing to do", user.email);
        return Ok(InsertRecordResult::AlreadyExists);
    }
    let result = sqlx::query("INSERT INTO users (name, email) VALUES ($1, $2)")
        .bind(user.name)
        .bind(user.email)
        .execute(conn)
        .await?;
    Ok(InsertRecordResult::Inserted(result.last_insert_rowid()))
}

/// Marks the user as premium and clears the approval flag. Returns `false` if no row changed, so a repeated
/// request reads the same as one for an unknown user.
pub async fn request_premium(user_id: i64, conn: &mut SqliteConnection) -> Result<bool, UserAccountError> {
    let result = sqlx::query(
        "UPDATE users SET premium = 1, approved_premium = 0 WHERE id = $1 AND (premium != 1 OR approved_premium != 0)",
    )
    .bind(user_id)
    .execute(conn)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn fetch_pending_premium_users(conn: &mut SqliteConnection) -> Result<Vec<User>, UserAccountError> {
    let users = sqlx::query_as("SELECT * FROM users WHERE premium = 1 AND approved_premium != 1 ORDER BY id")
        .fetch_all(conn)
        .await?;
    Ok(users)
}

pub async fn set_admin_role(user_id: i64, conn: &mut SqliteConnection) -> Result<UpdateResult, UserAccountError> {
    update_user_field(user_id, "UPDATE users SET role = 'admin' WHERE id = $1 AND role IS NOT 'admin'", conn).await
}

pub async fn set_premium(user_id: i64, conn: &mut SqliteConnection) -> Result<UpdateResult, UserAccountError> {
    update_user_field(user_id, "UPDATE users SET premium = 1 WHERE id = $1 AND premium != 1", conn).await
}

pub async fn approve_premium(user_id: i64, conn: &mut SqliteConnection) -> Result<UpdateResult, UserAccountError> {
    update_user_field(user_id, "UPDATE users SET approved_premium = 1 WHERE id = $1 AND approved_premium != 1", conn)
        .await
}

/// Runs a single-user UPDATE statement and reports the result in the matched/modified shape the API exposes. Each
/// statement carries a value guard on top of the id match, so `rows_affected` only counts rows that actually
/// changed while `matched_count` still counts every row the id hit.
async fn update_user_field(
    user_id: i64,
    sql: &str,
    conn: &mut SqliteConnection,
) -> Result<UpdateResult, UserAccountError> {
    let matched: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = $1").bind(user_id).fetch_one(&mut *conn).await?;
    let result = sqlx::query(sql).bind(user_id).execute(conn).await?;
    Ok(UpdateResult::new(matched as u64, result.rows_affected()))
}
