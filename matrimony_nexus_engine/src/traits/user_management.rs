use thiserror::Error;

use crate::{
    db_types::{NewUser, UpdateResult, User},
    traits::InsertRecordResult,
};

#[derive(Debug, Clone, Error)]
pub enum UserAccountError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("User not found: {0}")]
    UserNotFound(String),
}

impl From<sqlx::Error> for UserAccountError {
    fn from(e: sqlx::Error) -> Self {
        UserAccountError::DatabaseError(e.to_string())
    }
}

/// The `UserManagement` trait defines behaviour for managing user accounts.
///
/// A user's `role` and premium flags are independent columns. The authorization pipeline in the server re-reads the
/// persisted role through [`fetch_user_by_email`](UserManagement::fetch_user_by_email) on every admin-gated call, so
/// role changes take effect immediately, even for bearer tokens issued before the change.
#[allow(async_fn_in_trait)]
pub trait UserManagement {
    async fn fetch_all_users(&self) -> Result<Vec<User>, UserAccountError>;

    /// Fetches the user with the given email. If no user exists, `None` is returned.
    async fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, UserAccountError>;

    /// Inserts the user if no user with the same email exists yet. The duplicate check and the insert run on the
    /// same connection, but are not atomic.
    async fn insert_user(&self, user: NewUser) -> Result<InsertRecordResult, UserAccountError>;

    /// Marks the user as premium (self-requested) and clears the admin approval flag. Returns `false` if no user
    /// with that id exists.
    async fn request_premium(&self, user_id: i64) -> Result<bool, UserAccountError>;

    /// Fetches users that have requested premium but have not been approved yet.
    async fn fetch_pending_premium_users(&self) -> Result<Vec<User>, UserAccountError>;

    /// Sets the user's role to `admin`.
    async fn set_admin_role(&self, user_id: i64) -> Result<UpdateResult, UserAccountError>;

    /// Sets the user's self-requested premium flag.
    async fn set_premium(&self, user_id: i64) -> Result<UpdateResult, UserAccountError>;

    /// Grants the admin-approved premium status.
    async fn approve_premium(&self, user_id: i64) -> Result<UpdateResult, UserAccountError>;
}
