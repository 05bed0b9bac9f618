//! Unified API for accessing user accounts.

use std::fmt::Debug;

use crate::{
    db_types::{NewUser, UpdateResult, User},
    traits::{InsertRecordResult, UserAccountError, UserManagement},
};

/// The `UserApi` provides a unified API for accessing user accounts.
pub struct UserApi<B> {
    db: B,
}

impl<B: Debug> Debug for UserApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UserApi ({:?})", self.db)
    }
}

impl<B> UserApi<B>
where B: UserManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    pub async fn all_users(&self) -> Result<Vec<User>, UserAccountError> {
        self.db.fetch_all_users().await
    }

    pub async fn user_by_email(&self, email: &str) -> Result<Option<User>, UserAccountError> {
        self.db.fetch_user_by_email(email).await
    }

    /// Checks whether the user behind the given email currently holds the admin role. Missing users are simply not
    /// admins.
    pub async fn is_admin(&self, email: &str) -> Result<bool, UserAccountError> {
        let user = self.db.fetch_user_by_email(email).await?;
        Ok(user.map(|u| u.is_admin()).unwrap_or(false))
    }

    pub async fn register_user(&self, user: NewUser) -> Result<InsertRecordResult, UserAccountError> {
        self.db.insert_user(user).await
    }

    pub async fn request_premium(&self, user_id: i64) -> Result<bool, UserAccountError> {
        self.db.request_premium(user_id).await
    }

    pub async fn pending_premium_users(&self) -> Result<Vec<User>, UserAccountError> {
        self.db.fetch_pending_premium_users().await
    }

    pub async fn make_admin(&self, user_id: i64) -> Result<UpdateResult, UserAccountError> {
        self.db.set_admin_role(user_id).await
    }

    pub async fn make_premium(&self, user_id: i64) -> Result<UpdateResult, UserAccountError> {
        self.db.set_premium(user_id).await
    }

    pub async fn approve_premium(&self, user_id: i64) -> Result<UpdateResult, UserAccountError> {
        self.db.approve_premium(user_id).await
    }
}
