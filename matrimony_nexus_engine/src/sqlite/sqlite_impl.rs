//! `SqliteDatabase` is a concrete implementation of a Matrimony Nexus Engine backend.
//!
//! Unsurprisingly, it uses SQLite as the backend and implements all the traits defined in the [`crate::traits`]
//! module.
use std::fmt::Debug;

use log::*;
use sqlx::SqlitePool;

use super::db::{biodatas, contact_requests, db_url, favorites, new_pool, payments, stats, success_stories, users};
use crate::{
    db_types::{
        Biodata,
        BiodataUpdate,
        ChartStats,
        ContactRequest,
        DashboardStats,
        Favorite,
        NewBiodata,
        NewContactRequest,
        NewFavorite,
        NewPaymentRecord,
        NewSuccessStory,
        NewUser,
        PaymentRecord,
        SuccessStory,
        UpdateResult,
        User,
    },
    mne_api::biodata_objects::{BiodataQueryFilter, BiodataSearchResult},
    traits::{
        BiodataError,
        BiodataManagement,
        ContactRequestError,
        ContactRequestManagement,
        FavoriteError,
        FavoriteManagement,
        InsertRecordResult,
        PaymentError,
        PaymentManagement,
        StatsError,
        StatsManagement,
        SuccessStoryError,
        SuccessStoryManagement,
        UserAccountError,
        UserManagement,
    },
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl SqliteDatabase {
    /// Creates a new database API object, taking the url from the environment (or the default).
    pub async fn new(max_connections: u32) -> Result<Self, sqlx::Error> {
        let url = db_url();
        SqliteDatabase::new_with_url(url.as_str(), max_connections).await
    }

    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        trace!("Creating new database connection pool with url {url}");
        let pool = new_pool(url, max_connections).await?;
        let url = url.to_string();
        Ok(Self { url, pool })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Returns a reference to the database connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Brings the schema up to date with the migrations embedded in this crate.
    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("./src/sqlite/migrations").run(&self.pool).await.map_err(|e| sqlx::Error::Migrate(Box::new(e)))?;
        info!("🗃️ Migrations complete");
        Ok(())
    }
}

impl UserManagement for SqliteDatabase {
    async fn fetch_all_users(&self) -> Result<Vec<User>, UserAccountError> {
        let mut conn = self.pool.acquire().await?;
        users::fetch_all_users(&mut conn).await
    }

    async fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, UserAccountError> {
        let mut conn = self.pool.acquire().await?;
        users::fetch_user_by_email(email, &mut conn).await
    }

    async fn insert_user(&self, user: NewUser) -> Result<InsertRecordResult, UserAccountError> {
        let mut tx = self.pool.begin().await?;
        let result = users::insert_user_if_absent(user, &mut tx).await?;
        tx.commit().await?;
        Ok(result)
    }

    async fn request_premium(&self, user_id: i64) -> Result<bool, UserAccountError> {
        let mut conn = self.pool.acquire().await?;
        users::request_premium(user_id, &mut conn).await
    }

    async fn fetch_pending_premium_users(&self) -> Result<Vec<User>, UserAccountError> {
        let mut conn = self.pool.acquire().await?;
        users::fetch_pending_premium_users(&mut conn).await
    }

    async fn set_admin_role(&self, user_id: i64) -> Result<UpdateResult, UserAccountError> {
        let mut tx = self.pool.begin().await?;
        let result = users::set_admin_role(user_id, &mut tx).await?;
        tx.commit().await?;
        debug!("🧑️ User {user_id} given the admin role ({result:?})");
        Ok(result)
    }

    async fn set_premium(&self, user_id: i64) -> Result<UpdateResult, UserAccountError> {
        let mut tx = self.pool.begin().await?;
        let result = users::set_premium(user_id, &mut tx).await?;
        tx.commit().await?;
        Ok(result)
    }

    async fn approve_premium(&self, user_id: i64) -> Result<UpdateResult, UserAccountError> {
        let mut tx = self.pool.begin().await?;
        let result = users::approve_premium(user_id, &mut tx).await?;
        tx.commit().await?;
        debug!("🧑️ Premium status approved for user {user_id} ({result:?})");
        Ok(result)
    }
}

impl BiodataManagement for SqliteDatabase {
    async fn search_biodatas(&self, query: BiodataQueryFilter) -> Result<BiodataSearchResult, BiodataError> {
        let mut conn = self.pool.acquire().await?;
        biodatas::search_biodatas(query, &mut conn).await
    }

    async fn fetch_biodata_by_id(&self, biodata_id: i64) -> Result<Option<Biodata>, BiodataError> {
        let mut conn = self.pool.acquire().await?;
        biodatas::fetch_biodata_by_id(biodata_id, &mut conn).await
    }

    async fn insert_biodata(&self, biodata: NewBiodata) -> Result<InsertRecordResult, BiodataError> {
        let mut tx = self.pool.begin().await?;
        let result = biodatas::insert_biodata_if_absent(biodata, &mut tx).await?;
        tx.commit().await?;
        Ok(result)
    }

    async fn update_biodata(&self, biodata_id: i64, update: BiodataUpdate) -> Result<bool, BiodataError> {
        let mut conn = self.pool.acquire().await?;
        biodatas::update_biodata(biodata_id, update, &mut conn).await
    }

    async fn delete_biodata(&self, biodata_id: i64) -> Result<bool, BiodataError> {
        let mut conn = self.pool.acquire().await?;
        biodatas::delete_biodata(biodata_id, &mut conn).await
    }
}

impl ContactRequestManagement for SqliteDatabase {
    async fn fetch_all_contact_requests(&self) -> Result<Vec<ContactRequest>, ContactRequestError> {
        let mut conn = self.pool.acquire().await?;
        contact_requests::fetch_all_contact_requests(&mut conn).await
    }

    async fn fetch_contact_requests_for_email(
        &self,
        email: &str,
    ) -> Result<Vec<(ContactRequest, Option<Biodata>)>, ContactRequestError> {
        let mut conn = self.pool.acquire().await?;
        contact_requests::fetch_contact_requests_for_email(email, &mut conn).await
    }

    async fn insert_contact_request(&self, request: NewContactRequest) -> Result<i64, ContactRequestError> {
        let mut conn = self.pool.acquire().await?;
        contact_requests::insert_contact_request(request, &mut conn).await
    }

    async fn approve_contact_request(&self, request_id: i64) -> Result<UpdateResult, ContactRequestError> {
        let mut tx = self.pool.begin().await?;
        let result = contact_requests::approve_contact_request(request_id, &mut tx).await?;
        tx.commit().await?;
        Ok(result)
    }

    async fn delete_contact_request(&self, request_id: i64) -> Result<bool, ContactRequestError> {
        let mut conn = self.pool.acquire().await?;
        contact_requests::delete_contact_request(request_id, &mut conn).await
    }
}

impl FavoriteManagement for SqliteDatabase {
    async fn fetch_all_favorites(&self) -> Result<Vec<Favorite>, FavoriteError> {
        let mut conn = self.pool.acquire().await?;
        favorites::fetch_all_favorites(&mut conn).await
    }

    async fn fetch_favorites_for_user(&self, user_id: &str) -> Result<Vec<Favorite>, FavoriteError> {
        let mut conn = self.pool.acquire().await?;
        favorites::fetch_favorites_for_user(user_id, &mut conn).await
    }

    async fn insert_favorite(&self, favorite: NewFavorite) -> Result<InsertRecordResult, FavoriteError> {
        let mut tx = self.pool.begin().await?;
        let result = favorites::insert_favorite_if_absent(favorite, &mut tx).await?;
        tx.commit().await?;
        Ok(result)
    }

    async fn delete_favorite_by_biodata_id(&self, biodata_id: i64) -> Result<bool, FavoriteError> {
        let mut conn = self.pool.acquire().await?;
        favorites::delete_favorite_by_biodata_id(biodata_id, &mut conn).await
    }
}

impl PaymentManagement for SqliteDatabase {
    async fn fetch_payments_for_email(&self, email: &str) -> Result<Vec<PaymentRecord>, PaymentError> {
        let mut conn = self.pool.acquire().await?;
        payments::fetch_payments_for_email(email, &mut conn).await
    }

    async fn insert_payment(&self, payment: NewPaymentRecord) -> Result<i64, PaymentError> {
        let mut conn = self.pool.acquire().await?;
        payments::insert_payment(payment, &mut conn).await
    }
}

impl StatsManagement for SqliteDatabase {
    async fn fetch_dashboard_stats(&self) -> Result<DashboardStats, StatsError> {
        let mut conn = self.pool.acquire().await?;
        stats::fetch_dashboard_stats(&mut conn).await
    }

    async fn fetch_chart_stats(&self) -> Result<ChartStats, StatsError> {
        let mut conn = self.pool.acquire().await?;
        stats::fetch_chart_stats(&mut conn).await
    }
}

impl SuccessStoryManagement for SqliteDatabase {
    async fn fetch_all_success_stories(&self) -> Result<Vec<SuccessStory>, SuccessStoryError> {
        let mut conn = self.pool.acquire().await?;
        success_stories::fetch_all_success_stories(&mut conn).await
    }

    async fn insert_success_story(&self, story: NewSuccessStory) -> Result<i64, SuccessStoryError> {
        let mut conn = self.pool.acquire().await?;
        success_stories::insert_success_story(story, &mut conn).await
    }
}
