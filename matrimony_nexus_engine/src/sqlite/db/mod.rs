//! # SQLite database methods
//!
//! This module contains "low-level" SQLite database interactions.
//!
//! All these interactions are maintained by simple functions (rather than stateful structs) that accept a
//! `&mut SqliteConnection` argument. Callers can obtain a connection from a pool, or create an atomic transaction as
//! the need arises and call through to the functions without any other changes.
use std::env;

use log::info;
use sqlx::{sqlite::SqlitePoolOptions, Error as SqlxError, SqlitePool};

pub mod biodatas;
pub mod contact_requests;
pub mod favorites;
pub mod payments;
pub mod stats;
pub mod success_stories;
pub mod users;

const SQLITE_DB_URL: &str = "sqlite://data/matrimony_nexus.db";

pub fn db_url() -> String {
    let result = env::var("MNS_DATABASE_URL").unwrap_or_else(|_| {
        info!("🗃️ MNS_DATABASE_URL is not set. Using the default.");
        SQLITE_DB_URL.to_string()
    });
    info!("🗃️ Using database URL: {result}");
    result
}

pub async fn new_pool(url: &str, max_connections: u32) -> Result<SqlitePool, SqlxError> {
    let pool = SqlitePoolOptions::new().max_connections(max_connections).connect(url).await?;
    Ok(pool)
}

/// Creates the database file behind `url` if it does not exist yet. A no-op when it does.
pub async fn create_database_if_missing(url: &str) -> Result<(), SqlxError> {
    use sqlx::{migrate::MigrateDatabase, Sqlite};
    if !Sqlite::database_exists(url).await.unwrap_or(false) {
        info!("🗃️ Database {url} does not exist yet. Creating it.");
        Sqlite::create_database(url).await?;
    }
    Ok(())
}
