//! SQLite database module for the Matrimony Nexus Engine.
mod sqlite_impl;

pub mod db;

pub use sqlite_impl::SqliteDatabase;
