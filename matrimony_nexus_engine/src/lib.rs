//! Matrimony Nexus Engine
//!
//! The Matrimony Nexus Engine is the persistence layer for the Matrimony Nexus matchmaking platform. It manages
//! user accounts, candidate profiles ("biodatas"), contact-reveal requests, favorites, payment records, success
//! stories and the aggregate statistics derived from them.
//!
//! The library is divided into two main sections:
//! 1. Database management and control ([`mod@sqlite`]). SQLite is the only supported backend at present. You should
//!    never need to access the database directly. Instead, use the public API provided by the engine. The exception
//!    is the data types used in the database. These are defined in the [`mod@db_types`] module and are public.
//! 2. The engine public API ([`mod@mne_api`]). This provides thin, typed facades over the backend traits, one per
//!    concern. Specific backends need to implement the traits in [`mod@traits`] in order to act as a backend for the
//!    Matrimony Nexus Server.
pub mod db_types;
pub mod helpers;
pub mod mne_api;
pub mod traits;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDatabase;
pub use mne_api::{
    biodata_objects::{BiodataQueryFilter, BiodataSearchResult},
    BiodataApi,
    ContactRequestApi,
    FavoriteApi,
    PaymentApi,
    StatsApi,
    SuccessStoryApi,
    UserApi,
};
