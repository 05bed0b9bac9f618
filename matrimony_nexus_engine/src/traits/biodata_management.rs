use thiserror::Error;

use crate::{
    db_types::{Biodata, BiodataUpdate, NewBiodata},
    mne_api::biodata_objects::{BiodataQueryFilter, BiodataSearchResult},
    traits::InsertRecordResult,
};

#[derive(Debug, Clone, Error)]
pub enum BiodataError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("User error constructing query: {0}")]
    QueryError(String),
}

impl From<sqlx::Error> for BiodataError {
    fn from(e: sqlx::Error) -> Self {
        BiodataError::DatabaseError(e.to_string())
    }
}

/// The `BiodataManagement` trait defines behaviour for managing candidate profiles.
///
/// Biodata ids are sequential and assigned at insert time by reading the current maximum and adding one. The
/// backend must do this inside a single statement so that concurrent inserts cannot be handed the same id.
#[allow(async_fn_in_trait)]
pub trait BiodataManagement {
    /// Searches biodatas according to the given filter. The result carries the page of matching records along with
    /// the total number of matches before pagination.
    async fn search_biodatas(&self, query: BiodataQueryFilter) -> Result<BiodataSearchResult, BiodataError>;

    /// Fetches the biodata with the given id. If no biodata exists, `None` is returned.
    async fn fetch_biodata_by_id(&self, biodata_id: i64) -> Result<Option<Biodata>, BiodataError>;

    /// Inserts a new biodata, assigning the next sequential id, unless a biodata already exists for the same
    /// contact email.
    async fn insert_biodata(&self, biodata: NewBiodata) -> Result<InsertRecordResult, BiodataError>;

    /// Applies the given partial update to the biodata. Returns `false` if no biodata with that id exists.
    async fn update_biodata(&self, biodata_id: i64, update: BiodataUpdate) -> Result<bool, BiodataError>;

    /// Deletes the biodata with the given id. Returns `false` if no biodata with that id exists.
    async fn delete_biodata(&self, biodata_id: i64) -> Result<bool, BiodataError>;
}
