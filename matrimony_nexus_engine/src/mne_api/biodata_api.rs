//! Unified API for accessing biodatas.

use std::fmt::Debug;

use log::trace;

use crate::{
    db_types::{Biodata, BiodataUpdate, NewBiodata},
    mne_api::biodata_objects::{BiodataQueryFilter, BiodataSearchResult},
    traits::{BiodataError, BiodataManagement, InsertRecordResult},
};

/// The `BiodataApi` provides a unified API for accessing candidate profiles.
pub struct BiodataApi<B> {
    db: B,
}

impl<B: Debug> Debug for BiodataApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BiodataApi ({:?})", self.db)
    }
}

impl<B> BiodataApi<B>
where B: BiodataManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    pub async fn search(&self, query: BiodataQueryFilter) -> Result<BiodataSearchResult, BiodataError> {
        trace!("Searching biodatas with [{query}]");
        self.db.search_biodatas(query).await
    }

    pub async fn biodata_by_id(&self, biodata_id: i64) -> Result<Option<Biodata>, BiodataError> {
        self.db.fetch_biodata_by_id(biodata_id).await
    }

    pub async fn create_biodata(&self, biodata: NewBiodata) -> Result<InsertRecordResult, BiodataError> {
        self.db.insert_biodata(biodata).await
    }

    pub async fn update_biodata(&self, biodata_id: i64, update: BiodataUpdate) -> Result<bool, BiodataError> {
        self.db.update_biodata(biodata_id, update).await
    }

    pub async fn delete_biodata(&self, biodata_id: i64) -> Result<bool, BiodataError> {
        self.db.delete_biodata(biodata_id).await
    }
}
