use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::db_types::Biodata;

pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Filter and pagination parameters for the biodata search. Field names follow the query-string parameters of the
/// HTTP surface, so this deserializes straight out of `web::Query`. Unrecognized parameters are ignored rather
/// than rejected.
///
/// Age and height bounds are only applied when both ends of the range are present; a lone `min_age` or `max_height`
/// is ignored. Height bounds are given in centimeters and are converted to total inches
/// before being compared against the derived `height_inches` column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiodataQueryFilter {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    /// Matches the biodata type ("Male"/"Female") exactly.
    pub gender: Option<String>,
    pub min_age: Option<i64>,
    pub max_age: Option<i64>,
    /// Lower height bound, in centimeters.
    pub min_height: Option<i64>,
    /// Upper height bound, in centimeters.
    pub max_height: Option<i64>,
    /// Matches the contact email exactly.
    pub email: Option<String>,
    pub permanent_division: Option<String>,
    pub biodata_id: Option<i64>,
}

impl BiodataQueryFilter {
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_gender<S: Into<String>>(mut self, gender: S) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_age_range(mut self, min_age: i64, max_age: i64) -> Self {
        self.min_age = Some(min_age);
        self.max_age = Some(max_age);
        self
    }

    pub fn with_height_range_cm(mut self, min_height: i64, max_height: i64) -> Self {
        self.min_height = Some(min_height);
        self.max_height = Some(max_height);
        self
    }

    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_permanent_division<S: Into<String>>(mut self, division: S) -> Self {
        self.permanent_division = Some(division.into());
        self
    }

    pub fn with_biodata_id(mut self, biodata_id: i64) -> Self {
        self.biodata_id = Some(biodata_id);
        self
    }

    /// True when no filter is set. Pagination parameters are not filters.
    pub fn is_empty(&self) -> bool {
        self.gender.is_none()
            && self.age_range().is_none()
            && self.height_range().is_none()
            && self.email.is_none()
            && self.permanent_division.is_none()
            && self.biodata_id.is_none()
    }

    /// The age range, if both bounds are present.
    pub fn age_range(&self) -> Option<(i64, i64)> {
        self.min_age.zip(self.max_age)
    }

    /// The height range in centimeters, if both bounds are present.
    pub fn height_range(&self) -> Option<(i64, i64)> {
        self.min_height.zip(self.max_height)
    }

    /// The 1-based page number, defaulting to the first page.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1)
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }
}

impl Display for BiodataQueryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "No filters.")?;
            return Ok(());
        }
        if let Some(gender) = &self.gender {
            write!(f, "gender: {gender}. ")?;
        }
        if let Some((min, max)) = self.age_range() {
            write!(f, "age: {min}-{max}. ")?;
        }
        if let Some((min, max)) = self.height_range() {
            write!(f, "height: {min}cm-{max}cm. ")?;
        }
        if let Some(email) = &self.email {
            write!(f, "email: {email}. ")?;
        }
        if let Some(division) = &self.permanent_division {
            write!(f, "division: {division}. ")?;
        }
        if let Some(id) = self.biodata_id {
            write!(f, "biodata_id: {id}. ")?;
        }
        Ok(())
    }
}

/// One page of search results, together with the total number of matches before pagination was applied.
#[derive(Debug, Clone, Serialize)]
pub struct BiodataSearchResult {
    pub data: Vec<Biodata>,
    pub total: i64,
}
