use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use log::error;
use mns_common::UsdAmount;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use thiserror::Error;

pub const ADMIN_ROLE: &str = "admin";

//--------------------------------------        User        ----------------------------------------------------------
/// A registered platform user. `role`, `premium` and `approved_premium` are independent fields, not an enum:
/// `premium` is self-requested, `approved_premium` requires a prior admin action.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    pub role: Option<String>,
    pub premium: bool,
    pub approved_premium: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: String,
}

//--------------------------------------       Biodata       ---------------------------------------------------------
/// A candidate profile. `biodata_id` is the sequential public identifier (assigned max+1 at insert) and doubles as
/// the primary key. `height` keeps the feet/inches string as submitted; `height_inches` is derived from it at write time
/// and only exists to make height range filters numeric.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Biodata {
    pub biodata_id: i64,
    pub biodata_type: Option<String>,
    pub name: Option<String>,
    pub profile_image: Option<String>,
    pub date_of_birth: Option<String>,
    pub height: Option<String>,
    #[serde(skip_serializing)]
    pub height_inches: Option<i64>,
    pub weight: Option<String>,
    pub age: Option<i64>,
    pub occupation: Option<String>,
    pub race: Option<String>,
    pub fathers_name: Option<String>,
    pub mothers_name: Option<String>,
    pub permanent_division: Option<String>,
    pub present_division: Option<String>,
    pub expected_partner_age: Option<String>,
    pub expected_partner_height: Option<String>,
    pub expected_partner_weight: Option<String>,
    pub contact_email: String,
    pub mobile_number: Option<String>,
    pub premium: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBiodata {
    pub biodata_type: Option<String>,
    pub name: Option<String>,
    pub profile_image: Option<String>,
    pub date_of_birth: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub age: Option<i64>,
    pub occupation: Option<String>,
    pub race: Option<String>,
    pub fathers_name: Option<String>,
    pub mothers_name: Option<String>,
    pub permanent_division: Option<String>,
    pub present_division: Option<String>,
    pub expected_partner_age: Option<String>,
    pub expected_partner_height: Option<String>,
    pub expected_partner_weight: Option<String>,
    pub contact_email: String,
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub premium: bool,
}

/// A partial biodata update. Only fields that are present are written; everything else is left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiodataUpdate {
    pub biodata_type: Option<String>,
    pub name: Option<String>,
    pub profile_image: Option<String>,
    pub date_of_birth: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub age: Option<i64>,
    pub occupation: Option<String>,
    pub race: Option<String>,
    pub fathers_name: Option<String>,
    pub mothers_name: Option<String>,
    pub permanent_division: Option<String>,
    pub present_division: Option<String>,
    pub expected_partner_age: Option<String>,
    pub expected_partner_height: Option<String>,
    pub expected_partner_weight: Option<String>,
    pub contact_email: Option<String>,
    pub mobile_number: Option<String>,
    pub premium: Option<bool>,
}

impl BiodataUpdate {
    pub fn is_empty(&self) -> bool {
        self.biodata_type.is_none()
            && self.name.is_none()
            && self.profile_image.is_none()
            && self.date_of_birth.is_none()
            && self.height.is_none()
            && self.weight.is_none()
            && self.age.is_none()
            && self.occupation.is_none()
            && self.race.is_none()
            && self.fathers_name.is_none()
            && self.mothers_name.is_none()
            && self.permanent_division.is_none()
            && self.present_division.is_none()
            && self.expected_partner_age.is_none()
            && self.expected_partner_height.is_none()
            && self.expected_partner_weight.is_none()
            && self.contact_email.is_none()
            && self.mobile_number.is_none()
            && self.premium.is_none()
    }
}

//--------------------------------------   RequestStatus     ---------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum RequestStatus {
    /// The request has been created and is waiting for admin approval.
    Pending,
    /// The request has been approved and the contact details may be revealed.
    Approved,
}

impl Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "pending"),
            RequestStatus::Approved => write!(f, "approved"),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("Invalid request status: {0}")]
pub struct ConversionError(String);

impl FromStr for RequestStatus {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            s => Err(ConversionError(format!("Invalid request status: {s}"))),
        }
    }
}

impl From<String> for RequestStatus {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_else(|_| {
            error!("Invalid request status: {value}. But this conversion cannot fail. Defaulting to pending");
            RequestStatus::Pending
        })
    }
}

//--------------------------------------   ContactRequest    ---------------------------------------------------------
/// A paid request by one user to reveal the contact details behind a biodata. There is no foreign-key enforcement on
/// `biodata_id`; the biodata join happens at read time.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub id: i64,
    pub biodata_id: i64,
    pub name: Option<String>,
    pub email: String,
    pub payment_id: Option<String>,
    pub status: RequestStatus,
    pub mobile_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContactRequest {
    pub biodata_id: i64,
    pub name: Option<String>,
    pub email: String,
    pub payment_id: Option<String>,
    #[serde(default)]
    pub status: Option<RequestStatus>,
    pub mobile_number: Option<String>,
}

//--------------------------------------      Favorite       ---------------------------------------------------------
/// A user-curated bookmark of a biodata, with display fields denormalised at bookmark time.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: i64,
    pub user_id: String,
    pub biodata_id: i64,
    pub name: Option<String>,
    pub permanent_division: Option<String>,
    pub occupation: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFavorite {
    pub user_id: String,
    pub biodata_id: i64,
    pub name: Option<String>,
    pub permanent_division: Option<String>,
    pub occupation: Option<String>,
}

//--------------------------------------    PaymentRecord    ---------------------------------------------------------
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: i64,
    pub email: Option<String>,
    pub price: UsdAmount,
    pub transaction_id: Option<String>,
    pub biodata_id: Option<i64>,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPaymentRecord {
    pub email: Option<String>,
    pub price: UsdAmount,
    pub transaction_id: Option<String>,
    pub biodata_id: Option<i64>,
    pub status: Option<String>,
}

//--------------------------------------    SuccessStory     ---------------------------------------------------------
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SuccessStory {
    pub id: i64,
    pub self_biodata_id: Option<i64>,
    pub partner_biodata_id: Option<i64>,
    pub couple_image: Option<String>,
    pub review: Option<String>,
    pub marriage_date: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSuccessStory {
    pub self_biodata_id: Option<i64>,
    pub partner_biodata_id: Option<i64>,
    pub couple_image: Option<String>,
    pub review: Option<String>,
    pub marriage_date: Option<String>,
}

//--------------------------------------    UpdateResult     ---------------------------------------------------------
/// The outcome of an update-by-id operation, in the shape clients already consume.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub matched_count: u64,
    pub modified_count: u64,
}

impl UpdateResult {
    pub fn new(matched_count: u64, modified_count: u64) -> Self {
        Self { matched_count, modified_count }
    }
}

//--------------------------------------   Dashboard stats   ---------------------------------------------------------
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: i64,
    pub total_biodatas: i64,
    /// Users whose premium status has been approved by an admin.
    pub total_premium_users: i64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartStats {
    pub total_biodatas: i64,
    pub male_biodatas: i64,
    pub female_biodatas: i64,
    /// Counts approved-premium *users*, not biodatas, despite the dashboard labelling it "premium biodatas".
    pub premium_biodatas: i64,
    pub total_revenue: UsdAmount,
}
