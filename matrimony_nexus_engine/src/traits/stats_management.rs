use thiserror::Error;

use crate::db_types::{ChartStats, DashboardStats};

#[derive(Debug, Clone, Error)]
pub enum StatsError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for StatsError {
    fn from(e: sqlx::Error) -> Self {
        StatsError::DatabaseError(e.to_string())
    }
}

/// The `StatsManagement` trait defines behaviour for the aggregate dashboard queries.
///
/// The counts are computed at call time; nothing is cached, so an insert is reflected by the very next call.
#[allow(async_fn_in_trait)]
pub trait StatsManagement {
    async fn fetch_dashboard_stats(&self) -> Result<DashboardStats, StatsError>;

    async fn fetch_chart_stats(&self) -> Result<ChartStats, StatsError>;
}
