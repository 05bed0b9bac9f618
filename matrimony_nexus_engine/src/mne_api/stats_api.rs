//! Unified API for the aggregate dashboard statistics.

use std::fmt::Debug;

use crate::{
    db_types::{ChartStats, DashboardStats},
    traits::{StatsError, StatsManagement},
};

/// The `StatsApi` provides a unified API for the dashboard aggregates.
pub struct StatsApi<B> {
    db: B,
}

impl<B: Debug> Debug for StatsApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StatsApi ({:?})", self.db)
    }
}

impl<B> StatsApi<B>
where B: StatsManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, StatsError> {
        self.db.fetch_dashboard_stats().await
    }

    pub async fn chart_stats(&self) -> Result<ChartStats, StatsError> {
        self.db.fetch_chart_stats().await
    }
}
