use mns_common::UsdAmount;
use sqlx::SqliteConnection;

use crate::{
    db_types::{ChartStats, DashboardStats},
    traits::StatsError,
};

/// Computes the dashboard counts at call time. Nothing is cached; an insert is reflected by the next call.
pub async fn fetch_dashboard_stats(conn: &mut SqliteConnection) -> Result<DashboardStats, StatsError> {
    let total_users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users").fetch_one(&mut *conn).await?;
    let total_biodatas: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM biodatas").fetch_one(&mut *conn).await?;
    let total_premium_users: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE approved_premium = 1").fetch_one(conn).await?;
    Ok(DashboardStats { total_users, total_biodatas, total_premium_users })
}

pub async fn fetch_chart_stats(conn: &mut SqliteConnection) -> Result<ChartStats, StatsError> {
    let total_biodatas: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM biodatas").fetch_one(&mut *conn).await?;
    let male_biodatas: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM biodatas WHERE LOWER(biodata_type) = 'male'")
        .fetch_one(&mut *conn)
        .await?;
    let female_biodatas: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM biodatas WHERE LOWER(biodata_type) = 'female'")
        .fetch_one(&mut *conn)
        .await?;
    // Counts approved-premium users; the dashboard charts them under a "premium biodatas" label.
    let premium_biodatas: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE approved_premium = 1").fetch_one(&mut *conn).await?;
    let revenue_cents: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(price), 0) FROM payments").fetch_one(conn).await?;
    Ok(ChartStats {
        total_biodatas,
        male_biodatas,
        female_biodatas,
        premium_biodatas,
        total_revenue: UsdAmount::from(revenue_cents),
    })
}
