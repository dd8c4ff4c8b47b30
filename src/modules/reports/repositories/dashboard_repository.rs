use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::reports::models::DashboardSummary;

/// Store-side aggregation over the whole invoice collection
#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn fetch_dashboard_data(&self) -> Result<DashboardSummary>;
}

pub struct MySqlDashboardRepository {
    pool: MySqlPool,
}

impl MySqlDashboardRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DashboardRepository for MySqlDashboardRepository {
    async fn fetch_dashboard_data(&self) -> Result<DashboardSummary> {
        let (total_gst_collected, total_invoices, pending_payments): (Option<Decimal>, i64, i64) =
            sqlx::query_as(
                r#"
                SELECT
                    SUM(gst_amount),
                    COUNT(*),
                    COUNT(CASE WHEN status = 'pending' THEN 1 END)
                FROM invoices
                "#,
            )
            .fetch_one(&self.pool)
            .await?;

        // Inner query: mean per calendar month across all years.
        // Outer query: unweighted mean of those monthly means.
        let (monthly_gst_average,): (Option<Decimal>,) = sqlx::query_as(
            r#"
            SELECT AVG(monthly.month_average)
            FROM (
                SELECT MONTH(created_at) AS month, AVG(gst_amount) AS month_average
                FROM invoices
                GROUP BY MONTH(created_at)
            ) AS monthly
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(DashboardSummary {
            total_gst_collected: total_gst_collected.unwrap_or_default(),
            pending_payments,
            total_invoices,
            monthly_gst_average: monthly_gst_average.unwrap_or_default(),
        })
    }
}
