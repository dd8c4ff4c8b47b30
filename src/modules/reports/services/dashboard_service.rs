use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Datelike;
use rust_decimal::Decimal;
use tracing::info;

use crate::core::money::checked_total;
use crate::core::{AppError, Result};
use crate::modules::invoices::{Invoice, InvoiceStatus};
use crate::modules::reports::models::DashboardSummary;
use crate::modules::reports::repositories::DashboardRepository;

/// Two-stage monthly GST average.
///
/// Invoices are grouped by calendar month of `created_at` (1..=12, UTC,
/// folding all years together). Each group contributes its mean gst_amount,
/// and the result is the unweighted mean of those group means, so a month
/// with one invoice weighs as much as a month with a hundred.
pub fn monthly_gst_average(invoices: &[Invoice]) -> Result<Decimal> {
    let mut months: BTreeMap<u32, (Decimal, u32)> = BTreeMap::new();
    for invoice in invoices {
        let entry = months
            .entry(invoice.created_at.month())
            .or_insert((Decimal::ZERO, 0));
        entry.0 = entry.0.checked_add(invoice.gst_amount).ok_or_else(overflow)?;
        entry.1 += 1;
    }

    if months.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let mut sum_of_means = Decimal::ZERO;
    for (total, count) in months.values() {
        let mean = total
            .checked_div(Decimal::from(*count))
            .ok_or_else(overflow)?;
        sum_of_means = sum_of_means.checked_add(mean).ok_or_else(overflow)?;
    }

    sum_of_means
        .checked_div(Decimal::from(months.len()))
        .ok_or_else(overflow)
}

fn overflow() -> AppError {
    AppError::internal("GST aggregate overflowed")
}

/// Dashboard statistics computed over an in-process invoice collection
pub fn summarize_dashboard(invoices: &[Invoice]) -> Result<DashboardSummary> {
    Ok(DashboardSummary {
        total_gst_collected: checked_total(invoices.iter().map(|i| i.gst_amount))?,
        pending_payments: invoices
            .iter()
            .filter(|i| i.status == InvoiceStatus::Pending)
            .count() as i64,
        total_invoices: invoices.len() as i64,
        monthly_gst_average: monthly_gst_average(invoices)?,
    })
}

/// Service for the whole-collection dashboard
pub struct DashboardService {
    dashboard_repo: Arc<dyn DashboardRepository>,
}

impl DashboardService {
    pub fn new(dashboard_repo: Arc<dyn DashboardRepository>) -> Self {
        Self { dashboard_repo }
    }

    pub async fn fetch_dashboard_data(&self) -> Result<DashboardSummary> {
        let summary = self.dashboard_repo.fetch_dashboard_data().await?;

        info!(
            total_invoices = summary.total_invoices,
            pending_payments = summary.pending_payments,
            "Dashboard data fetched"
        );

        Ok(summary)
    }
}
