use std::sync::Arc;

use tracing::info;

use crate::core::{AppError, DateRange, Result};
use crate::modules::invoices::{Invoice, InvoiceRepository, InvoiceStatus};
use crate::modules::reports::models::ReportSummary;

/// Summarise an already-filtered set of invoices.
///
/// Every invoice is either pending or paid, so
/// `pending_invoices + paid_invoices == total_invoices` always holds.
/// Fails with `AppError::Internal` if the GST total overflows.
pub fn generate_report(invoices: &[Invoice]) -> Result<ReportSummary> {
    let mut summary = ReportSummary::empty();

    for invoice in invoices {
        summary.total_gst_collected = summary
            .total_gst_collected
            .checked_add(invoice.gst_amount)
            .ok_or_else(|| AppError::internal("GST total overflowed"))?;
        summary.total_invoices += 1;
        match invoice.status {
            InvoiceStatus::Pending => summary.pending_invoices += 1,
            InvoiceStatus::Paid => summary.paid_invoices += 1,
        }
    }

    Ok(summary)
}

/// Service for date-filtered invoice reports
pub struct ReportService {
    invoice_repo: Arc<dyn InvoiceRepository>,
}

impl ReportService {
    pub fn new(invoice_repo: Arc<dyn InvoiceRepository>) -> Self {
        Self { invoice_repo }
    }

    /// Fetch invoices created within `range` and summarise them
    pub async fn generate_report(&self, range: &DateRange) -> Result<ReportSummary> {
        let invoices = if range.is_unbounded() {
            self.invoice_repo.list().await?
        } else {
            self.invoice_repo.find_created_between(range).await?
        };

        let report = generate_report(&invoices)?;

        info!(
            start = ?range.start,
            end = ?range.end,
            total_invoices = report.total_invoices,
            "Report generated"
        );

        Ok(report)
    }
}
