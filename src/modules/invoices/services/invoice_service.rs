use std::sync::Arc;

use tracing::info;

use crate::core::Result;
use crate::modules::invoices::models::{CreateInvoiceRequest, Invoice};
use crate::modules::invoices::repositories::InvoiceRepository;
use crate::modules::taxes::GstCalculator;

/// Service for invoice business logic
pub struct InvoiceService {
    invoice_repo: Arc<dyn InvoiceRepository>,
    gst_calculator: GstCalculator,
}

impl InvoiceService {
    pub fn new(invoice_repo: Arc<dyn InvoiceRepository>, gst_calculator: GstCalculator) -> Self {
        Self {
            invoice_repo,
            gst_calculator,
        }
    }

    /// Create a pending invoice with its GST amount fixed at creation time
    pub async fn create_invoice(&self, request: CreateInvoiceRequest) -> Result<Invoice> {
        let gst_amount = self.gst_calculator.calculate_gst(request.amount);
        let invoice = Invoice::new(request.recruiter_id, request.amount, gst_amount)?;

        let created = self.invoice_repo.create(&invoice).await?;

        info!(
            invoice_id = %created.id,
            recruiter_id = %created.recruiter_id,
            amount = %created.amount,
            gst_amount = %created.gst_amount,
            "Invoice created"
        );

        Ok(created)
    }

    /// List every invoice
    pub async fn list_invoices(&self) -> Result<Vec<Invoice>> {
        self.invoice_repo.list().await
    }
}
