use std::sync::Arc;

use tracing::{debug, info};

use crate::core::Result;
use crate::modules::payments::models::{
    CreatePaymentRequest, Payment, PaymentFilter, PaymentStatus, PaymentWithInvoice,
};
use crate::modules::payments::repositories::PaymentRepository;

/// Service for recording and querying payments
pub struct PaymentService {
    payment_repo: Arc<dyn PaymentRepository>,
}

impl PaymentService {
    pub fn new(payment_repo: Arc<dyn PaymentRepository>) -> Self {
        Self { payment_repo }
    }

    /// Record a successful payment and settle the referenced invoice.
    ///
    /// An invoice may be paid more than once; every call adds a payment.
    pub async fn create_payment(&self, request: CreatePaymentRequest) -> Result<Payment> {
        let payment = Payment::new(request.invoice_id, request.amount, PaymentStatus::Success)?;

        let recorded = self.payment_repo.record_successful_payment(&payment).await?;

        info!(
            payment_id = %recorded.id,
            invoice_id = %recorded.invoice_id,
            amount = %recorded.amount,
            "Payment recorded, invoice marked paid"
        );

        Ok(recorded)
    }

    /// List payments with their invoices, optionally narrowed by status
    pub async fn fetch_payments(&self, filter: PaymentFilter) -> Result<Vec<PaymentWithInvoice>> {
        let payments = self.payment_repo.find_with_invoices(filter).await?;

        debug!(filter = ?filter, count = payments.len(), "Payments fetched");

        Ok(payments)
    }
}
