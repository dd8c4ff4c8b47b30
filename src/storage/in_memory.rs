//! In-process record store for local development and tests

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::StoreProbe;
use crate::core::{AppError, DateRange, Result};
use crate::modules::invoices::{Invoice, InvoiceRepository};
use crate::modules::payments::{
    Payment, PaymentFilter, PaymentRepository, PaymentStatus, PaymentWithInvoice,
};
use crate::modules::reports::services::summarize_dashboard;
use crate::modules::reports::{DashboardRepository, DashboardSummary};

#[derive(Default)]
struct Records {
    invoices: Vec<Invoice>,
    payments: Vec<Payment>,
}

/// Record store backed by vectors behind one lock.
///
/// Insertion order is the store-native order for listings. A single lock
/// guards both collections, so a payment insert and its invoice status flip
/// are observed together. Clone-friendly via Arc.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    records: Arc<RwLock<Records>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records>> {
        self.records
            .read()
            .map_err(|e| AppError::internal(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records>> {
        self.records
            .write()
            .map_err(|e| AppError::internal(format!("Failed to acquire write lock: {}", e)))
    }

    /// Insert an invoice as-is, keeping its id, status and timestamp
    pub fn insert_invoice(&self, invoice: Invoice) -> Result<()> {
        self.write()?.invoices.push(invoice);
        Ok(())
    }

    /// Insert a payment as-is without touching its invoice
    pub fn insert_payment(&self, payment: Payment) -> Result<()> {
        self.write()?.payments.push(payment);
        Ok(())
    }

    pub fn payment_count(&self) -> Result<usize> {
        Ok(self.read()?.payments.len())
    }
}

#[async_trait]
impl InvoiceRepository for InMemoryStore {
    async fn create(&self, invoice: &Invoice) -> Result<Invoice> {
        let mut records = self.write()?;

        if records.invoices.iter().any(|i| i.id == invoice.id) {
            return Err(AppError::validation(format!(
                "Invoice with id '{}' already exists",
                invoice.id
            )));
        }

        records.invoices.push(invoice.clone());
        Ok(invoice.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Invoice>> {
        Ok(self.read()?.invoices.iter().find(|i| i.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Invoice>> {
        Ok(self.read()?.invoices.clone())
    }

    async fn find_created_between(&self, range: &DateRange) -> Result<Vec<Invoice>> {
        Ok(self
            .read()?
            .invoices
            .iter()
            .filter(|i| range.contains(&i.created_at))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PaymentRepository for InMemoryStore {
    async fn record_successful_payment(&self, payment: &Payment) -> Result<Payment> {
        if payment.status != PaymentStatus::Success {
            return Err(AppError::internal(
                "Only successful payments settle an invoice",
            ));
        }

        let mut records = self.write()?;

        let invoice = records
            .invoices
            .iter_mut()
            .find(|i| i.id == payment.invoice_id)
            .ok_or_else(|| AppError::not_found("Invoice not found"))?;
        invoice.mark_paid();

        records.payments.push(payment.clone());
        Ok(payment.clone())
    }

    async fn find_with_invoices(&self, filter: PaymentFilter) -> Result<Vec<PaymentWithInvoice>> {
        let records = self.read()?;

        Ok(records
            .payments
            .iter()
            .filter(|p| filter.matches(p.status))
            .map(|p| {
                let invoice = records
                    .invoices
                    .iter()
                    .find(|i| i.id == p.invoice_id)
                    .cloned();
                p.clone().with_invoice(invoice)
            })
            .collect())
    }
}

#[async_trait]
impl DashboardRepository for InMemoryStore {
    async fn fetch_dashboard_data(&self) -> Result<DashboardSummary> {
        summarize_dashboard(&self.read()?.invoices)
    }
}

#[async_trait]
impl StoreProbe for InMemoryStore {
    async fn ping(&self) -> Result<()> {
        self.read().map(|_| ())
    }
}
