use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::payments::models::{
    Payment, PaymentFilter, PaymentStatus, PaymentWithInvoice, PaymentWithInvoiceRow,
};

/// Repository for payment persistence
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Store a successful payment and mark its invoice paid as one unit.
    ///
    /// Fails with `AppError::NotFound` and writes nothing when the
    /// referenced invoice does not exist.
    async fn record_successful_payment(&self, payment: &Payment) -> Result<Payment>;

    /// List payments matching `filter`, each joined with its invoice
    async fn find_with_invoices(&self, filter: PaymentFilter) -> Result<Vec<PaymentWithInvoice>>;
}

pub struct MySqlPaymentRepository {
    pool: MySqlPool,
}

impl MySqlPaymentRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for MySqlPaymentRepository {
    async fn record_successful_payment(&self, payment: &Payment) -> Result<Payment> {
        if payment.status != PaymentStatus::Success {
            return Err(AppError::internal(
                "Only successful payments settle an invoice",
            ));
        }

        let mut tx = self.pool.begin().await?;

        // Lock the invoice row so the status flip and the insert commit together
        let invoice: Option<(String,)> =
            sqlx::query_as("SELECT id FROM invoices WHERE id = ? FOR UPDATE")
                .bind(&payment.invoice_id)
                .fetch_optional(&mut *tx)
                .await?;

        if invoice.is_none() {
            // Dropping the transaction rolls it back
            return Err(AppError::not_found("Invoice not found"));
        }

        sqlx::query(
            r#"
            INSERT INTO payments (id, invoice_id, amount, status, transaction_date)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&payment.id)
        .bind(&payment.invoice_id)
        .bind(payment.amount)
        .bind(payment.status.as_str())
        .bind(payment.transaction_date)
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE invoices SET status = 'paid' WHERE id = ?")
            .bind(&payment.invoice_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(payment.clone())
    }

    async fn find_with_invoices(&self, filter: PaymentFilter) -> Result<Vec<PaymentWithInvoice>> {
        let status = filter.status().map(|s| s.as_str());

        let rows = sqlx::query_as::<_, PaymentWithInvoiceRow>(
            r#"
            SELECT
                p.id, p.invoice_id, p.amount, p.status, p.transaction_date,
                i.recruiter_id AS invoice_recruiter_id,
                i.amount AS invoice_amount,
                i.gst_amount AS invoice_gst_amount,
                i.status AS invoice_status,
                i.created_at AS invoice_created_at
            FROM payments p
            LEFT JOIN invoices i ON i.id = p.invoice_id
            WHERE (? IS NULL OR p.status = ?)
            ORDER BY p.transaction_date, p.id
            "#,
        )
        .bind(status)
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PaymentWithInvoice::try_from).collect()
    }
}
