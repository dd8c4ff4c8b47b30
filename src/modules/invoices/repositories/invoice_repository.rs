// InvoiceRepository: persistence for invoices
//
// Implements:
// - Create invoice
// - Read invoice by ID
// - List every invoice in store order
// - List invoices created within an inclusive date range

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;

use crate::core::{AppError, DateRange, Result};
use crate::modules::invoices::models::{Invoice, InvoiceRow};

/// Repository for invoice database operations
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Persist a new invoice and return it as stored
    async fn create(&self, invoice: &Invoice) -> Result<Invoice>;

    /// Find invoice by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Invoice>>;

    /// List every invoice
    async fn list(&self) -> Result<Vec<Invoice>>;

    /// List invoices whose `created_at` falls inside `range` (inclusive)
    async fn find_created_between(&self, range: &DateRange) -> Result<Vec<Invoice>>;
}

pub struct MySqlInvoiceRepository {
    pool: MySqlPool,
}

impl MySqlInvoiceRepository {
    /// Create a new invoice repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvoiceRepository for MySqlInvoiceRepository {
    async fn create(&self, invoice: &Invoice) -> Result<Invoice> {
        sqlx::query(
            r#"
            INSERT INTO invoices (id, recruiter_id, amount, gst_amount, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&invoice.id)
        .bind(&invoice.recruiter_id)
        .bind(invoice.amount)
        .bind(invoice.gst_amount)
        .bind(invoice.status.as_str())
        .bind(invoice.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::validation(format!(
                        "Invoice with id '{}' already exists",
                        invoice.id
                    ));
                }
            }
            AppError::Database(e)
        })?;

        Ok(invoice.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Invoice>> {
        let row = sqlx::query_as::<_, InvoiceRow>(
            r#"
            SELECT id, recruiter_id, amount, gst_amount, status, created_at
            FROM invoices
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Invoice::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<Invoice>> {
        let rows = sqlx::query_as::<_, InvoiceRow>(
            r#"
            SELECT id, recruiter_id, amount, gst_amount, status, created_at
            FROM invoices
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Invoice::try_from).collect()
    }

    async fn find_created_between(&self, range: &DateRange) -> Result<Vec<Invoice>> {
        let start: Option<DateTime<Utc>> = range.start;
        let end: Option<DateTime<Utc>> = range.end;

        let rows = sqlx::query_as::<_, InvoiceRow>(
            r#"
            SELECT id, recruiter_id, amount, gst_amount, status, created_at
            FROM invoices
            WHERE (? IS NULL OR created_at >= ?)
              AND (? IS NULL OR created_at <= ?)
            ORDER BY created_at, id
            "#,
        )
        .bind(start)
        .bind(start)
        .bind(end)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Invoice::try_from).collect()
    }
}
