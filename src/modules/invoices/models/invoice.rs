// An invoice bills a recruiter for an amount and carries the GST owed on it.
// The GST figure is fixed at creation; the only later mutation is the
// pending -> paid flip performed when a payment is recorded.

use chrono::{DateTime, SubsecRound, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::money::{round_money, validate_amount};
use crate::core::{AppError, Result};

/// Invoice status lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Awaiting payment
    #[default]
    Pending,

    /// At least one successful payment has been recorded
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            _ => Err(format!("Invalid invoice status: {}", s)),
        }
    }
}

/// A billable record for a recruiter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "recruiterID")]
    pub recruiter_id: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// amount × GST rate, computed once at creation
    #[serde(with = "rust_decimal::serde::float")]
    pub gst_amount: Decimal,

    pub status: InvoiceStatus,

    pub created_at: DateTime<Utc>,
}

impl Invoice {
    /// Create a pending invoice stamped with the current time
    ///
    /// `gst_amount` is rounded and `created_at` truncated to the precision
    /// the store keeps, so the new value equals what is later read back.
    ///
    /// # Arguments
    /// * `recruiter_id` - Billed party (must not be blank)
    /// * `amount` - Invoice amount (non-negative, at most 6 decimal places)
    /// * `gst_amount` - Tax owed on `amount`
    pub fn new(recruiter_id: String, amount: Decimal, gst_amount: Decimal) -> Result<Self> {
        Self::validate_recruiter_id(&recruiter_id)?;
        validate_amount(amount, "amount")?;

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            recruiter_id,
            amount,
            gst_amount: round_money(gst_amount),
            status: InvoiceStatus::Pending,
            created_at: Utc::now().trunc_subsecs(3),
        })
    }

    /// Record that a successful payment was taken against this invoice.
    /// Paying an already-paid invoice leaves it paid.
    pub fn mark_paid(&mut self) {
        self.status = InvoiceStatus::Paid;
    }

    fn validate_recruiter_id(recruiter_id: &str) -> Result<()> {
        if recruiter_id.trim().is_empty() {
            return Err(AppError::validation("recruiterID is required"));
        }

        if recruiter_id.len() > 255 {
            return Err(AppError::validation(
                "recruiterID cannot exceed 255 characters",
            ));
        }

        Ok(())
    }
}

/// Request body for POST /api/invoices
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvoiceRequest {
    #[serde(rename = "recruiterID")]
    pub recruiter_id: String,
    pub amount: Decimal,
}

/// Row shape of the `invoices` table
#[derive(Debug, FromRow)]
pub(crate) struct InvoiceRow {
    pub id: String,
    pub recruiter_id: String,
    pub amount: Decimal,
    pub gst_amount: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<InvoiceRow> for Invoice {
    type Error = AppError;

    fn try_from(row: InvoiceRow) -> Result<Self> {
        let status = row
            .status
            .parse()
            .map_err(|e| AppError::internal(format!("Invalid status in database: {}", e)))?;

        Ok(Invoice {
            id: row.id,
            recruiter_id: row.recruiter_id,
            amount: row.amount,
            gst_amount: row.gst_amount,
            status,
            created_at: row.created_at,
        })
    }
}
