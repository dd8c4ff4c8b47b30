use chrono::{DateTime, SubsecRound, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::money::validate_amount;
use crate::core::{AppError, Result};
use crate::modules::invoices::{Invoice, InvoiceStatus};

/// Payment outcome, fixed when the payment is recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Success,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Success => "success",
            PaymentStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "success" => Ok(PaymentStatus::Success),
            "failed" => Ok(PaymentStatus::Failed),
            _ => Err(format!("Invalid payment status: {}", s)),
        }
    }
}

/// Which payments a listing should return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentFilter {
    #[default]
    All,
    Success,
    Failed,
}

impl PaymentFilter {
    /// The status to match, or `None` to match every payment
    pub fn status(&self) -> Option<PaymentStatus> {
        match self {
            PaymentFilter::All => None,
            PaymentFilter::Success => Some(PaymentStatus::Success),
            PaymentFilter::Failed => Some(PaymentStatus::Failed),
        }
    }

    pub fn matches(&self, status: PaymentStatus) -> bool {
        self.status().map_or(true, |wanted| wanted == status)
    }
}

/// Funds received against an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "invoiceID")]
    pub invoice_id: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    pub status: PaymentStatus,

    pub transaction_date: DateTime<Utc>,
}

impl Payment {
    /// Create a payment record stamped with the current time (millisecond precision)
    pub fn new(invoice_id: String, amount: Decimal, status: PaymentStatus) -> Result<Self> {
        if invoice_id.trim().is_empty() {
            return Err(AppError::validation("invoiceID is required"));
        }

        validate_amount(amount, "amount")?;

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            invoice_id,
            amount,
            status,
            transaction_date: Utc::now().trunc_subsecs(3),
        })
    }

    /// Attach the referenced invoice for read responses
    pub fn with_invoice(self, invoice: Option<Invoice>) -> PaymentWithInvoice {
        PaymentWithInvoice {
            id: self.id,
            invoice,
            amount: self.amount,
            status: self.status,
            transaction_date: self.transaction_date,
        }
    }
}

/// A payment with its invoice reference expanded in place.
///
/// `invoiceID` holds the whole invoice object, or `null` when the referenced
/// record cannot be found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentWithInvoice {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "invoiceID")]
    pub invoice: Option<Invoice>,

    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    pub status: PaymentStatus,

    pub transaction_date: DateTime<Utc>,
}

/// Request body for POST /api/payments
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePaymentRequest {
    #[serde(rename = "invoiceID")]
    pub invoice_id: String,
    pub amount: Decimal,
}

/// Query string for GET /api/payments
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentsQuery {
    #[serde(default)]
    pub filter: PaymentFilter,
}

/// Row shape of `payments LEFT JOIN invoices`
#[derive(Debug, FromRow)]
pub(crate) struct PaymentWithInvoiceRow {
    pub id: String,
    pub invoice_id: String,
    pub amount: Decimal,
    pub status: String,
    pub transaction_date: DateTime<Utc>,
    pub invoice_recruiter_id: Option<String>,
    pub invoice_amount: Option<Decimal>,
    pub invoice_gst_amount: Option<Decimal>,
    pub invoice_status: Option<String>,
    pub invoice_created_at: Option<DateTime<Utc>>,
}

impl TryFrom<PaymentWithInvoiceRow> for PaymentWithInvoice {
    type Error = AppError;

    fn try_from(row: PaymentWithInvoiceRow) -> Result<Self> {
        let status: PaymentStatus = row
            .status
            .parse()
            .map_err(|e| AppError::internal(format!("Invalid status in database: {}", e)))?;

        let invoice = match (
            row.invoice_recruiter_id,
            row.invoice_amount,
            row.invoice_gst_amount,
            row.invoice_status,
            row.invoice_created_at,
        ) {
            (Some(recruiter_id), Some(amount), Some(gst_amount), Some(status), Some(created_at)) => {
                let status: InvoiceStatus = status.parse().map_err(|e| {
                    AppError::internal(format!("Invalid status in database: {}", e))
                })?;
                Some(Invoice {
                    id: row.invoice_id.clone(),
                    recruiter_id,
                    amount,
                    gst_amount,
                    status,
                    created_at,
                })
            }
            _ => None,
        };

        let payment = Payment {
            id: row.id,
            invoice_id: row.invoice_id,
            amount: row.amount,
            status,
            transaction_date: row.transaction_date,
        };

        Ok(payment.with_invoice(invoice))
    }
}
