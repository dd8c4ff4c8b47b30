use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate statistics over a (possibly date-filtered) set of invoices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Sum of gst_amount over the invoices
    #[serde(rename = "totalGSTCollected", with = "rust_decimal::serde::float")]
    pub total_gst_collected: Decimal,
    #[serde(rename = "totalInvoices")]
    pub total_invoices: i64,
    #[serde(rename = "pendingInvoices")]
    pub pending_invoices: i64,
    #[serde(rename = "paidInvoices")]
    pub paid_invoices: i64,
}

impl ReportSummary {
    /// The summary of an empty invoice set
    pub fn empty() -> Self {
        Self {
            total_gst_collected: Decimal::ZERO,
            total_invoices: 0,
            pending_invoices: 0,
            paid_invoices: 0,
        }
    }
}

/// Aggregate statistics over the entire invoice collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(rename = "totalGSTCollected", with = "rust_decimal::serde::float")]
    pub total_gst_collected: Decimal,
    /// Invoices still awaiting payment
    #[serde(rename = "pendingPayments")]
    pub pending_payments: i64,
    #[serde(rename = "totalInvoices")]
    pub total_invoices: i64,
    /// Unweighted mean of the per-calendar-month mean gst_amount
    #[serde(rename = "monthlyGSTAverage", with = "rust_decimal::serde::float")]
    pub monthly_gst_average: Decimal,
}

impl DashboardSummary {
    pub fn empty() -> Self {
        Self {
            total_gst_collected: Decimal::ZERO,
            pending_payments: 0,
            total_invoices: 0,
            monthly_gst_average: Decimal::ZERO,
        }
    }
}
