// Property tests for report and dashboard aggregation

use chrono::{TimeZone, Utc};
use gst_ledger::invoices::{Invoice, InvoiceStatus};
use gst_ledger::reports::services::{generate_report, monthly_gst_average, summarize_dashboard};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn invoice(month: u32, gst_cents: i64, paid: bool) -> Invoice {
    Invoice {
        id: uuid::Uuid::new_v4().to_string(),
        recruiter_id: "REC-1".to_string(),
        amount: Decimal::new(gst_cents * 100, 2) / dec!(18),
        gst_amount: Decimal::new(gst_cents, 2),
        status: if paid {
            InvoiceStatus::Paid
        } else {
            InvoiceStatus::Pending
        },
        created_at: Utc.with_ymd_and_hms(2024, month, 15, 9, 30, 0).unwrap(),
    }
}

fn invoices_strategy() -> impl Strategy<Value = Vec<Invoice>> {
    prop::collection::vec((1u32..=12, 0i64..1_000_000, any::<bool>()), 0..40).prop_map(|rows| {
        rows
            .into_iter()
            .map(|(month, cents, paid)| invoice(month, cents, paid))
            .collect()
    })
}

#[test]
fn test_empty_collection_is_all_zero() {
    let report = generate_report(&[]).unwrap();
    assert_eq!(report.total_invoices, 0);
    assert_eq!(report.total_gst_collected, Decimal::ZERO);

    let dashboard = summarize_dashboard(&[]).unwrap();
    assert_eq!(dashboard.total_invoices, 0);
    assert_eq!(dashboard.monthly_gst_average, Decimal::ZERO);
}

#[test]
fn test_months_weigh_equally() {
    // January mean 20, February mean 100
    let invoices = vec![
        invoice(1, 1000, false),
        invoice(1, 3000, false),
        invoice(2, 10000, true),
    ];

    assert_eq!(monthly_gst_average(&invoices).unwrap(), dec!(60));
}

proptest! {
    /// Every invoice is either pending or paid
    #[test]
    fn prop_report_partitions_invoices(invoices in invoices_strategy()) {
        let report = generate_report(&invoices).unwrap();

        prop_assert_eq!(report.total_invoices, invoices.len() as i64);
        prop_assert_eq!(
            report.pending_invoices + report.paid_invoices,
            report.total_invoices
        );
    }

    /// Report total equals the plain sum of gst_amount
    #[test]
    fn prop_report_total_is_sum(invoices in invoices_strategy()) {
        let expected: Decimal = invoices.iter().map(|i| i.gst_amount).sum();

        prop_assert_eq!(generate_report(&invoices).unwrap().total_gst_collected, expected);
    }

    /// A mean of means lies between the smallest and largest gst_amount
    #[test]
    fn prop_monthly_average_is_bounded(invoices in invoices_strategy()) {
        let average = monthly_gst_average(&invoices).unwrap();

        match (
            invoices.iter().map(|i| i.gst_amount).min(),
            invoices.iter().map(|i| i.gst_amount).max(),
        ) {
            (Some(min), Some(max)) => {
                prop_assert!(average >= min - dec!(0.000001));
                prop_assert!(average <= max + dec!(0.000001));
            }
            _ => prop_assert_eq!(average, Decimal::ZERO),
        }
    }

    /// Dashboard and report agree on totals over the same collection
    #[test]
    fn prop_dashboard_agrees_with_report(invoices in invoices_strategy()) {
        let report = generate_report(&invoices).unwrap();
        let dashboard = summarize_dashboard(&invoices).unwrap();

        prop_assert_eq!(dashboard.total_gst_collected, report.total_gst_collected);
        prop_assert_eq!(dashboard.total_invoices, report.total_invoices);
        prop_assert_eq!(dashboard.pending_payments, report.pending_invoices);
    }
}
