// Smoke tests against a real listener

#[path = "../helpers/mod.rs"]
mod helpers;

use gst_ledger::storage::InMemoryStore;
use helpers::*;
use serde_json::Value;

#[actix_web::test]
async fn test_health_and_readiness() {
    let srv = spawn_test_server(InMemoryStore::new());

    let mut response = srv.get("/health").send().await.unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "gst-ledger");

    let response = srv.get("/ready").send().await.unwrap();
    assert_eq!(response.status(), 200);
}

#[actix_web::test]
async fn test_invoice_to_dashboard_round_trip() {
    let srv = spawn_test_server(InMemoryStore::new());

    let mut response = srv
        .post("/api/invoices")
        .send_json(&TestDataFactory::create_invoice_payload(200.0))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let invoice: Value = response.json().await.unwrap();

    let response = srv
        .post("/api/payments")
        .send_json(&TestDataFactory::create_payment_payload(
            invoice["_id"].as_str().unwrap(),
            236.0,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let mut response = srv.get("/api/dashboard").send().await.unwrap();
    let dashboard: Value = response.json().await.unwrap();

    assert_eq!(dashboard["totalInvoices"], 1);
    assert_eq!(dashboard["pendingPayments"], 0);
    assert_eq!(dashboard["totalGSTCollected"], 36.0);
    assert_eq!(dashboard["monthlyGSTAverage"], 36.0);
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let srv = spawn_test_server(InMemoryStore::new());

    let response = srv
        .post("/api/invoices")
        .insert_header(("content-type", "application/json"))
        .send_body("{not json")
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
}
