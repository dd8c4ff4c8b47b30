// Integration tests for invoice creation and listing over HTTP

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{test, App};
use gst_ledger::startup::configure_app;
use gst_ledger::storage::InMemoryStore;
use helpers::*;
use serde_json::{json, Value};

#[actix_web::test]
async fn test_create_invoice_computes_gst() {
    let store = InMemoryStore::new();
    let services = services_over(&store);
    let app = test::init_service(App::new().configure(|cfg| configure_app(cfg, &services))).await;

    let req = test::TestRequest::post()
        .uri("/api/invoices")
        .set_json(json!({ "recruiterID": "REC-42", "amount": 100 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["recruiterID"], "REC-42");
    assert_eq!(body["amount"], 100.0);
    assert_eq!(body["gstAmount"], 18.0);
    assert_eq!(body["status"], "pending");
}

#[actix_web::test]
async fn test_zero_amount_invoice_is_allowed() {
    let services = services_over(&InMemoryStore::new());
    let app = test::init_service(App::new().configure(|cfg| configure_app(cfg, &services))).await;

    let req = test::TestRequest::post()
        .uri("/api/invoices")
        .set_json(TestDataFactory::create_invoice_payload(0.0))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["gstAmount"], 0.0);
}

#[actix_web::test]
async fn test_invalid_invoice_requests_are_rejected() {
    let store = InMemoryStore::new();
    let services = services_over(&store);
    let app = test::init_service(App::new().configure(|cfg| configure_app(cfg, &services))).await;

    let bodies = [
        json!({ "amount": 100 }),
        json!({ "recruiterID": "REC-1" }),
        json!({ "recruiterID": "   ", "amount": 100 }),
        json!({ "recruiterID": "REC-1", "amount": -5 }),
        json!({ "recruiterID": "REC-1", "amount": "lots" }),
    ];

    for body in bodies {
        let req = test::TestRequest::post()
            .uri("/api/invoices")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "body {}", body);
    }

    let req = test::TestRequest::get().uri("/api/invoices").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn test_list_returns_invoices_in_creation_order() {
    let services = services_over(&InMemoryStore::new());
    let app = test::init_service(App::new().configure(|cfg| configure_app(cfg, &services))).await;

    let mut created_ids = Vec::new();
    for amount in [10.0, 20.0, 30.0] {
        let req = test::TestRequest::post()
            .uri("/api/invoices")
            .set_json(TestDataFactory::create_invoice_payload(amount))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        created_ids.push(body["_id"].as_str().unwrap().to_string());
    }

    let req = test::TestRequest::get().uri("/api/invoices").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;

    let listed_ids: Vec<String> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["_id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(listed_ids, created_ids);
}

#[actix_web::test]
async fn test_amounts_beyond_storage_are_rejected() {
    let store = InMemoryStore::new();
    let services = services_over(&store);
    let app = test::init_service(App::new().configure(|cfg| configure_app(cfg, &services))).await;

    let bodies = [
        json!({ "recruiterID": "R", "amount": 7e28 }),
        json!({ "recruiterID": "R", "amount": 100000000000000.0 }),
        json!({ "recruiterID": "R", "amount": 0.1234567 }),
    ];

    for body in bodies {
        let req = test::TestRequest::post()
            .uri("/api/invoices")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "body {}", body);
    }

    // The largest storable amount is accepted and still aggregates
    for _ in 0..7 {
        let req = test::TestRequest::post()
            .uri("/api/invoices")
            .set_json(json!({ "recruiterID": "R", "amount": "99999999999999.999999" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 201);
    }

    for uri in ["/api/reports", "/api/dashboard"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["totalInvoices"], 7, "GET {}", uri);
    }
}

#[actix_web::test]
async fn test_created_invoice_matches_listing() {
    let services = services_over(&InMemoryStore::new());
    let app = test::init_service(App::new().configure(|cfg| configure_app(cfg, &services))).await;

    let req = test::TestRequest::post()
        .uri("/api/invoices")
        .set_json(json!({ "recruiterID": "REC-7", "amount": 0.123456 }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created["gstAmount"], 0.022222);

    let req = test::TestRequest::get().uri("/api/invoices").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed[0], created);
}
