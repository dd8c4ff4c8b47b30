use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::AppError;
use crate::modules::payments::models::{CreatePaymentRequest, PaymentsQuery};
use crate::modules::payments::services::PaymentService;

/// Record a payment against an invoice
/// POST /api/payments
pub async fn create_payment(
    service: web::Data<Arc<PaymentService>>,
    request: web::Json<CreatePaymentRequest>,
) -> Result<HttpResponse, AppError> {
    let payment = service.create_payment(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(payment))
}

/// List payments joined with their invoices
/// GET /api/payments?filter=all|success|failed
pub async fn list_payments(
    service: web::Data<Arc<PaymentService>>,
    query: web::Query<PaymentsQuery>,
) -> Result<HttpResponse, AppError> {
    let payments = service.fetch_payments(query.filter).await?;

    Ok(HttpResponse::Ok().json(payments))
}

/// Configure payment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/payments")
            .route("", web::post().to(create_payment))
            .route("", web::get().to(list_payments)),
    );
}
