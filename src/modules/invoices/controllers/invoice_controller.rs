use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::AppError;
use crate::modules::invoices::models::CreateInvoiceRequest;
use crate::modules::invoices::services::InvoiceService;

/// Create a new invoice
/// POST /api/invoices
pub async fn create_invoice(
    service: web::Data<Arc<InvoiceService>>,
    request: web::Json<CreateInvoiceRequest>,
) -> Result<HttpResponse, AppError> {
    let invoice = service.create_invoice(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(invoice))
}

/// List all invoices
/// GET /api/invoices
pub async fn list_invoices(
    service: web::Data<Arc<InvoiceService>>,
) -> Result<HttpResponse, AppError> {
    let invoices = service.list_invoices().await?;

    Ok(HttpResponse::Ok().json(invoices))
}

/// Configure invoice routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/invoices")
            .route("", web::post().to(create_invoice))
            .route("", web::get().to(list_invoices)),
    );
}
