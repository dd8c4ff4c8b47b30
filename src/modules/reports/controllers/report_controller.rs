use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::{AppError, DateRange};
use crate::modules::reports::services::{DashboardService, ReportService};

/// Query parameters for the report endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    /// Start of the creation-date window (inclusive, YYYY-MM-DD or RFC 3339)
    #[serde(default)]
    pub start: Option<String>,
    /// End of the creation-date window (inclusive, YYYY-MM-DD or RFC 3339)
    #[serde(default)]
    pub end: Option<String>,
}

/// GET /api/reports
///
/// Summarises invoices created within the optional date window.
pub async fn get_report(
    service: web::Data<Arc<ReportService>>,
    query: web::Query<ReportQuery>,
) -> Result<HttpResponse, AppError> {
    let range = DateRange::parse(query.start.as_deref(), query.end.as_deref())?;
    let report = service.generate_report(&range).await?;

    Ok(HttpResponse::Ok().json(report))
}

/// GET /api/dashboard
pub async fn get_dashboard(
    service: web::Data<Arc<DashboardService>>,
) -> Result<HttpResponse, AppError> {
    let summary = service.fetch_dashboard_data().await?;

    Ok(HttpResponse::Ok().json(summary))
}

/// Configure report and dashboard routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/reports", web::get().to(get_report))
        .route("/dashboard", web::get().to(get_dashboard));
}
