//! Application assembly
//!
//! Builds the repositories for the configured store backend, wires them into
//! services and registers every route. `main` and the HTTP tests share
//! `configure_app` so they serve the same surface.

use std::sync::Arc;

use actix_web::web;

use crate::config::{Config, StoreBackend};
use crate::core::Result;
use crate::middleware::{json_config, query_config};
use crate::modules::invoices::InvoiceService;
use crate::modules::payments::PaymentService;
use crate::modules::reports::{DashboardService, ReportService};
use crate::modules::taxes::GstCalculator;
use crate::modules::{health, invoices, payments, reports};
use crate::storage::{InMemoryStore, Repositories, StoreProbe};

/// Services shared by every worker
#[derive(Clone)]
pub struct Services {
    pub invoices: Arc<InvoiceService>,
    pub payments: Arc<PaymentService>,
    pub reports: Arc<ReportService>,
    pub dashboard: Arc<DashboardService>,
    pub probe: Arc<dyn StoreProbe>,
}

impl Services {
    pub fn new(repos: Repositories, gst_calculator: GstCalculator) -> Self {
        Self {
            invoices: Arc::new(InvoiceService::new(repos.invoices.clone(), gst_calculator)),
            payments: Arc::new(PaymentService::new(repos.payments)),
            reports: Arc::new(ReportService::new(repos.invoices)),
            dashboard: Arc::new(DashboardService::new(repos.dashboard)),
            probe: repos.probe,
        }
    }

    /// Services over a fresh in-process store
    pub fn in_memory() -> Self {
        Self::new(
            Repositories::in_memory(InMemoryStore::new()),
            GstCalculator::default(),
        )
    }
}

/// Open the configured record store
pub async fn build_repositories(config: &Config) -> Result<Repositories> {
    match config.app.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; records are lost on restart");
            Ok(Repositories::in_memory(InMemoryStore::new()))
        }
        StoreBackend::MySql => {
            let pool = config.database.create_pool().await?;
            tracing::info!(
                "Database pool initialized ({}-{} connections)",
                config.database.pool_size,
                config.database.max_connections
            );

            if config.database.run_migrations {
                config.database.run_migrations(&pool).await?;
                tracing::info!("Database migrations applied");
            }

            Ok(Repositories::mysql(pool))
        }
    }
}

/// Register shared state, extractor configs and all routes
pub fn configure_app(cfg: &mut web::ServiceConfig, services: &Services) {
    cfg.app_data(web::Data::new(services.invoices.clone()))
        .app_data(web::Data::new(services.payments.clone()))
        .app_data(web::Data::new(services.reports.clone()))
        .app_data(web::Data::new(services.dashboard.clone()))
        .app_data(web::Data::new(services.probe.clone()))
        .app_data(json_config())
        .app_data(query_config())
        .service(
            web::scope("/api")
                .configure(invoices::controllers::configure)
                .configure(payments::controllers::configure)
                .configure(reports::controllers::configure),
        )
        .configure(health::configure);
}
