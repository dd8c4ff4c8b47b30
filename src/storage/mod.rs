//! Record store backends
//!
//! Each backend provides the invoice, payment and dashboard repositories plus
//! a readiness probe. `Repositories` bundles one backend's implementations
//! behind trait objects.

use async_trait::async_trait;
use sqlx::MySqlPool;
use std::sync::Arc;

use crate::core::Result;
use crate::modules::invoices::{InvoiceRepository, MySqlInvoiceRepository};
use crate::modules::payments::{MySqlPaymentRepository, PaymentRepository};
use crate::modules::reports::{DashboardRepository, MySqlDashboardRepository};

pub mod in_memory;

pub use in_memory::InMemoryStore;

/// Cheap reachability check used by the readiness probe
#[async_trait]
pub trait StoreProbe: Send + Sync {
    async fn ping(&self) -> Result<()>;
}

pub struct MySqlProbe {
    pool: MySqlPool,
}

impl MySqlProbe {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreProbe for MySqlProbe {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// The repositories of one store backend
#[derive(Clone)]
pub struct Repositories {
    pub invoices: Arc<dyn InvoiceRepository>,
    pub payments: Arc<dyn PaymentRepository>,
    pub dashboard: Arc<dyn DashboardRepository>,
    pub probe: Arc<dyn StoreProbe>,
}

impl Repositories {
    pub fn mysql(pool: MySqlPool) -> Self {
        Self {
            invoices: Arc::new(MySqlInvoiceRepository::new(pool.clone())),
            payments: Arc::new(MySqlPaymentRepository::new(pool.clone())),
            dashboard: Arc::new(MySqlDashboardRepository::new(pool.clone())),
            probe: Arc::new(MySqlProbe::new(pool)),
        }
    }

    pub fn in_memory(store: InMemoryStore) -> Self {
        Self {
            invoices: Arc::new(store.clone()),
            payments: Arc::new(store.clone()),
            dashboard: Arc::new(store.clone()),
            probe: Arc::new(store),
        }
    }
}
