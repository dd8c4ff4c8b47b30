pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{DashboardSummary, ReportSummary};
pub use repositories::{DashboardRepository, MySqlDashboardRepository};
pub use services::{DashboardService, ReportService};
