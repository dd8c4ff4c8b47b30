pub mod dashboard_service;
pub mod report_service;

pub use dashboard_service::{monthly_gst_average, summarize_dashboard, DashboardService};
pub use report_service::{generate_report, ReportService};
