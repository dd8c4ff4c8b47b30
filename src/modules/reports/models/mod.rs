mod summary;

pub use summary::{DashboardSummary, ReportSummary};
