mod report_controller;

pub use report_controller::{configure, get_dashboard, get_report, ReportQuery};
