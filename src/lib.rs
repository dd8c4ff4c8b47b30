//! GST Ledger Library
//!
//! Invoice, payment and GST reporting backend: invoices carry an 18% GST
//! computed at creation, payments settle invoices, and report endpoints
//! aggregate collected GST.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod startup;
pub mod storage;

// Re-export commonly used types
pub use modules::invoices;
pub use modules::payments;
pub use modules::reports;
pub use modules::taxes;
