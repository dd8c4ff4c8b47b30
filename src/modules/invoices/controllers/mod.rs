mod invoice_controller;

pub use invoice_controller::{configure, create_invoice, list_invoices};
