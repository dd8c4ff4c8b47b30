mod invoice;

pub(crate) use invoice::InvoiceRow;
pub use invoice::{CreateInvoiceRequest, Invoice, InvoiceStatus};
