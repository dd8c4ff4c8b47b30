mod payment;

pub(crate) use payment::PaymentWithInvoiceRow;
pub use payment::{
    CreatePaymentRequest, Payment, PaymentFilter, PaymentStatus, PaymentWithInvoice,
    PaymentsQuery,
};
