pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{
    CreatePaymentRequest, Payment, PaymentFilter, PaymentStatus, PaymentWithInvoice,
    PaymentsQuery,
};
pub use repositories::{MySqlPaymentRepository, PaymentRepository};
pub use services::PaymentService;
