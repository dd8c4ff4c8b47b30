mod payment_controller;

pub use payment_controller::{configure, create_payment, list_payments};
