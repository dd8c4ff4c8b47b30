pub mod services;

pub use services::{GstCalculator, GST_RATE};
