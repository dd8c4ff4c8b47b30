pub mod date_range;
pub mod error;
pub mod money;

pub use date_range::DateRange;
pub use error::{AppError, Result};
