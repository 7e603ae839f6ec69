pub mod currency;
pub mod error;
pub mod timezone;

pub use currency::Rupiah;
pub use error::{AppError, Result};
pub use timezone::TimezoneConverter;
