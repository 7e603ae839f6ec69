pub mod models;
pub mod services;

pub use models::TaxCategory;
pub use services::TaxCalculator;
