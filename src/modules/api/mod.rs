// Remote data client

pub mod models;
pub mod services;

pub use models::{LoginRequest, TokenResponse};
pub use services::{HttpTaxApi, TaxApi};
