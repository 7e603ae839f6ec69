pub mod auth;

pub use auth::{LoginRequest, TokenResponse};
