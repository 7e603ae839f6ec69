//! TaxDesk, front-end for a small corporate tax bookkeeping service
//!
//! This library holds the client side of the TaxManager tool: the tax
//! estimate calculator, the HTTP client for the bookkeeping API, the session
//! context, the transaction form and the navigation shell the terminal
//! binary drives.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::api;
pub use modules::dashboard;
pub use modules::session;
pub use modules::shell;
pub use modules::taxes;
pub use modules::transactions;
