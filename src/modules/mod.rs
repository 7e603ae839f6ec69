pub mod api;
pub mod dashboard;
pub mod session;
pub mod shell;
pub mod taxes;
pub mod transactions;
