// Dashboard module

pub mod models;

pub use models::{CategoryBreakdown, DashboardSummary};
