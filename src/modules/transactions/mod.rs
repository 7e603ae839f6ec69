// Transactions module

pub mod controllers;
pub mod models;

pub use controllers::{FormField, TransactionForm};
pub use models::{CreateTransactionPayload, DeleteAck, Transaction};
