pub mod transaction;

pub use transaction::{CreateTransactionPayload, DeleteAck, Transaction};
