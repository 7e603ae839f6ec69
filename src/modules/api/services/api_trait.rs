use async_trait::async_trait;

use crate::core::Result;
use crate::modules::api::models::TokenResponse;
use crate::modules::dashboard::DashboardSummary;
use crate::modules::session::Session;
use crate::modules::transactions::models::{CreateTransactionPayload, DeleteAck, Transaction};

/// Remote bookkeeping API consumed by the front-end
///
/// Authenticated operations take the session explicitly and attach its token
/// as a bearer credential. Nothing is retried: a failed call is returned to
/// the caller as is.
#[async_trait]
pub trait TaxApi: Send + Sync {
    /// Exchange credentials for a token, fails with `AppError::Auth`
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse>;

    /// All transactions in backend order, fails with `AppError::Fetch`
    async fn list_transactions(&self, session: &Session) -> Result<Vec<Transaction>>;

    /// Persist a transaction, fails with `AppError::Submit`
    async fn create_transaction(
        &self,
        session: &Session,
        payload: &CreateTransactionPayload,
    ) -> Result<Transaction>;

    /// Remove a transaction, fails with `AppError::Delete`
    async fn delete_transaction(&self, session: &Session, id: i64) -> Result<DeleteAck>;

    /// Dashboard figures; any failure yields the zeroed summary
    async fn dashboard_summary(&self, session: &Session) -> DashboardSummary;
}
