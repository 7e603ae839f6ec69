use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use super::api_trait::TaxApi;
use crate::config::ApiConfig;
use crate::core::{AppError, Result};
use crate::modules::api::models::{LoginRequest, TokenResponse};
use crate::modules::dashboard::DashboardSummary;
use crate::modules::session::Session;
use crate::modules::transactions::models::{CreateTransactionPayload, DeleteAck, Transaction};

pub const LOGIN_FAILED: &str = "Login failed. Check your username and password.";
pub const FETCH_FAILED: &str = "Failed to fetch transactions";
pub const SUBMIT_FAILED: &str = "Failed to save transaction";
pub const DELETE_FAILED: &str = "Failed to delete transaction";

/// reqwest client for the bookkeeping backend
///
/// Endpoints:
/// - `POST /token`
/// - `GET /transactions`, `POST /transactions`, `DELETE /transactions/{id}`
/// - `GET /dashboard`
pub struct HttpTaxApi {
    client: Client,
    config: ApiConfig,
}

impl HttpTaxApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Attach the session token, if one is held
    fn authorize(&self, request: RequestBuilder, session: &Session) -> RequestBuilder {
        match session.bearer_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and decode a successful JSON body
    ///
    /// Transport failures, non-success statuses and undecodable bodies all map
    /// to the error built by `fail`, carrying the user-facing `message`.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        operation: &str,
        message: &str,
        fail: fn(String) -> AppError,
    ) -> Result<T> {
        let response = request.send().await.map_err(|e| {
            error!("{} request failed: {}", operation, e);
            fail(message.to_string())
        })?;

        let response = Self::ensure_success(response, operation, message, fail).await?;

        response.json::<T>().await.map_err(|e| {
            error!("Failed to parse {} response: {}", operation, e);
            fail(message.to_string())
        })
    }

    async fn ensure_success(
        response: Response,
        operation: &str,
        message: &str,
        fail: fn(String) -> AppError,
    ) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let error_body = response.text().await.unwrap_or_default();
        warn!("{} returned {}: {}", operation, status, error_body);
        Err(fail(message.to_string()))
    }
}

#[async_trait]
impl TaxApi for HttpTaxApi {
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let request = self.client.post(self.config.endpoint("/token")).json(&body);
        let token: TokenResponse = self
            .send_json(request, "login", LOGIN_FAILED, AppError::Auth)
            .await?;

        info!("Logged in as {}", username);
        Ok(token)
    }

    async fn list_transactions(&self, session: &Session) -> Result<Vec<Transaction>> {
        let request = self.authorize(self.client.get(self.config.endpoint("/transactions")), session);
        let transactions: Vec<Transaction> = self
            .send_json(request, "list transactions", FETCH_FAILED, AppError::Fetch)
            .await?;

        debug!("Fetched {} transactions", transactions.len());
        Ok(transactions)
    }

    async fn create_transaction(
        &self,
        session: &Session,
        payload: &CreateTransactionPayload,
    ) -> Result<Transaction> {
        let request = self
            .authorize(self.client.post(self.config.endpoint("/transactions")), session)
            .json(payload);
        let created: Transaction = self
            .send_json(request, "create transaction", SUBMIT_FAILED, AppError::Submit)
            .await?;

        info!(
            "Created transaction {} ({}, tax {})",
            created.id, created.tax_type, created.tax_amount
        );
        Ok(created)
    }

    async fn delete_transaction(&self, session: &Session, id: i64) -> Result<DeleteAck> {
        let url = self.config.endpoint(&format!("/transactions/{}", id));
        let request = self.authorize(self.client.delete(url), session);
        let ack: DeleteAck = self
            .send_json(request, "delete transaction", DELETE_FAILED, AppError::Delete)
            .await?;

        info!("Deleted transaction {}", id);
        Ok(ack)
    }

    async fn dashboard_summary(&self, session: &Session) -> DashboardSummary {
        let request = self.authorize(self.client.get(self.config.endpoint("/dashboard")), session);

        match self
            .send_json::<DashboardSummary>(request, "dashboard", "Failed to fetch dashboard", AppError::Fetch)
            .await
        {
            Ok(summary) => summary,
            Err(e) => {
                warn!("Falling back to empty dashboard: {}", e);
                DashboardSummary::default()
            }
        }
    }
}
