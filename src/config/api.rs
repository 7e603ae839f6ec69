use crate::core::{AppError, Result};
use reqwest::Url;
use serde::Deserialize;
use std::env;

/// Default backend address, where the bookkeeping API listens in development
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Backend API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            env::var("TAXDESK_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
        ))
    }

    /// Absolute URL for an endpoint path such as `/transactions`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            AppError::Configuration(format!(
                "TAXDESK_API_BASE_URL is not a valid URL ({}): {}",
                e, self.base_url
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::Configuration(format!(
                "TAXDESK_API_BASE_URL must start with http:// or https://, got {}",
                self.base_url
            )));
        }

        if url.host_str().map_or(true, str::is_empty) {
            return Err(AppError::Configuration(
                "TAXDESK_API_BASE_URL has no host".to_string(),
            ));
        }

        Ok(())
    }
}
