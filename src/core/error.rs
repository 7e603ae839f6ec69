/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// The first four variants map to the user-facing failures of the front-end:
/// a rejected login, a failed list retrieval, a failed create and a failed
/// delete. Each carries the message shown to the user.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Login rejected by the backend
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Transaction list or summary retrieval failed
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Creating a transaction failed
    #[error("Submit failed: {0}")]
    Submit(String),

    /// Deleting a transaction failed
    #[error("Delete failed: {0}")]
    Delete(String),

    /// Form input rejected before any request was made
    #[error("Validation error: {0}")]
    Validation(String),

    /// Credential storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn auth(msg: impl Into<String>) -> Self {
        AppError::Auth(msg.into())
    }

    pub fn fetch(msg: impl Into<String>) -> Self {
        AppError::Fetch(msg.into())
    }

    pub fn submit(msg: impl Into<String>) -> Self {
        AppError::Submit(msg.into())
    }

    pub fn delete(msg: impl Into<String>) -> Self {
        AppError::Delete(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        AppError::Storage(msg.into())
    }

    /// Message suitable for showing inline in a view
    ///
    /// Strips the variant prefix for the user-facing kinds so the form and
    /// login screen show only the backend's or validator's text.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Auth(msg)
            | AppError::Fetch(msg)
            | AppError::Submit(msg)
            | AppError::Delete(msg)
            | AppError::Validation(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}
