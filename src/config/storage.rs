use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Where the client keeps its local storage file (the stored credential)
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub path: PathBuf,
}

impl StorageConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            env::var("TAXDESK_STORAGE_PATH").unwrap_or_else(|_| ".taxdesk/storage.json".to_string()),
        ))
    }

    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(AppError::Configuration(
                "TAXDESK_STORAGE_PATH must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
