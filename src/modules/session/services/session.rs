use std::sync::Arc;

use tracing::info;

use crate::core::Result;
use super::credential_store::CredentialStore;

/// Storage key of the bearer token
pub const TOKEN_KEY: &str = "token";

/// Process-wide session state, passed explicitly to whatever needs it
///
/// Lifecycle: loaded from the credential store at startup, replaced on login,
/// torn down on logout. The token is held in memory and written through to
/// the store so the next start picks it up.
pub struct Session {
    store: Arc<dyn CredentialStore>,
    token: Option<String>,
    username: Option<String>,
}

impl Session {
    /// Restore the session persisted in `store`, if any
    pub fn load(store: Arc<dyn CredentialStore>) -> Result<Self> {
        let token = store.get_item(TOKEN_KEY)?.filter(|t| !t.is_empty());
        if token.is_some() {
            info!("Restored stored session credential");
        }

        Ok(Self {
            store,
            token,
            username: None,
        })
    }

    /// Session with nothing stored, for stores known to be empty
    pub fn anonymous(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            store,
            token: None,
            username: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Token to attach as a bearer credential
    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Name typed at login; not persisted across restarts
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Record a freshly issued token
    pub fn begin(&mut self, token: String, username: impl Into<String>) -> Result<()> {
        self.store.set_item(TOKEN_KEY, &token)?;
        self.token = Some(token);
        let username = username.into();
        self.username = if username.is_empty() { None } else { Some(username) };
        Ok(())
    }

    /// Forget the credential, in memory and in the store
    pub fn end(&mut self) -> Result<()> {
        self.token = None;
        self.username = None;
        self.store.remove_item(TOKEN_KEY)
    }
}
