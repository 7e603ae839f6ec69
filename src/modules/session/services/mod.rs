pub mod credential_store;
pub mod session;

pub use credential_store::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use session::{Session, TOKEN_KEY};
