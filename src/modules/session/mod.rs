// Session module

pub mod services;

pub use services::{CredentialStore, FileCredentialStore, MemoryCredentialStore, Session, TOKEN_KEY};
