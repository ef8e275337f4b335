use std::sync::Arc;

use crate::db::KeyValueStore;
use crate::errors::{AppError, ValidationError};
use crate::models::Credentials;

pub const CREDENTIALS_KEY: &str = "credentials";

#[derive(Clone)]
pub struct CredentialStore {
    kv: Arc<dyn KeyValueStore>,
}

impl CredentialStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Returns the saved gateway credentials. Missing, unreadable or
    /// half-filled records all count as "not configured".
    pub fn load(&self) -> Option<Credentials> {
        let raw = match self.kv.get(CREDENTIALS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored credentials");
                return None;
            }
        };

        match serde_json::from_str::<Credentials>(&raw) {
            Ok(creds) if creds.is_complete() => Some(creds),
            Ok(_) => {
                tracing::warn!("stored credentials are incomplete, ignoring");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored credentials are malformed, ignoring");
                None
            }
        }
    }

    pub fn save(&self, api_key: &str, sender_id: &str) -> Result<Credentials, AppError> {
        // Stored verbatim; whitespace only matters for the emptiness check.
        let creds = Credentials {
            api_key: api_key.to_string(),
            sender_id: sender_id.to_string(),
        };
        if !creds.is_complete() {
            return Err(ValidationError::MissingCredentials.into());
        }

        let raw = serde_json::to_string(&creds)?;
        self.kv.set(CREDENTIALS_KEY, &raw)?;

        tracing::info!(sender_id = %creds.sender_id, "saved SMS gateway credentials");
        Ok(creds)
    }
}
