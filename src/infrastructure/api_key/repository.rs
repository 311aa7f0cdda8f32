//! In-memory API key store

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::api_key::{ApiKey, ApiKeyRepository};
use crate::domain::DomainError;

/// In-memory implementation of `ApiKeyRepository`.
///
/// Used by tests and as an ephemeral backend; records do not survive a
/// restart.
#[derive(Debug, Default)]
pub struct InMemoryApiKeyRepository {
    keys: RwLock<HashMap<String, ApiKey>>,
}

impl InMemoryApiKeyRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with records
    pub fn with_keys(records: Vec<ApiKey>) -> Self {
        let keys = records
            .into_iter()
            .map(|record| (record.key().to_string(), record))
            .collect();

        Self {
            keys: RwLock::new(keys),
        }
    }
}

#[async_trait]
impl ApiKeyRepository for InMemoryApiKeyRepository {
    async fn put(&self, record: ApiKey) -> Result<(), DomainError> {
        let mut keys = self.keys.write().await;
        keys.insert(record.key().to_string(), record);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<ApiKey>, DomainError> {
        let keys = self.keys.read().await;
        Ok(keys.get(key).cloned())
    }

    async fn set_inactive(&self, key: &str) -> Result<(), DomainError> {
        let mut keys = self.keys.write().await;

        if let Some(record) = keys.get_mut(key) {
            record.revoke();
        }

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<ApiKey>, DomainError> {
        let keys = self.keys.read().await;
        Ok(keys.values().cloned().collect())
    }
}
