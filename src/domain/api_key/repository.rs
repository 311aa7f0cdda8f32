//! API Key store trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::ApiKey;
use crate::domain::DomainError;

/// Store abstraction for API key records.
///
/// Implementations must keep writes atomic with respect to concurrent reads:
/// a reader never observes a partially written record. Records are only ever
/// inserted or status-flipped, never removed.
#[async_trait]
pub trait ApiKeyRepository: Send + Sync + Debug {
    /// Insert or overwrite the record at `record.key`
    async fn put(&self, record: ApiKey) -> Result<(), DomainError>;

    /// Look up a record by its key string
    async fn get(&self, key: &str) -> Result<Option<ApiKey>, DomainError>;

    /// Flip `is_active` to false for the record at `key`.
    ///
    /// No-op (not an error) when the key does not exist or is already
    /// inactive.
    async fn set_inactive(&self, key: &str) -> Result<(), DomainError>;

    /// Full snapshot of every record in the store
    async fn list_all(&self) -> Result<Vec<ApiKey>, DomainError>;
}
