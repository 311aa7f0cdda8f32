//! API Key service
//!
//! High-level operations tying the generator and the store together:
//! issuance, validation, revocation, and listing.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, info};

use crate::domain::api_key::{ApiKey, ApiKeyRepository, Validation};
use crate::domain::DomainError;

use super::generator::ApiKeyGenerator;

/// Upper bound on the requested expiry window, in days
const MAX_EXPIRY_DAYS: i64 = 36_500;

/// API Key service
#[derive(Debug)]
pub struct ApiKeyService<R>
where
    R: ApiKeyRepository,
{
    repository: Arc<R>,
    generator: ApiKeyGenerator,
}

impl<R: ApiKeyRepository> ApiKeyService<R> {
    /// Create a new API key service
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            generator: ApiKeyGenerator::new(),
        }
    }

    /// Create with a custom generator
    pub fn with_generator(mut self, generator: ApiKeyGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Issue a new key for `owner`.
    ///
    /// `expires_in_days = Some(0)` (and any negative input, clamped) yields a
    /// key that is already expired at issuance; `None` means the key never
    /// expires. The raw key value lives in the returned record and is the
    /// caller's only chance to see it.
    pub async fn issue(
        &self,
        owner: &str,
        expires_in_days: Option<i64>,
    ) -> Result<ApiKey, DomainError> {
        if owner.is_empty() {
            return Err(DomainError::validation("Owner cannot be empty"));
        }

        let mut key = self.generator.generate();
        while self.repository.get(&key).await?.is_some() {
            key = self.generator.generate();
        }

        let mut record = ApiKey::new(key, owner);
        if let Some(days) = expires_in_days {
            let days = days.clamp(0, MAX_EXPIRY_DAYS);
            let created_at = record.created_at();
            record = record.with_expires_at(created_at + Duration::days(days));
        }

        self.repository.put(record.clone()).await?;

        info!(
            owner = %owner,
            key_prefix = %key_prefix(record.key()),
            expires_at = ?record.expires_at(),
            "API key issued"
        );

        Ok(record)
    }

    /// Insert a record with a caller-chosen key string.
    ///
    /// Used to seed a bootstrap admin key at startup; idempotent, so an
    /// already-present record is returned untouched.
    pub async fn issue_with_key(&self, key: &str, owner: &str) -> Result<ApiKey, DomainError> {
        if let Some(existing) = self.repository.get(key).await? {
            return Ok(existing);
        }

        let record = ApiKey::new(key, owner);
        self.repository.put(record.clone()).await?;

        info!(owner = %owner, key_prefix = %key_prefix(key), "API key seeded");

        Ok(record)
    }

    /// Validate a presented credential.
    ///
    /// Check order is fixed: presence, then existence, then the active flag,
    /// then expiry. Reads current store state on every call and never
    /// mutates it.
    pub async fn validate(&self, presented: Option<&str>) -> Result<Validation, DomainError> {
        let Some(presented) = presented.filter(|key| !key.is_empty()) else {
            return Ok(Validation::Missing);
        };

        debug!(key_prefix = %key_prefix(presented), "Validating API key");

        let record = self.repository.get(presented).await?;

        Ok(Validation::of_record(record, Utc::now()))
    }

    /// Revoke the key at `key`.
    ///
    /// Idempotent: revoking an unknown or already-revoked key is a no-op.
    pub async fn revoke(&self, key: &str) -> Result<(), DomainError> {
        info!(key_prefix = %key_prefix(key), "Revoking API key");

        self.repository.set_inactive(key).await
    }

    /// Full snapshot of every record in the store
    pub async fn list(&self) -> Result<Vec<ApiKey>, DomainError> {
        self.repository.list_all().await
    }
}

/// First characters of a key, safe to log
fn key_prefix(key: &str) -> String {
    key.chars().take(8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::api_key::InMemoryApiKeyRepository;

    fn create_service() -> ApiKeyService<InMemoryApiKeyRepository> {
        ApiKeyService::new(Arc::new(InMemoryApiKeyRepository::new()))
    }

    #[tokio::test]
    async fn test_issue_and_validate() {
        let service = create_service();

        let record = service.issue("alice", None).await.unwrap();
        assert_eq!(record.owner(), "alice");
        assert!(record.expires_at().is_none());

        let outcome = service.validate(Some(record.key())).await.unwrap();
        assert!(outcome.is_valid());
    }

    #[tokio::test]
    async fn test_issue_rejects_empty_owner() {
        let service = create_service();

        let result = service.issue("", None).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_issued_keys_are_distinct() {
        let service = create_service();

        let first = service.issue("alice", None).await.unwrap();
        let second = service.issue("alice", None).await.unwrap();

        assert_ne!(first.key(), second.key());
    }

    #[tokio::test]
    async fn test_validate_missing_credential() {
        let service = create_service();

        let outcome = service.validate(None).await.unwrap();
        assert!(matches!(outcome, Validation::Missing));

        // An empty header value counts as no credential at all
        let outcome = service.validate(Some("")).await.unwrap();
        assert!(matches!(outcome, Validation::Missing));
    }

    #[tokio::test]
    async fn test_validate_unknown_key() {
        let service = create_service();

        let outcome = service.validate(Some("kg_never_issued")).await.unwrap();
        assert!(matches!(outcome, Validation::NotFound));
    }

    #[tokio::test]
    async fn test_validate_revoked_key() {
        let service = create_service();
        let record = service.issue("alice", None).await.unwrap();

        service.revoke(record.key()).await.unwrap();

        let outcome = service.validate(Some(record.key())).await.unwrap();
        assert!(matches!(outcome, Validation::Revoked));
    }

    #[tokio::test]
    async fn test_validate_expired_key() {
        let service = create_service();

        // Zero days: expired at issuance
        let record = service.issue("alice", Some(0)).await.unwrap();
        assert_eq!(record.expires_at(), Some(record.created_at()));

        let outcome = service.validate(Some(record.key())).await.unwrap();
        assert!(matches!(outcome, Validation::Expired));
    }

    #[tokio::test]
    async fn test_negative_expiry_clamps_to_immediate() {
        let service = create_service();

        let record = service.issue("alice", Some(-5)).await.unwrap();
        assert_eq!(record.expires_at(), Some(record.created_at()));
    }

    #[tokio::test]
    async fn test_future_expiry_stays_valid() {
        let service = create_service();

        let record = service.issue("alice", Some(30)).await.unwrap();
        let expires_at = record.expires_at().unwrap();
        assert_eq!(expires_at, record.created_at() + Duration::days(30));

        let outcome = service.validate(Some(record.key())).await.unwrap();
        assert!(outcome.is_valid());
    }

    #[tokio::test]
    async fn test_revoked_and_expired_reports_revoked() {
        let service = create_service();
        let record = service.issue("alice", Some(0)).await.unwrap();

        service.revoke(record.key()).await.unwrap();

        let outcome = service.validate(Some(record.key())).await.unwrap();
        assert!(matches!(outcome, Validation::Revoked));
    }

    #[tokio::test]
    async fn test_revoke_is_idempotent() {
        let service = create_service();
        let record = service.issue("alice", None).await.unwrap();

        service.revoke(record.key()).await.unwrap();
        service.revoke(record.key()).await.unwrap();
        service.revoke("kg_never_issued").await.unwrap();
    }

    #[tokio::test]
    async fn test_issue_with_key_is_idempotent() {
        let service = create_service();

        let seeded = service.issue_with_key("kg_bootstrap", "admin").await.unwrap();
        assert!(seeded.is_admin());

        // Second seed leaves the existing record untouched
        let again = service.issue_with_key("kg_bootstrap", "other").await.unwrap();
        assert_eq!(again.owner(), "admin");

        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_list_snapshot() {
        let service = create_service();

        service.issue("alice", None).await.unwrap();
        service.issue("bob", None).await.unwrap();

        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
