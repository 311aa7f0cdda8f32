//! Application state for shared services

use std::sync::Arc;

use crate::domain::api_key::{ApiKey, ApiKeyRepository, Validation};
use crate::domain::DomainError;
use crate::infrastructure::api_key::ApiKeyService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub api_key_service: Arc<dyn ApiKeyServiceTrait>,
}

impl AppState {
    pub fn new(api_key_service: Arc<dyn ApiKeyServiceTrait>) -> Self {
        Self { api_key_service }
    }
}

/// Trait for API key service operations
#[async_trait::async_trait]
pub trait ApiKeyServiceTrait: Send + Sync {
    async fn issue(
        &self,
        owner: &str,
        expires_in_days: Option<i64>,
    ) -> Result<ApiKey, DomainError>;
    async fn validate(&self, presented: Option<&str>) -> Result<Validation, DomainError>;
    async fn revoke(&self, key: &str) -> Result<(), DomainError>;
    async fn list(&self) -> Result<Vec<ApiKey>, DomainError>;
}

#[async_trait::async_trait]
impl<R: ApiKeyRepository + 'static> ApiKeyServiceTrait for ApiKeyService<R> {
    async fn issue(
        &self,
        owner: &str,
        expires_in_days: Option<i64>,
    ) -> Result<ApiKey, DomainError> {
        ApiKeyService::issue(self, owner, expires_in_days).await
    }

    async fn validate(&self, presented: Option<&str>) -> Result<Validation, DomainError> {
        ApiKeyService::validate(self, presented).await
    }

    async fn revoke(&self, key: &str) -> Result<(), DomainError> {
        ApiKeyService::revoke(self, key).await
    }

    async fn list(&self) -> Result<Vec<ApiKey>, DomainError> {
        ApiKeyService::list(self).await
    }
}
