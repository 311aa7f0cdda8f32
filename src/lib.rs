//! Keygate
//!
//! An API-key issuance and validation gate for a local chat service:
//! - Issues opaque bearer credentials from a secure random source
//! - Persists key records in a flat keyed store (JSON file or in-memory)
//! - Gates protected endpoints on liveness, expiry, and revocation state
//! - Restricts administrative operations to the admin owner identity

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::{ApiKeyServiceTrait, AppState};
use config::StoreBackend;
use domain::api_key::{ApiKeyRepository, ADMIN_OWNER};
use infrastructure::api_key::{
    ApiKeyService, InMemoryApiKeyRepository, JsonFileApiKeyRepository,
};

/// Create the application state with the configured store backend
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let api_key_service: Arc<dyn ApiKeyServiceTrait> = match config.store.backend {
        StoreBackend::Json => {
            info!("Using JSON file key store at {}", config.store.path);

            let repository = Arc::new(JsonFileApiKeyRepository::new(&config.store.path));
            let service = ApiKeyService::new(repository);
            seed_admin_key(&service).await?;

            Arc::new(service)
        }
        StoreBackend::Memory => {
            info!("Using in-memory key store");

            let service = ApiKeyService::new(Arc::new(InMemoryApiKeyRepository::new()));
            seed_admin_key(&service).await?;

            Arc::new(service)
        }
    };

    Ok(AppState::new(api_key_service))
}

/// Seed a bootstrap admin key from the environment, if configured.
///
/// Lets operators exercise the admin endpoints without first issuing a key
/// through the unauthenticated issuance endpoint. Idempotent across restarts.
async fn seed_admin_key<R: ApiKeyRepository>(service: &ApiKeyService<R>) -> anyhow::Result<()> {
    if let Ok(admin_key) = std::env::var("ADMIN_API_KEY") {
        if !admin_key.is_empty() {
            service.issue_with_key(&admin_key, ADMIN_OWNER).await?;
            info!("Admin API key seeded from environment");
        }
    }

    Ok(())
}
