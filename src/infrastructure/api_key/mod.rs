//! API Key infrastructure implementations
//!
//! Key generation, the in-memory and JSON-file store backends, and the
//! service that ties generation, persistence, and validation together.

mod file_repository;
mod generator;
mod repository;
mod service;

pub use file_repository::JsonFileApiKeyRepository;
pub use generator::ApiKeyGenerator;
pub use repository::InMemoryApiKeyRepository;
pub use service::ApiKeyService;
