//! API Key domain
//!
//! Domain types and traits for API key management: the key record with its
//! lifecycle rules, the store abstraction, and the validation outcome.

mod entity;
mod repository;
mod validation;

pub use entity::{ApiKey, ADMIN_OWNER, DEFAULT_RATE_LIMIT};
pub use repository::ApiKeyRepository;
pub use validation::Validation;
