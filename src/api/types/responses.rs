//! Shared response DTOs

use serde::Serialize;

use crate::domain::api_key::ApiKey;

/// Key record as exposed over the API
#[derive(Debug, Clone, Serialize)]
pub struct ApiKeyResponse {
    pub key: String,
    pub owner: String,
    pub created_at: String,
    pub expires_at: Option<String>,
    pub is_active: bool,
    pub rate_limit: u32,
}

impl From<&ApiKey> for ApiKeyResponse {
    fn from(record: &ApiKey) -> Self {
        Self {
            key: record.key().to_string(),
            owner: record.owner().to_string(),
            created_at: record.created_at().to_rfc3339(),
            expires_at: record.expires_at().map(|dt| dt.to_rfc3339()),
            is_active: record.is_active(),
            rate_limit: record.rate_limit(),
        }
    }
}
