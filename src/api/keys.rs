//! Key issuance and administration endpoints

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::RequireAdmin;
use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiKeyResponse};

const ISSUE_WARNING: &str = "Save this key - it won't be shown again!";

/// Query parameters for key issuance
#[derive(Debug, Deserialize)]
pub struct GenerateKeyParams {
    pub owner: String,
    #[serde(default)]
    pub expires_in_days: Option<i64>,
}

/// Issuance response; the only place the raw key is ever returned
#[derive(Debug, Serialize)]
pub struct GenerateKeyResponse {
    pub api_key: String,
    pub warning: String,
}

/// POST /generate-key
pub async fn generate_key(
    State(state): State<AppState>,
    Query(params): Query<GenerateKeyParams>,
) -> Result<Json<GenerateKeyResponse>, ApiError> {
    debug!(owner = %params.owner, "Issuing API key");

    let record = state
        .api_key_service
        .issue(&params.owner, params.expires_in_days)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(GenerateKeyResponse {
        api_key: record.key().to_string(),
        warning: ISSUE_WARNING.to_string(),
    }))
}

/// Full store snapshot, keyed the way it is persisted
#[derive(Debug, Serialize)]
pub struct ListKeysResponse {
    pub keys: BTreeMap<String, ApiKeyResponse>,
    pub total: usize,
}

/// GET /keys
pub async fn list_keys(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
) -> Result<Json<ListKeysResponse>, ApiError> {
    debug!("Admin listing all API keys");

    let records = state.api_key_service.list().await.map_err(ApiError::from)?;

    let keys: BTreeMap<String, ApiKeyResponse> = records
        .iter()
        .map(|record| (record.key().to_string(), ApiKeyResponse::from(record)))
        .collect();
    let total = keys.len();

    Ok(Json(ListKeysResponse { keys, total }))
}

/// Revocation acknowledgement
#[derive(Debug, Serialize)]
pub struct RevokeKeyResponse {
    pub status: String,
    pub message: String,
}

/// POST /revoke-key/{key}
pub async fn revoke_key(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(key): Path<String>,
) -> Result<Json<RevokeKeyResponse>, ApiError> {
    debug!("Admin revoking API key");

    state
        .api_key_service
        .revoke(&key)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(RevokeKeyResponse {
        status: "success".to_string(),
        message: format!("Key {} revoked", key),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_key_params_deserialization() {
        let params: GenerateKeyParams =
            serde_json::from_str(r#"{"owner": "alice", "expires_in_days": 7}"#).unwrap();

        assert_eq!(params.owner, "alice");
        assert_eq!(params.expires_in_days, Some(7));
    }

    #[test]
    fn test_generate_key_params_without_expiry() {
        let params: GenerateKeyParams = serde_json::from_str(r#"{"owner": "alice"}"#).unwrap();

        assert_eq!(params.owner, "alice");
        assert!(params.expires_in_days.is_none());
    }

    #[test]
    fn test_generate_key_response_serialization() {
        let response = GenerateKeyResponse {
            api_key: "kg_test_abc".to_string(),
            warning: ISSUE_WARNING.to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"api_key\":\"kg_test_abc\""));
        assert!(json.contains("won't be shown again"));
    }

    #[test]
    fn test_list_keys_response_serialization() {
        let response = ListKeysResponse {
            keys: BTreeMap::new(),
            total: 0,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"keys\":{}"));
        assert!(json.contains("\"total\":0"));
    }
}
