//! API key authentication middleware

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::api_key::{ApiKey, Validation};

/// Header carrying the bearer credential
pub const API_KEY_HEADER: &str = "x-api-key";

/// Extractor that requires a valid API key in the `X-API-KEY` header.
///
/// A missing credential is reported as 401; a presented-but-unusable one
/// (unknown, revoked, or expired) as 403 with a reason-specific message.
/// Handlers receive the record resolved by this request's own validation.
#[derive(Debug, Clone)]
pub struct RequireApiKey(pub ApiKey);

impl FromRequestParts<AppState> for RequireApiKey {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let presented = extract_api_key_from_headers(&parts.headers)?;

        let outcome = state
            .api_key_service
            .validate(presented.as_deref())
            .await
            .map_err(ApiError::from)?;

        match outcome {
            Validation::Valid(record) => {
                debug!(owner = %record.owner(), "API key accepted");
                Ok(RequireApiKey(record))
            }
            Validation::Missing => Err(ApiError::unauthorized("API key missing")),
            Validation::NotFound => Err(ApiError::forbidden("Invalid API key")),
            Validation::Revoked => Err(ApiError::forbidden("API key revoked")),
            Validation::Expired => Err(ApiError::forbidden("API key expired")),
        }
    }
}

fn extract_api_key_from_headers(
    headers: &axum::http::HeaderMap,
) -> Result<Option<String>, ApiError> {
    let Some(value) = headers.get(API_KEY_HEADER) else {
        return Ok(None);
    };

    let key = value
        .to_str()
        .map_err(|_| ApiError::bad_request("Invalid X-API-KEY header encoding"))?;

    Ok(Some(key.trim().to_string()))
}
