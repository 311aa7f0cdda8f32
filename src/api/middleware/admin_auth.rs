//! Admin authorization middleware

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::api_key::ApiKey;

use super::auth::RequireApiKey;

/// Extractor that requires a valid API key owned by the admin identity.
///
/// Layered strictly on top of `RequireApiKey`: an invalid credential never
/// reaches the owner check, and the check always runs against the record
/// resolved by the current request's validation.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub ApiKey);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireApiKey(record) = RequireApiKey::from_request_parts(parts, state).await?;

        if !record.is_admin() {
            return Err(ApiError::forbidden("Admin access required"));
        }

        debug!(owner = %record.owner(), "Admin access granted");
        Ok(RequireAdmin(record))
    }
}
