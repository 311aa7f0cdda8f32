//! Protected chat endpoint
//!
//! The chat UI and its model-serving calls live outside this service; this
//! endpoint is the gate they sit behind. It admits any valid key and echoes
//! the resolved record so the caller can inspect its own credential.

use axum::Json;
use serde::Serialize;

use crate::api::middleware::RequireApiKey;
use crate::api::types::ApiKeyResponse;

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub your_key_info: ApiKeyResponse,
}

/// POST /chat
pub async fn chat(RequireApiKey(record): RequireApiKey) -> Json<ChatResponse> {
    Json(ChatResponse {
        message: "Access granted".to_string(),
        your_key_info: ApiKeyResponse::from(&record),
    })
}
