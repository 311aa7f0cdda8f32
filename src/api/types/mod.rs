//! API response and error types

pub mod error;
pub mod responses;

pub use error::{ApiError, ApiErrorResponse};
pub use responses::ApiKeyResponse;
