//! Extraction of `Authorization: ApiKey <token>` credentials from request headers,
//! plus axum guards that turn a missing or malformed header into 401 Unauthorized.

pub mod authentication;
pub use authentication::{
    api_key_guard, extract_api_key, ApiKey, ApiKeyAuthError, ApiKeyGuard, API_KEY_SCHEME,
};
mod logger;
pub use logger::{setup_info_logger, setup_logger};
pub mod shared;
pub use shared::HttpError;
