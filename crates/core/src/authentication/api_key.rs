use std::fmt;

use axum::http::{header::AUTHORIZATION, HeaderMap};
use thiserror::Error;

use crate::shared::{unauthorized, HttpError};

/// The authorization scheme an API key must be presented under.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiKeyAuthError {
    #[error("no authorization header included")]
    NoAuthHeader,
    #[error("malformed authorization header")]
    MalformedAuthHeader,
}

impl ApiKeyAuthError {
    /// Maps the error to the 401 response handed back to the client.
    pub fn into_http_error(self) -> HttpError {
        unauthorized(Some(self.to_string()))
    }
}

impl From<ApiKeyAuthError> for HttpError {
    fn from(error: ApiKeyAuthError) -> HttpError {
        error.into_http_error()
    }
}

/// An API key token taken from the `Authorization` header.
///
/// The token is opaque and never empty. `Debug` redacts it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"<redacted>").finish()
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extracts an API key from the `Authorization` header.
///
/// Expects the header to look like `ApiKey <token>`. Only the first value of the
/// header is consulted and only the first word after the scheme is returned, any
/// further words are ignored.
///
/// # Arguments
/// * `headers` - The HTTP headers of the incoming request
///
/// # Returns
/// * `Ok(ApiKey)` - The token following the `ApiKey` scheme
/// * `Err(ApiKeyAuthError::NoAuthHeader)` - If the header is missing or empty
/// * `Err(ApiKeyAuthError::MalformedAuthHeader)` - If the header is not `ApiKey <token>`
pub fn extract_api_key(headers: &HeaderMap) -> Result<ApiKey, ApiKeyAuthError> {
    let value = match headers.get(AUTHORIZATION) {
        None => return Err(ApiKeyAuthError::NoAuthHeader),
        Some(value) if value.is_empty() => return Err(ApiKeyAuthError::NoAuthHeader),
        Some(value) => value.to_str().map_err(|_| ApiKeyAuthError::MalformedAuthHeader)?,
    };

    // split_whitespace drops the empty fields between consecutive separators
    let mut fields = value.split_whitespace();

    match (fields.next(), fields.next()) {
        (Some(API_KEY_SCHEME), Some(token)) => Ok(ApiKey(token.to_string())),
        _ => Err(ApiKeyAuthError::MalformedAuthHeader),
    }
}
