use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::{
    authentication::api_key::{extract_api_key, ApiKey},
    shared::HttpError,
};

/// Extracts the API key and logs why the request was rejected when it fails.
///
/// The key itself is never logged.
fn authenticate(headers: &HeaderMap) -> Result<ApiKey, HttpError> {
    extract_api_key(headers).map_err(|error| {
        warn!("rejected request without a usable api key - {}", error);
        error.into_http_error()
    })
}

/// Extractor guard that requires an `Authorization: ApiKey <token>` header.
///
/// Rejects with 401 Unauthorized and one of the two fixed error messages when the
/// header is missing or malformed.
pub struct ApiKeyGuard(pub ApiKey);

impl<S> FromRequestParts<S> for ApiKeyGuard
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        authenticate(&parts.headers).map(ApiKeyGuard)
    }
}

/// Middleware guard that requires an API key on every request it wraps.
///
/// On success the extracted `ApiKey` is stored in the request extensions so
/// handlers can pick it up with `Extension<ApiKey>`.
///
/// # Arguments
/// * `req` - The HTTP request to validate
/// * `next` - The next middleware in the chain
///
/// # Returns
/// * `Ok(Response)` - If the header holds an API key, continues to the next middleware
/// * `Err(HttpError)` - UNAUTHORIZED if the header is missing or malformed
pub async fn api_key_guard(mut req: Request<Body>, next: Next) -> Result<Response, HttpError> {
    let api_key = authenticate(req.headers())?;
    req.extensions_mut().insert(api_key);
    Ok(next.run(req).await)
}
