mod api_key;
pub use api_key::{extract_api_key, ApiKey, ApiKeyAuthError, API_KEY_SCHEME};

mod guards;
pub use guards::{api_key_guard, ApiKeyGuard};
