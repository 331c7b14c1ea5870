mod http_errors;
pub use http_errors::{unauthorized, HttpError};
