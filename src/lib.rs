//! Extraction of API keys from the `Authorization` header of HTTP requests.
//!
//! The key is expected as `Authorization: ApiKey <key>`. Verifying it against a key store is up
//! to the caller.

mod api_key;
mod error;
mod headers;

use std::borrow::Cow;

pub use api_key::{get_api_key, ApiKeyExtractor, ExtractorOptions};
pub use error::{ErrorKind, ExtractError, OptionsError};
pub use headers::HeaderMap;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Header {
    pub key: Cow<'static, str>,
    pub value: Cow<'static, str>,
}

/// Head of the response the caller sends when a request is rejected.
#[derive(Debug)]
pub struct ResponseHead {
    pub status_code: u16,
    pub headers: Vec<Header>,
}

#[cfg(test)]
mod tests;
