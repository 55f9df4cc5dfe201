use crate::Header;
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;

/// Read access to a collection of request headers.
///
/// Names are matched case-insensitively. When a header repeats, `extract` yields its first value.
pub trait HeaderMap {
    type Error: fmt::Debug;

    fn extract(&self, name: &str) -> Result<Option<&str>, Self::Error>;
}

impl HeaderMap for Vec<(String, String)> {
    type Error = Infallible;

    fn extract(&self, name: &str) -> Result<Option<&str>, Self::Error> {
        for (k, v) in self {
            if k.eq_ignore_ascii_case(name) {
                return Ok(Some(v));
            }
        }
        Ok(None)
    }
}

impl HeaderMap for Vec<Header> {
    type Error = Infallible;

    fn extract(&self, name: &str) -> Result<Option<&str>, Self::Error> {
        Ok(self
            .iter()
            .find(|h| h.key.eq_ignore_ascii_case(name))
            .map(|h| &*h.value))
    }
}

impl<S: std::hash::BuildHasher> HeaderMap for HashMap<String, Vec<String>, S> {
    type Error = Infallible;

    fn extract(&self, name: &str) -> Result<Option<&str>, Self::Error> {
        // Keys are stored as the caller wrote them, so a direct lookup is only a fast path
        let values = match self.get(name) {
            Some(values) => Some(values),
            None => self
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v),
        };
        Ok(values.and_then(|v| v.first()).map(String::as_str))
    }
}

#[cfg(feature = "http")]
impl HeaderMap for http::HeaderMap {
    type Error = http::header::ToStrError;

    fn extract(&self, name: &str) -> Result<Option<&str>, Self::Error> {
        self.get(name).map(|hv| hv.to_str()).transpose()
    }
}
