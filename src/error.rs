use strum::IntoStaticStr;

/// Status code the caller is expected to answer with when extraction fails.
const UNAUTHORIZED: u16 = 401;

// -- Error type

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ExtractError {
    /// The request carries no credential at all.
    #[error("no authorization header included")]
    NoAuthHeader,
    /// A credential is present, but not in the `<scheme> <key>` shape.
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Closed classification of [`ExtractError`], for callers that only care about the cause.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    NoAuthHeader,
    MalformedHeader,
}

impl ExtractError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractError::NoAuthHeader => ErrorKind::NoAuthHeader,
            ExtractError::MalformedHeader => ErrorKind::MalformedHeader,
        }
    }

    pub fn status_code(&self) -> u16 {
        UNAUTHORIZED
    }
}

impl From<ExtractError> for ErrorKind {
    fn from(value: ExtractError) -> Self {
        value.kind()
    }
}

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum OptionsError {
    #[error("the header name must not be empty")]
    EmptyHeaderName,
    #[error("the scheme token must not be empty")]
    EmptyScheme,
    #[error("the scheme token must not contain whitespace, got {0:?}")]
    SchemeWithWhitespace(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_variant() {
        assert_eq!(ExtractError::NoAuthHeader.kind(), ErrorKind::NoAuthHeader);
        assert_eq!(
            ExtractError::MalformedHeader.kind(),
            ErrorKind::MalformedHeader
        );
        assert_ne!(
            ErrorKind::from(ExtractError::NoAuthHeader),
            ErrorKind::from(ExtractError::MalformedHeader)
        );
    }

    #[test]
    fn kind_names() {
        let name: &'static str = ErrorKind::NoAuthHeader.into();
        assert_eq!(name, "no_auth_header");
        let name: &'static str = ErrorKind::MalformedHeader.into();
        assert_eq!(name, "malformed_header");
    }

    #[test]
    fn both_kinds_map_to_unauthorized() {
        assert_eq!(ExtractError::NoAuthHeader.status_code(), 401);
        assert_eq!(ExtractError::MalformedHeader.status_code(), 401);
    }
}
