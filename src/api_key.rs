// Copyright (c) 2024 - Restate Software, Inc., Restate GmbH.
// All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::error::{ExtractError, OptionsError};
use crate::headers::HeaderMap;
use crate::{Header, ResponseHead};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::{debug, instrument};

const AUTHORIZATION_HEADER: &str = "authorization";
const WWW_AUTHENTICATE_HEADER: &str = "www-authenticate";
const API_KEY_SCHEME: &str = "ApiKey";
const SCHEME_SEPARATOR: char = ' ';
const LINE_BREAK: char = '\n';

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorOptions {
    /// Name of the header carrying the credential. Looked up case-insensitively.
    pub header_name: Cow<'static, str>,
    /// Scheme token that must precede the key. Compared case-sensitively.
    pub scheme: Cow<'static, str>,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            header_name: Cow::Borrowed(AUTHORIZATION_HEADER),
            scheme: Cow::Borrowed(API_KEY_SCHEME),
        }
    }
}

impl ExtractorOptions {
    fn validate(&self) -> Result<(), OptionsError> {
        if self.header_name.is_empty() {
            return Err(OptionsError::EmptyHeaderName);
        }
        if self.scheme.is_empty() {
            return Err(OptionsError::EmptyScheme);
        }
        if self.scheme.contains(char::is_whitespace) {
            return Err(OptionsError::SchemeWithWhitespace(self.scheme.to_string()));
        }
        Ok(())
    }
}

/// Pulls the key out of `Authorization: ApiKey <key>`.
///
/// The extractor holds no state besides its options: it never touches the headers it reads,
/// and the same input always produces the same outcome.
#[derive(Debug, Clone, Default)]
pub struct ApiKeyExtractor {
    options: ExtractorOptions,
}

impl ApiKeyExtractor {
    pub fn new(options: ExtractorOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn with_header_name(
        mut self,
        header_name: impl Into<Cow<'static, str>>,
    ) -> Result<Self, OptionsError> {
        self.options.header_name = header_name.into();
        Self::new(self.options)
    }

    pub fn with_scheme(
        mut self,
        scheme: impl Into<Cow<'static, str>>,
    ) -> Result<Self, OptionsError> {
        self.options.scheme = scheme.into();
        Self::new(self.options)
    }

    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    /// Returns the key exactly as sent, without trimming or decoding.
    ///
    /// Only the first value of a repeated header is considered.
    #[instrument(level = "trace", skip_all, fields(header = %self.options.header_name))]
    pub fn extract<'h, H>(&self, headers: &'h H) -> Result<&'h str, ExtractError>
    where
        H: HeaderMap + ?Sized,
    {
        let value = match headers.extract(&self.options.header_name) {
            Ok(Some(value)) if !value.is_empty() => value,
            Ok(_) => {
                debug!(
                    kind = <&'static str>::from(ExtractError::NoAuthHeader.kind()),
                    "No {} header", self.options.header_name
                );
                return Err(ExtractError::NoAuthHeader);
            }
            Err(e) => {
                debug!(
                    kind = <&'static str>::from(ExtractError::MalformedHeader.kind()),
                    "Cannot read {} header: {e:?}", self.options.header_name
                );
                return Err(ExtractError::MalformedHeader);
            }
        };

        self.parse_value(value)
    }

    fn parse_value<'v>(&self, value: &'v str) -> Result<&'v str, ExtractError> {
        let Some((scheme, key)) = value.split_once(SCHEME_SEPARATOR) else {
            return Err(self.malformed("missing separator after the scheme"));
        };
        if scheme != self.options.scheme {
            return Err(self.malformed("unexpected scheme"));
        }
        if !key.starts_with(|c: char| !c.is_whitespace()) {
            return Err(self.malformed("empty key"));
        }
        if key.contains(LINE_BREAK) {
            return Err(self.malformed("line break in key"));
        }
        Ok(key)
    }

    // Values are left out of the log, they may hold a key
    fn malformed(&self, reason: &'static str) -> ExtractError {
        debug!(
            kind = <&'static str>::from(ExtractError::MalformedHeader.kind()),
            reason,
            "Expected {} header in the form '{} <key>'",
            self.options.header_name,
            self.options.scheme
        );
        ExtractError::MalformedHeader
    }

    /// The response head a caller should send back when [`Self::extract`] fails.
    pub fn rejection(&self, error: &ExtractError) -> ResponseHead {
        ResponseHead {
            status_code: error.status_code(),
            headers: vec![Header {
                key: Cow::Borrowed(WWW_AUTHENTICATE_HEADER),
                value: self.options.scheme.clone(),
            }],
        }
    }
}

/// Extracts the key from the `Authorization` header, expecting the `ApiKey` scheme.
pub fn get_api_key<H>(headers: &H) -> Result<&str, ExtractError>
where
    H: HeaderMap + ?Sized,
{
    ApiKeyExtractor::default().extract(headers)
}
