/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum InstagramError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{message}")]
    NotFound { message: String, code: Option<u32> },

    #[error("{message}")]
    Authentication { message: String, code: Option<u32> },

    #[error("{message}")]
    NotPermitted { message: String, code: Option<u32> },

    #[error("{message}")]
    Generic { message: String, code: Option<u32> },

    #[error("API Response is malformed: {0:?}")]
    ResponseMalformed(serde_json::Error),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),
}

/// Category of an [`InstagramError`] for callers that only need to branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Authentication,
    NotPermitted,
    Generic,
    Malformed,
}

impl InstagramError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Authentication { .. } => ErrorKind::Authentication,
            Self::NotPermitted { .. } => ErrorKind::NotPermitted,
            Self::Generic { .. } => ErrorKind::Generic,
            Self::ResponseMalformed(_) | Self::Deserialization(_) | Self::UrlParsing(_) => {
                ErrorKind::Malformed
            }
        }
    }

    /// Numeric code reported by the API (or the HTTP status) when one is available
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::NotFound { code, .. }
            | Self::Authentication { code, .. }
            | Self::NotPermitted { code, .. }
            | Self::Generic { code, .. } => *code,
            _ => None,
        }
    }

    pub(crate) fn missing_access_token() -> Self {
        Self::Authentication {
            message: "Access token has not been set".into(),
            code: None,
        }
    }

    pub(crate) fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
            code: None,
        }
    }
}
