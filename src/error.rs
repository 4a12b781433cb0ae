//! Error types for Gutendex API operations.

use thiserror::Error;

/// Errors that can occur during Gutendex API operations.
///
/// Every client operation resolves to exactly one success value or one of
/// these variants. Transport failures, empty bodies, undecodable success
/// bodies, and API-level rejections are kept apart so callers can match on
/// the kind of failure.
#[derive(Debug, Error)]
pub enum GutendexError {
    /// Client construction failed.
    #[error("Gutendex configuration error: {0}")]
    Config(String),

    /// The request never produced a readable response (connection refused,
    /// DNS failure, timeout, truncated stream).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was zero-length.
    #[error("Empty response body (HTTP {status})")]
    EmptyBody { status: u16 },

    /// A successful response whose body does not match the expected shape.
    #[error("Failed to parse response (HTTP {status}): {source}")]
    Parse {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The API rejected the request.
    ///
    /// `message` is the API's `detail` field when the error body decodes,
    /// otherwise `"HTTP <code>: <reason>"`; in that case `source` keeps the
    /// decode failure.
    #[error("{message}")]
    Api {
        message: String,
        status_code: u16,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The page has no `next` link.
    #[error("No next page available")]
    NoNextPage,

    /// The page has no `previous` link.
    #[error("No previous page available")]
    NoPreviousPage,

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl GutendexError {
    /// HTTP status attached to this error, if the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            GutendexError::Api { status_code, .. } => Some(*status_code),
            GutendexError::EmptyBody { status } | GutendexError::Parse { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Whether the API reported the resource as missing (HTTP 404).
    pub fn is_not_found(&self) -> bool {
        matches!(self, GutendexError::Api { status_code: 404, .. })
    }

    /// Whether this is a transport-level failure.
    pub fn is_network(&self) -> bool {
        matches!(self, GutendexError::Network(_))
    }
}

/// Result type alias for Gutendex operations.
pub type Result<T> = core::result::Result<T, GutendexError>;
