//! Gutendex API client.
//!
//! Low-level HTTP client that issues single GET requests and normalizes every
//! outcome into a typed value or a [`GutendexError`]. Higher-level operations
//! are implemented via traits on entity types.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{GutendexError, Result};
use crate::models::ApiError;

/// Default API location.
pub const DEFAULT_API_URL: &str = "https://gutendex.com";

/// Default bound for each phase of a request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("gutendex/", env!("CARGO_PKG_VERSION"));

/// Construction-time settings for [`GutendexClient`].
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use gutendex::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_base_url("http://localhost:8000")
///     .with_connect_timeout(Duration::from_secs(5))
///     .with_verbose(true);
/// assert_eq!(config.base_url, "http://localhost:8000");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL. Defaults to [`DEFAULT_API_URL`].
    pub base_url: String,
    /// Time allowed to establish a connection.
    pub connect_timeout: Duration,
    /// Time allowed between reads of the response.
    pub read_timeout: Duration,
    /// Time allowed for the whole exchange, sending the request included.
    pub request_timeout: Duration,
    /// Log requests and responses at `info` instead of `debug`.
    pub verbose: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            connect_timeout: DEFAULT_TIMEOUT,
            read_timeout: DEFAULT_TIMEOUT,
            request_timeout: DEFAULT_TIMEOUT,
            verbose: false,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Low-level Gutendex API client.
///
/// Every request is a single GET with no retry. Entity-specific operations
/// are implemented via the `Get` and `List` traits on model types.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool and may be used concurrently.
///
/// # Example
///
/// ```no_run
/// use gutendex::GutendexClient;
///
/// # fn example() -> gutendex::Result<()> {
/// let client = GutendexClient::new("https://gutendex.com")?;
/// // ... issue requests ...
/// client.shutdown();
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GutendexClient {
    http: Client,
    base_url: Arc<Url>,
    verbose: bool,
}

impl std::fmt::Debug for GutendexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GutendexClient")
            .field("base_url", &self.base_url.as_str())
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

impl GutendexClient {
    /// Create a client from environment variables.
    ///
    /// Reads `GUTENDEX_API_URL` for the base URL (defaults to
    /// `https://gutendex.com`) and `GUTENDEX_VERBOSE` (`1` or `true`) for
    /// verbose logging.
    pub fn from_env() -> Result<Self> {
        let mut config = ClientConfig::default();
        if let Ok(base_url) = env::var("GUTENDEX_API_URL") {
            config.base_url = base_url;
        }
        if let Ok(verbose) = env::var("GUTENDEX_VERBOSE") {
            config.verbose = matches!(verbose.as_str(), "1" | "true");
        }
        Self::with_config(config)
    }

    /// Create a client for `base_url` with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default().with_base_url(base_url))
    }

    /// Create a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be built.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        // Ensure base URL ends with / so joins keep any path prefix
        let base_url_str = if config.base_url.ends_with('/') {
            config.base_url.clone()
        } else {
            format!("{}/", config.base_url)
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| GutendexError::Config(e.to_string()))?;

        tracing::debug!(base_url = %base_url, verbose = config.verbose, "creating GutendexClient");

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            verbose: config.verbose,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `path` against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// GET `path` relative to the base URL and decode the body as `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        self.get_url(url).await
    }

    /// GET an absolute URL and decode the body as `T`.
    ///
    /// The whole body is read before the status is inspected. See
    /// [`classify_response`] for how the outcome is decided.
    #[tracing::instrument(skip(self, url), fields(url = %url))]
    pub async fn get_url<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        if self.verbose {
            tracing::info!("GET {url}");
        } else {
            tracing::debug!("GET {url}");
        }

        let response = self.http.get(url).send().await.map_err(|e| {
            tracing::warn!(error = %e, "request failed");
            GutendexError::Network(e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(GutendexError::Network)?;

        if self.verbose {
            tracing::info!(status = status.as_u16(), len = body.len(), "response");
            tracing::debug!(%body, "response body");
        } else {
            tracing::debug!(status = status.as_u16(), len = body.len(), "response");
        }

        classify_response(status, &body)
    }

    /// Release this handle's share of the connection pool.
    ///
    /// The pool closes once every clone has been shut down or dropped. Callers
    /// must let in-flight requests on this handle finish first.
    pub fn shutdown(self) {
        tracing::debug!(base_url = %self.base_url, "shutting down GutendexClient");
        drop(self.http);
    }
}

/// Turn a status code and fully read body into a typed outcome.
///
/// - An empty body is [`GutendexError::EmptyBody`] whatever the status.
/// - A 2xx body decodes as `T`, or fails with [`GutendexError::Parse`].
/// - Any other status becomes [`GutendexError::Api`], carrying the body's
///   `detail` when it decodes as [`ApiError`] and `"HTTP <code>: <reason>"`
///   otherwise.
pub fn classify_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    if body.is_empty() {
        return Err(GutendexError::EmptyBody {
            status: status.as_u16(),
        });
    }

    if status.is_success() {
        return serde_json::from_str(body).map_err(|source| GutendexError::Parse {
            status: status.as_u16(),
            source,
        });
    }

    match serde_json::from_str::<ApiError>(body) {
        Ok(api_error) => Err(GutendexError::Api {
            message: api_error.detail,
            status_code: status.as_u16(),
            source: None,
        }),
        Err(source) => Err(GutendexError::Api {
            message: format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Status")
            ),
            status_code: status.as_u16(),
            source: Some(source),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        id: u64,
    }

    #[test]
    fn test_client_debug() {
        let client = GutendexClient::new("https://gutendex.com").unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("GutendexClient"));
        assert!(debug.contains("base_url"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client1 = GutendexClient::new("https://gutendex.com/api").unwrap();
        let client2 = GutendexClient::new("https://gutendex.com/api/").unwrap();
        assert_eq!(client1.base_url().as_str(), client2.base_url().as_str());
        assert_eq!(
            client1.endpoint("books").unwrap().as_str(),
            "https://gutendex.com/api/books"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = GutendexClient::new("not a url").unwrap_err();
        assert!(matches!(err, GutendexError::InvalidUrl(_)));
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
        assert_eq!(config.read_timeout, Duration::from_secs(30));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(!config.verbose);
    }

    #[test]
    fn test_classify_success() {
        let thing: Thing = classify_response(StatusCode::OK, r#"{"id": 7}"#).unwrap();
        assert_eq!(thing, Thing { id: 7 });
    }

    #[test]
    fn test_classify_success_ignores_unknown_fields() {
        let thing: Thing =
            classify_response(StatusCode::OK, r#"{"id": 7, "extra": [1, 2]}"#).unwrap();
        assert_eq!(thing.id, 7);
    }

    #[test]
    fn test_classify_unparseable_success_is_parse_error() {
        let err = classify_response::<Thing>(StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, GutendexError::Parse { status: 200, .. }));
    }

    #[test]
    fn test_classify_empty_body_any_status() {
        for status in [StatusCode::OK, StatusCode::NOT_FOUND, StatusCode::BAD_GATEWAY] {
            let err = classify_response::<Thing>(status, "").unwrap_err();
            assert!(matches!(err, GutendexError::EmptyBody { .. }));
            assert_eq!(err.status_code(), Some(status.as_u16()));
        }
    }

    #[test]
    fn test_classify_detail_error() {
        let err = classify_response::<Thing>(
            StatusCode::NOT_FOUND,
            r#"{"detail": "No Book matches the given query."}"#,
        )
        .unwrap_err();
        match err {
            GutendexError::Api {
                message,
                status_code,
                source,
            } => {
                assert_eq!(message, "No Book matches the given query.");
                assert_eq!(status_code, 404);
                assert!(source.is_none());
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_unparseable_error_body() {
        let err = classify_response::<Thing>(StatusCode::INTERNAL_SERVER_ERROR, "oops")
            .unwrap_err();
        match err {
            GutendexError::Api {
                message,
                status_code,
                source,
            } => {
                assert_eq!(message, "HTTP 500: Internal Server Error");
                assert_eq!(status_code, 500);
                assert!(source.is_some());
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }
}
