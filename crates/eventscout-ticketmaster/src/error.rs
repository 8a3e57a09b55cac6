use eventscout_core::GeohashError;
use thiserror::Error;

/// Failure reported by an [`crate::HttpFetch`] implementation.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The `reqwest::Client` could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Network, TLS, or body-read failure. `url` has the API key redacted and
    /// `source` carries no URL.
    #[error("HTTP error for {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },
}

/// Errors from the discovery search pipeline.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The coordinates could not be geohashed; no request was sent.
    #[error("invalid search location: {0}")]
    InvalidLocation(#[from] GeohashError),

    #[error("invalid discovery URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The response body was not valid JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON without the expected envelope structure.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
}
