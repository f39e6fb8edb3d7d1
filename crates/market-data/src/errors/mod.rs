//! Error types for the market data crate.
//!
//! [`MarketDataError`] covers the whole request lifecycle: configuration,
//! request validation, upstream transport and upstream payload decoding.
//! Callers translate it into a response once, at their own boundary.

use thiserror::Error;

use crate::models::QueryKind;

/// Number of body characters kept when a payload cannot be decoded.
pub const BODY_EXCERPT_CHARS: usize = 200;

/// Errors that can occur while serving a market data request.
///
/// None of these are retried. [`is_client_error`](Self::is_client_error)
/// tells the caller whether the request itself was at fault.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider's API key or secret is absent from configuration.
    /// Raised before any upstream call is made.
    #[error("API keys are not configured.")]
    MissingCredentials,

    /// The request cannot be forwarded (unknown type, missing symbol, bad limit).
    /// No upstream call is made.
    #[error("{0}")]
    InvalidRequest(String),

    /// The provider answered with a non-success HTTP status.
    #[error("{provider} {kind} request failed: {status} - {body}")]
    UpstreamStatus {
        /// The provider that returned the status
        provider: String,
        /// Which request kind was being served
        kind: QueryKind,
        /// Upstream HTTP status code
        status: u16,
        /// Upstream response body, as text
        body: String,
    },

    /// The provider's response body is not valid JSON.
    #[error("{provider} {kind} API returned malformed JSON: {excerpt}...")]
    MalformedPayload {
        /// The provider that sent the body
        provider: String,
        /// Which request kind was being served
        kind: QueryKind,
        /// The first [`BODY_EXCERPT_CHARS`] characters of the raw body
        excerpt: String,
    },

    /// The body is valid JSON but lacks the expected array.
    #[error("{provider} {kind} response has no '{kind}' array or an unexpected format")]
    UnexpectedFormat {
        /// The provider that sent the body
        provider: String,
        /// Which request kind was being served; also names the missing field
        kind: QueryKind,
    },

    /// The provider could not be reached or the body could not be read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Builds a [`MalformedPayload`](Self::MalformedPayload) error from the raw body.
    pub fn malformed(provider: &str, kind: QueryKind, body: &[u8]) -> Self {
        Self::MalformedPayload {
            provider: provider.to_string(),
            kind,
            excerpt: excerpt(body),
        }
    }

    /// Returns true when the caller's request was invalid.
    ///
    /// Everything else is a server-side failure: missing configuration or a
    /// misbehaving upstream.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }
}

/// Lossy UTF-8 view of the first [`BODY_EXCERPT_CHARS`] characters of `body`.
pub fn excerpt(body: &[u8]) -> String {
    String::from_utf8_lossy(body)
        .chars()
        .take(BODY_EXCERPT_CHARS)
        .collect()
}
