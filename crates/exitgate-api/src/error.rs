use thiserror::Error;

/// Failures while fetching or decoding a provider listing.
///
/// Transport and decode problems stay distinct so callers can tell a
/// flaky network from a provider changing its payload under us.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL construction error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Non-success HTTP status from the provider API.
    #[error("Provider API returned HTTP {status}")]
    Status { status: u16, body: String },

    /// JSON decoding failed, with the raw body kept for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}
