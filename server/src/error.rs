//! Error types for the proxy server.

use thiserror::Error;

/// Failures that stop the server from starting or serving.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client construction failed
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Socket bind or accept failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for server setup and lifecycle.
pub type ServerResult<T> = Result<T, ServerError>;

/// Failures while fetching or interpreting the upstream ETD response.
///
/// The `Display` text is what the device shows, so it must never contain the
/// API key (request URLs are stripped from transport errors).
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Connection, timeout or body read failure
    #[error("{0}")]
    Transport(reqwest::Error),

    /// Body was not the expected JSON
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("No 'root' object found in API response")]
    MissingRoot,

    #[error("No station data found")]
    MissingStation,

    #[error("No departure times found")]
    MissingDepartures,
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self { Self::Transport(err.without_url()) }
}
