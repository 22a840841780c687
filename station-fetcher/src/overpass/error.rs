//! Overpass client error types.

/// Errors from a single Overpass request.
#[derive(Debug, thiserror::Error)]
pub enum OverpassError {
    /// The request did not complete within the client timeout
    #[error("request timed out after {secs}s; Overpass API might be busy")]
    Timeout { secs: u64 },

    /// Transport failure (DNS, connection refused, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Interpreter answered with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
