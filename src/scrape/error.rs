use thiserror::Error;

/// Error type for the fetch-then-extract path.
///
/// Distinguishes a malformed request from an upstream failure so callers
/// do not have to conflate either with "page had no events".
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The target URL did not parse
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport-level failure (unreachable host, timeout, ...)
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote server answered with a non-success status
    #[error("upstream returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),
}
