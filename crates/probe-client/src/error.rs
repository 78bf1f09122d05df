//! Prober errors

use thiserror::Error;

/// Errors that can occur when probing a target URL
#[derive(Debug, Error)]
pub enum ProbeError {
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Target answered outside the 2xx range
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
}
