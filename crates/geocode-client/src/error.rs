//! Gateway error type.

use thiserror::Error;

/// Errors from the geocoding gateway. None are fatal; callers surface a
/// transient notice and abandon the lookup.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("rate limited by the geocoding service")]
    RateLimited,

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("failed to parse response: {0}")]
    Parse(String),
}
