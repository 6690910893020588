//! The record every fetch worker hands back to the consumer.
//!
//! An [`ApiResult`] is built exactly once, right before it is sent on the
//! result channel, and is read exactly once by the consumer.  It is never
//! mutated in between, so all fields are private and exposed through
//! accessors.

use std::fmt;
use std::time::Duration;

use bytes::Bytes;

use super::FetchError;

/// One URL to retrieve.
///
/// Targets are fixed at startup; each worker owns exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchTarget {
    url: String,
}

impl FetchTarget {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for FetchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Outcome of fetching a single [`FetchTarget`].
///
/// The body and the error live in one `Result`, so a result can never carry
/// both, and can never carry neither.
#[derive(Debug)]
pub struct ApiResult {
    url: String,
    outcome: Result<Bytes, FetchError>,
    latency: Duration,
}

impl ApiResult {
    pub fn success(target: &FetchTarget, body: Bytes, latency: Duration) -> Self {
        Self {
            url: target.url.clone(),
            outcome: Ok(body),
            latency,
        }
    }

    pub fn failure(target: &FetchTarget, error: FetchError, latency: Duration) -> Self {
        Self {
            url: target.url.clone(),
            outcome: Err(error),
            latency,
        }
    }

    /// The URL this result came from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The body on success, the error on failure.
    pub fn outcome(&self) -> Result<&[u8], &FetchError> {
        self.outcome.as_ref().map(|b| b.as_ref())
    }

    /// Response body, present only on success.
    pub fn body(&self) -> Option<&[u8]> {
        self.outcome.as_ref().ok().map(|b| b.as_ref())
    }

    /// Failure description, present only on failure.
    pub fn error(&self) -> Option<&FetchError> {
        self.outcome.as_ref().err()
    }

    /// Time from request start until the outcome was known.
    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}
