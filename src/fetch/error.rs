//! Failure classification for a single fetch.
//!
//! Every variant is terminal for the worker that produced it but never for
//! the process: the worker stores it inside an [`ApiResult`](super::ApiResult)
//! and the consumer prints it like any other result.

use thiserror::Error;

/// Why a fetch did not produce a body.
///
/// Timeouts are deliberately folded into [`FetchError::Send`]; callers see
/// an expired deadline the same way they see a refused connection.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL could not be turned into a request.
    #[error("error creating request: {0}")]
    Build(#[source] reqwest::Error),

    /// The request could not be sent or no response arrived in time.
    #[error("error sending request: {0}")]
    Send(#[source] reqwest::Error),

    /// The server answered with anything other than `200 OK`.
    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),

    /// The response arrived but its body stream failed.
    #[error("error reading response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    /// The worker task panicked or was cancelled before it could report.
    #[error("fetch worker aborted: {0}")]
    WorkerAborted(String),
}
