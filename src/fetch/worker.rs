//! The fetch worker: one GET, one [`ApiResult`].
//!
//! [`fetch`] is the pure-ish part (HTTP in, result out) so tests can call it
//! directly against a mock server.  [`run_worker`] wraps it with the channel
//! send and is what the dispatcher spawns.

use std::time::{Duration, Instant};

use bytes::Bytes;
use reqwest::{Client, StatusCode};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::{ApiResult, FetchError, FetchTarget};

/// Build the HTTP client shared by every worker.
///
/// `timeout` bounds each request from the moment it is sent until the body
/// has been read.
pub fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder().timeout(timeout).build()
}

/// Fetch one target and classify the outcome.
///
/// Never fails: every error becomes part of the returned [`ApiResult`].
/// Latency runs from just before the request is built until the outcome is
/// known, so it includes the body read on success and read failures.
pub async fn fetch(client: &Client, target: &FetchTarget) -> ApiResult {
    let start = Instant::now();
    let outcome = get_body(client, target).await;
    let latency = start.elapsed();

    match outcome {
        Ok(body) => ApiResult::success(target, body, latency),
        Err(error) => ApiResult::failure(target, error, latency),
    }
}

async fn get_body(client: &Client, target: &FetchTarget) -> Result<Bytes, FetchError> {
    let request = client
        .get(target.url())
        .build()
        .map_err(FetchError::Build)?;

    // From here on `response` owns the connection; every early return drops it.
    let response = client.execute(request).await.map_err(FetchError::Send)?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::UnexpectedStatus(status.as_u16()));
    }

    response.bytes().await.map_err(FetchError::BodyRead)
}

/// Fetch `target` and send the result on `results`.
///
/// The send happens before this future completes, so by the time the task's
/// `JoinHandle` resolves the result is already queued.  `results` is dropped
/// on return, including during unwinding.
pub async fn run_worker(client: Client, target: FetchTarget, results: mpsc::Sender<ApiResult>) {
    debug!(url = %target, "fetch started");

    let result = fetch(&client, &target).await;

    match result.error() {
        Some(error) => warn!(url = %target, latency = ?result.latency(), %error, "fetch failed"),
        None => debug!(
            url = %target,
            latency = ?result.latency(),
            bytes = result.body().map_or(0, |body| body.len()),
            "fetch succeeded"
        ),
    }

    // The consumer only goes away if the process is shutting down.
    if results.send(result).await.is_err() {
        debug!(url = %target, "result channel closed; dropping result");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
