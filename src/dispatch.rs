//! Fan-out / fan-in.
//!
//! [`spawn`] starts one tokio task per target plus a closer task, and hands
//! back a [`ResultStream`] the caller drains on its own task.
//!
//! ## How the channel closes
//!
//! Every worker holds a clone of the result [`mpsc::Sender`]; the closer
//! holds the original.  A worker's clone is dropped when its task ends
//! (normally or by panic).  The closer awaits every worker's `JoinHandle`
//! and only then drops the original, so the consumer sees `None` exactly
//! once, after all results are queued.  Closing happens off the consumer's
//! path, so the consumer can block on `recv` without deadlocking.

use std::time::Instant;

use futures::future::join_all;
use reqwest::Client;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::fetch::{run_worker, ApiResult, FetchError, FetchTarget};
use crate::report;

/// Receiving end of the fan-in channel.
///
/// Yields exactly one [`ApiResult`] per target, in arrival order, then
/// `None` forever.
pub struct ResultStream {
    rx: mpsc::Receiver<ApiResult>,
}

impl ResultStream {
    /// Wait for the next result, or `None` once every worker has finished
    /// and all results have been read.
    pub async fn next(&mut self) -> Option<ApiResult> {
        self.rx.recv().await
    }

    /// Drain the stream into a `Vec`, in arrival order.
    #[cfg(test)]
    pub async fn collect(mut self) -> Vec<ApiResult> {
        let mut results = Vec::new();
        while let Some(result) = self.next().await {
            results.push(result);
        }
        results
    }
}

/// A running worker and the target it was given.
struct Worker {
    target: FetchTarget,
    handle: JoinHandle<()>,
}

/// Start fetching every target concurrently.
///
/// Must be called from within a tokio runtime.  With no targets the
/// returned stream ends immediately.
pub fn spawn(client: &Client, targets: &[FetchTarget]) -> ResultStream {
    // One slot per worker so no send ever waits on the consumer.  tokio
    // rejects a zero-capacity channel.
    let (tx, rx) = mpsc::channel(targets.len().max(1));
    let started = Instant::now();

    let workers = targets
        .iter()
        .map(|target| Worker {
            target: target.clone(),
            handle: tokio::spawn(run_worker(client.clone(), target.clone(), tx.clone())),
        })
        .collect();

    tokio::spawn(close_when_done(workers, tx, started));

    ResultStream { rx }
}

/// Wait for every worker, then drop the last sender.
///
/// A worker that panicked or was cancelled never sent its result; one is
/// sent on its behalf so the consumer still sees one result per target.
async fn close_when_done(workers: Vec<Worker>, results: mpsc::Sender<ApiResult>, started: Instant) {
    let (targets, handles): (Vec<_>, Vec<_>) = workers
        .into_iter()
        .map(|w| (w.target, w.handle))
        .unzip();

    let joined = join_all(handles).await;

    for (target, outcome) in targets.iter().zip(joined) {
        if let Err(join_error) = outcome {
            if join_error.is_panic() {
                error!(url = %target, %join_error, "fetch worker panicked");
            } else {
                warn!(url = %target, %join_error, "fetch worker cancelled");
            }
            let error = FetchError::WorkerAborted(join_error.to_string());
            let result = ApiResult::failure(target, error, started.elapsed());
            if results.send(result).await.is_err() {
                break;
            }
        }
    }

    info!(workers = targets.len(), "all fetch workers finished; closing result channel");
    report::print_closed(targets.len());

    drop(results);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
