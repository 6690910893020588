//! fanfetch — fetch a handful of HTTP endpoints in parallel and print each
//! result as it arrives.
//!
//! ## Architecture overview
//!
//! ```text
//!              spawn           ApiResult            next()
//! ┌──────────┐ ─────► ┌──────────┐ ────► ┌─────────┐ ─────► ┌───────────┐
//! │   main   │        │ worker×N │       │ channel │        │ report.rs │
//! └──────────┘        └──────────┘       └─────────┘        └───────────┘
//!       │                   │ JoinHandle      ▲ drop last sender
//!       │ spawn             ▼                 │
//!       └────────────► ┌──────────┐ ──────────┘
//!                      │  closer  │
//!                      └──────────┘
//! ```
//!
//! * **`fetch/`** — the [`ApiResult`](fetch::ApiResult) record, the error
//!   taxonomy, and the single-URL worker.
//! * **`dispatch`** — spawns one task per target plus the closer, and exposes
//!   the receiving end as a `ResultStream`.
//! * **`summary`** — the consumer's running tally.
//! * **`report`** — console formatting.
//! * **`config`** — the fixed target list and per-request timeout.
//! * **`logging`** — `tracing` subscriber setup.
//! * **`main`** — wires everything together and runs the consumer loop.

mod config;
mod dispatch;
mod fetch;
mod logging;
mod report;
mod summary;

use anyhow::{Context, Result};

use config::FetchConfig;
use summary::Summary;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing();

    let config = FetchConfig::default();
    let client = fetch::build_client(config.timeout()).context("failed to build HTTP client")?;

    let mut summary = Summary::start();
    report::print_start(&summary, config.targets().len());

    let mut results = dispatch::spawn(&client, config.targets());

    // Ends once the closer has seen every worker finish.
    while let Some(result) = results.next().await {
        report::print_result(&result);
        summary.record(&result);
    }

    report::print_finish(&summary);

    Ok(())
}
