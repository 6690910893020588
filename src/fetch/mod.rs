//! Single-URL fetching.
//!
//! This module defines the [`ApiResult`] record, the [`FetchError`]
//! taxonomy, and the worker that turns one [`FetchTarget`] into one result.
//! Fan-out and fan-in live in [`crate::dispatch`]; nothing here knows how
//! many workers are running.

mod error;
mod result;
mod worker;

pub use error::FetchError;
pub use result::{ApiResult, FetchTarget};
pub use worker::{build_client, run_worker};
