//! Run configuration: which URLs to fetch and how long each may take.
//!
//! The target list is fixed; [`FetchConfig::default`] carries the two
//! endpoints the binary fetches.  Tests build their own config pointing at
//! mock servers.

use std::time::Duration;

use crate::fetch::FetchTarget;

/// Per-request timeout applied to every worker.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Endpoints fetched by the binary.
pub const DEFAULT_URLS: [&str; 2] = [
    "https://httpbin.org/get?source=api1",
    "https://httpbin.org/delay/1",
];

#[derive(Debug, Clone)]
pub struct FetchConfig {
    targets: Vec<FetchTarget>,
    timeout: Duration,
}

impl FetchConfig {
    pub fn new(targets: Vec<FetchTarget>) -> Self {
        Self {
            targets,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn targets(&self) -> &[FetchTarget] {
        &self.targets
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_URLS.iter().copied().map(FetchTarget::new).collect())
    }
}
