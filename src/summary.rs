use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::fetch::ApiResult;

/// Running tally kept by the consumer while it drains results.
pub struct Summary {
    started_at: DateTime<Local>,
    started: Instant,
    succeeded: usize,
    failed: usize,
}

impl Summary {
    pub fn start() -> Self {
        Self {
            started_at: Local::now(),
            started: Instant::now(),
            succeeded: 0,
            failed: 0,
        }
    }

    /// Count one result.  Results are not retained.
    pub fn record(&mut self, result: &ApiResult) {
        if result.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Wall-clock time the run began, shown in the banners.
    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
