use std::sync::atomic::{AtomicU64, Ordering};

use tracing::info;

use crate::client::Submission;
use crate::error::Result;

/// Per-run submission counters, owned and aggregated by the caller.
#[derive(Debug, Default)]
pub struct Stats {
    pub attempted: AtomicU64,
    pub accepted: AtomicU64,
    pub throttled: AtomicU64,
    pub failed: AtomicU64,

    // Last observed value, gauge-style; a histogram would be overkill here.
    pub last_submit_latency_ms: AtomicU64,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, outcome: &Result<Submission>) {
        self.attempted.fetch_add(1, Ordering::Relaxed);
        match outcome {
            Ok(Submission::Accepted(_)) => self.accepted.fetch_add(1, Ordering::Relaxed),
            Ok(Submission::Throttled) => self.throttled.fetch_add(1, Ordering::Relaxed),
            Err(_) => self.failed.fetch_add(1, Ordering::Relaxed),
        };
    }

    pub fn update_submit_latency(&self, ms: u64) {
        self.last_submit_latency_ms.store(ms, Ordering::Relaxed);
    }

    pub fn log_stats(&self) {
        let attempted = self.attempted.load(Ordering::Relaxed);
        let accepted = self.accepted.load(Ordering::Relaxed);
        let throttled = self.throttled.load(Ordering::Relaxed);
        let failed = self.failed.load(Ordering::Relaxed);
        let latency = self.last_submit_latency_ms.load(Ordering::Relaxed);

        info!(
            "STATS: Attempted: {} | Accepted: {} | Throttled: {} | Failed: {} | Last submit: {}ms",
            attempted, accepted, throttled, failed, latency
        );
    }
}
