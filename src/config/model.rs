// src/config/model.rs

use std::num::NonZeroUsize;
use std::time::Duration;

/// Cadence of the status display loop.
pub const DEFAULT_RENDER_INTERVAL: Duration = Duration::from_secs(1);

/// Validated settings for one scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolOptions {
    /// Number of workers spawned for the run.
    pub concurrency: NonZeroUsize,
    /// Pause between two observations of the status table.
    pub render_interval: Duration,
}

impl PoolOptions {
    pub fn new(concurrency: NonZeroUsize) -> Self {
        Self {
            concurrency,
            render_interval: DEFAULT_RENDER_INTERVAL,
        }
    }

    pub fn with_render_interval(mut self, interval: Duration) -> Self {
        self.render_interval = interval;
        self
    }
}
