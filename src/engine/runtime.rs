// src/engine/runtime.rs

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::{JoinError, JoinSet};
use tokio::time::Instant;
use tracing::{debug, info};

use crate::config::PoolOptions;
use crate::errors::{Result, TaskpoolError};
use crate::pool::{
    run_worker, SimulatedWork, Snapshot, StatusTable, TaskQueue, TaskWork, WorkerSummary,
};
use crate::render::Renderer;
use crate::types::Task;

use super::core::{CoordinatorCore, Observation};

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The snapshot given to the final render.
    pub snapshot: Snapshot,
    /// Time from spawning the pool to the final render.
    pub elapsed: Duration,
    /// Frames rendered, including the final one.
    pub frames: usize,
    /// One entry per worker, in the order they were joined.
    pub workers: Vec<WorkerSummary>,
}

/// Owns one scheduling run: spawns the pool, observes the status table at a
/// fixed cadence, waits for every worker, then renders the final state.
///
/// Decisions are delegated to [`CoordinatorCore`]; this type only does the
/// async work around it.
pub struct Coordinator<R: Renderer> {
    tasks: Vec<Task>,
    options: PoolOptions,
    renderer: R,
    work: Arc<dyn TaskWork>,
}

impl<R: Renderer> fmt::Debug for Coordinator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coordinator")
            .field("tasks", &self.tasks.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<R: Renderer> Coordinator<R> {
    pub fn new(tasks: Vec<Task>, options: PoolOptions, renderer: R) -> Self {
        Self {
            tasks,
            options,
            renderer,
            work: Arc::new(SimulatedWork),
        }
    }

    /// Replace the simulated pause with other per-task work.
    pub fn with_work(mut self, work: Arc<dyn TaskWork>) -> Self {
        self.work = work;
        self
    }

    pub async fn run(mut self) -> Result<RunReport> {
        let started = Instant::now();
        let mut core = CoordinatorCore::new();

        let table = Arc::new(StatusTable::new(&self.tasks));
        let queue = Arc::new(TaskQueue::new(std::mem::take(&mut self.tasks)));

        let concurrency = self.options.concurrency.get();
        info!(tasks = queue.len(), concurrency, "starting worker pool");

        let mut pool = JoinSet::new();
        for worker in 0..concurrency {
            pool.spawn(run_worker(
                worker,
                Arc::clone(&queue),
                Arc::clone(&table),
                Arc::clone(&self.work),
            ));
        }
        core.workers_spawned();

        let mut workers = Vec::with_capacity(concurrency);
        loop {
            // A worker that died mid-task leaves it `Running` for good, so
            // reap exited workers before looking for completion.
            while let Some(joined) = pool.try_join_next() {
                workers.push(reap(joined)?);
            }

            // Queue first, snapshot second; see `is_complete`.
            let queue_drained = queue.is_empty();
            let snapshot = table.snapshot();

            match core.observe(queue_drained, &snapshot) {
                Observation::Complete => break,
                Observation::Render => {
                    self.renderer.render(&snapshot)?;
                    tokio::time::sleep(self.options.render_interval).await;
                }
            }
        }

        debug!("all tasks done; draining worker pool");
        while let Some(joined) = pool.join_next().await {
            workers.push(reap(joined)?);
        }
        core.workers_joined();

        let snapshot = table.snapshot();
        self.renderer.render(&snapshot)?;

        let elapsed = started.elapsed();
        info!(
            tasks = snapshot.len(),
            frames = core.frames(),
            elapsed_ms = elapsed.as_millis() as u64,
            "run complete"
        );

        Ok(RunReport {
            snapshot,
            elapsed,
            frames: core.frames(),
            workers,
        })
    }
}

fn reap(joined: std::result::Result<WorkerSummary, JoinError>) -> Result<WorkerSummary> {
    let summary = joined.map_err(|e| TaskpoolError::WorkerPanicked(e.to_string()))?;
    debug!(worker = summary.worker, ran = summary.completed.len(), "worker joined");
    Ok(summary)
}
