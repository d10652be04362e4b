// src/pool/worker.rs

//! Pull-and-run loop of a single pool member.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::time::Instant;
use tracing::{debug, info};

use crate::pool::queue::TaskQueue;
use crate::pool::status::StatusTable;
use crate::types::{Task, TaskIndex};

/// What a worker does while a task is `Running`.
///
/// Production uses [`SimulatedWork`]; real execution or test doubles plug
/// in here.
pub trait TaskWork: Send + Sync {
    fn perform<'a>(&'a self, task: &'a Task) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>>;
}

/// Pauses for the task's duration. Cannot fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedWork;

impl TaskWork for SimulatedWork {
    fn perform<'a>(&'a self, task: &'a Task) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(tokio::time::sleep(task.duration()))
    }
}

pub type WorkerId = usize;

/// What a worker did before it exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerSummary {
    pub worker: WorkerId,
    /// Indices of the tasks this worker ran, in the order it ran them.
    pub completed: Vec<TaskIndex>,
}

/// Run tasks from `queue` until it is exhausted.
///
/// For each task: mark it running, perform `work`, mark it done. The worker
/// exits as soon as it finds the queue empty, since nothing is ever added
/// later.
pub async fn run_worker(
    worker: WorkerId,
    queue: Arc<TaskQueue>,
    table: Arc<StatusTable>,
    work: Arc<dyn TaskWork>,
) -> WorkerSummary {
    debug!(worker, "worker started");
    let mut completed = Vec::new();

    while let Some(task) = queue.try_take() {
        info!(
            worker,
            index = task.index,
            task = %task.name,
            duration_secs = task.duration_secs,
            "running task"
        );
        // This worker is the only writer for `task.index`, so both
        // transitions must apply.
        let started = table.set_running(task.index, Instant::now());
        debug_assert!(started, "task {} was not pending", task.index);

        work.perform(&task).await;

        let finished = table.set_done(task.index, Instant::now());
        debug_assert!(finished, "task {} was not running", task.index);
        debug!(worker, index = task.index, task = %task.name, "task done");
        completed.push(task.index);
    }

    debug!(worker, ran = completed.len(), "queue exhausted; worker exiting");
    WorkerSummary { worker, completed }
}
