// src/pool/status.rs

//! Per-task lifecycle table.
//!
//! Workers apply the two transitions of the task they hold
//! (`Pending -> Running -> Done`); the coordinator takes snapshots. One mutex
//! guards the whole table, so every transition writes its stage and
//! timestamp together and a snapshot never sees half of one.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta};
use tokio::time::Instant;
use tracing::warn;

use crate::types::{Stage, Task, TaskIndex};

/// Pairs the monotonic clock with the wall clock at the start of a run.
///
/// Timestamps are recorded as [`Instant`]s and converted for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunEpoch {
    instant: Instant,
    wall: DateTime<Local>,
}

impl RunEpoch {
    pub fn now() -> Self {
        Self {
            instant: Instant::now(),
            wall: Local::now(),
        }
    }

    pub fn started(&self) -> Instant {
        self.instant
    }

    /// Wall-clock time corresponding to `at`.
    pub fn wall_clock(&self, at: Instant) -> DateTime<Local> {
        let offset = TimeDelta::from_std(at.saturating_duration_since(self.instant))
            .unwrap_or(TimeDelta::zero());
        self.wall + offset
    }
}

/// Status of one task.
///
/// `started_at` is set exactly when the stage is `Running` or `Done`;
/// `finished_at` exactly when it is `Done`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStatus {
    pub index: TaskIndex,
    pub name: String,
    pub stage: Stage,
    pub started_at: Option<Instant>,
    pub finished_at: Option<Instant>,
}

impl TaskStatus {
    fn pending(task: &Task) -> Self {
        Self {
            index: task.index,
            name: task.name.clone(),
            stage: Stage::Pending,
            started_at: None,
            finished_at: None,
        }
    }

    /// Time between start and finish, once the task is done.
    pub fn elapsed(&self) -> Option<Duration> {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => Some(end.saturating_duration_since(start)),
            _ => None,
        }
    }
}

/// Consistent copy of the whole table at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub epoch: RunEpoch,
    pub rows: Vec<TaskStatus>,
}

impl Snapshot {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn all_done(&self) -> bool {
        self.rows.iter().all(|row| row.stage == Stage::Done)
    }

    pub fn count(&self, stage: Stage) -> usize {
        self.rows.iter().filter(|row| row.stage == stage).count()
    }
}

/// The shared status table for one run.
///
/// The lock is private; the only way in is through the transition methods
/// and [`StatusTable::snapshot`].
#[derive(Debug)]
pub struct StatusTable {
    epoch: RunEpoch,
    entries: Mutex<Vec<TaskStatus>>,
}

impl StatusTable {
    /// Allocate one `Pending` entry per task, keyed by task index.
    pub fn new(tasks: &[Task]) -> Self {
        debug_assert!(
            tasks.iter().enumerate().all(|(i, t)| t.index == i),
            "task indices must match list positions"
        );
        Self {
            epoch: RunEpoch::now(),
            entries: Mutex::new(tasks.iter().map(TaskStatus::pending).collect()),
        }
    }

    pub fn epoch(&self) -> RunEpoch {
        self.epoch
    }

    /// `Pending -> Running`, stamping the start time.
    ///
    /// Returns `false` and leaves the entry untouched if the index is unknown
    /// or the task is not pending.
    #[must_use]
    pub fn set_running(&self, index: TaskIndex, at: Instant) -> bool {
        self.transition(index, Stage::Pending, |entry| {
            entry.stage = Stage::Running;
            entry.started_at = Some(at);
        })
    }

    /// `Running -> Done`, stamping the finish time.
    ///
    /// Returns `false` and leaves the entry untouched if the index is unknown
    /// or the task is not running.
    #[must_use]
    pub fn set_done(&self, index: TaskIndex, at: Instant) -> bool {
        self.transition(index, Stage::Running, |entry| {
            entry.stage = Stage::Done;
            entry.finished_at = Some(at);
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Snapshot {
            epoch: self.epoch,
            rows: entries.clone(),
        }
    }

    fn transition(
        &self,
        index: TaskIndex,
        expected: Stage,
        apply: impl FnOnce(&mut TaskStatus),
    ) -> bool {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(entry) = entries.get_mut(index) else {
            warn!(index, "status update for unknown task index ignored");
            return false;
        };
        if entry.stage != expected {
            warn!(
                index,
                task = %entry.name,
                stage = %entry.stage,
                expected = %expected,
                "out-of-order status update ignored"
            );
            return false;
        }
        apply(entry);
        true
    }
}
