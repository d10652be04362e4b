// src/types.rs

//! Shared task model used across the pool.

use std::fmt;
use std::time::Duration;

/// Position of a task in the loaded list; the stable key for the queue and
/// the status table.
pub type TaskIndex = usize;

/// A named unit of simulated work.
///
/// Immutable once loaded. Names are for display only and may repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub index: TaskIndex,
    pub name: String,
    pub duration_secs: u64,
}

impl Task {
    pub fn new(index: TaskIndex, name: impl Into<String>, duration_secs: u64) -> Self {
        Self {
            index,
            name: name.into(),
            duration_secs,
        }
    }

    /// How long a worker pauses to "run" this task.
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }
}

/// Lifecycle stage of a task.
///
/// Ordered so that a legal transition always moves to a greater value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Pending,
    Running,
    Done,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Pending => "Pending",
            Stage::Running => "Running",
            Stage::Done => "Done",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
