#![allow(dead_code)]

use std::num::NonZeroUsize;
use std::time::Duration;

use taskpool::config::PoolOptions;
use taskpool::types::Task;

/// Builder for an ordered task list, with indices assigned in insertion order.
#[derive(Debug, Default)]
pub struct TaskListBuilder {
    tasks: Vec<Task>,
}

impl TaskListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task(mut self, name: &str, duration_secs: u64) -> Self {
        let index = self.tasks.len();
        self.tasks.push(Task::new(index, name, duration_secs));
        self
    }

    /// `count` tasks named `task-<i>`, all with the same duration.
    pub fn uniform(count: usize, duration_secs: u64) -> Self {
        (0..count).fold(Self::new(), |b, i| {
            b.with_task(&format!("task-{i}"), duration_secs)
        })
    }

    /// Render the list in task-file syntax.
    pub fn to_source(&self) -> String {
        self.tasks
            .iter()
            .map(|t| format!("{}: {}\n", t.name, t.duration_secs))
            .collect()
    }

    pub fn build(self) -> Vec<Task> {
        self.tasks
    }
}

/// Pool options for tests: `concurrency` workers and a custom render cadence.
pub fn options(concurrency: usize, render_interval: Duration) -> PoolOptions {
    let concurrency = NonZeroUsize::new(concurrency).expect("concurrency must be positive");
    PoolOptions::new(concurrency).with_render_interval(render_interval)
}
