// src/pool/queue.rs

//! Drain-only task queue shared by all workers.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use crate::types::Task;

/// FIFO of tasks waiting for a worker.
///
/// Filled once at construction and never refilled, so an empty queue means
/// every task has been handed out.
#[derive(Debug)]
pub struct TaskQueue {
    inner: Mutex<VecDeque<Task>>,
}

impl TaskQueue {
    pub fn new(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            inner: Mutex::new(tasks.into_iter().collect()),
        }
    }

    /// Take the next task without blocking.
    ///
    /// `None` means the queue is exhausted; the lock is released before the
    /// caller sees the task.
    pub fn try_take(&self) -> Option<Task> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of tasks not yet handed out.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}
