// src/engine/core.rs

//! Pure coordinator state machine.
//!
//! `Init -> Dispatching -> Rendering -> Draining -> Done`
//!
//! No Tokio types, no IO: the runtime feeds it observations of the queue and
//! the status table and acts on the answer.

use tracing::debug;

use crate::pool::Snapshot;

/// Lifecycle phase of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Tasks loaded, shared state not yet handed to workers.
    Init,
    /// Workers spawned; nothing observed yet.
    Dispatching,
    /// Observation loop in progress.
    Rendering,
    /// Completion detected; waiting for workers to exit.
    Draining,
    /// All workers joined; final frame may be rendered.
    Done,
}

/// What the runtime should do after one observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// Not complete: render this snapshot, then wait one interval.
    Render,
    /// Every task is done; leave the loop.
    Complete,
}

/// Global completion: the queue has been observed empty and, in a snapshot
/// taken after that, every task is done.
///
/// Callers must read the queue before taking the snapshot. A task taken from
/// the queue stays `Pending` until its worker marks it running, so the
/// snapshot can never report a dispatched-but-unfinished task as done.
pub fn is_complete(queue_drained: bool, snapshot: &Snapshot) -> bool {
    queue_drained && snapshot.all_done()
}

#[derive(Debug)]
pub struct CoordinatorCore {
    phase: Phase,
    frames: usize,
}

impl Default for CoordinatorCore {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinatorCore {
    pub fn new() -> Self {
        Self {
            phase: Phase::Init,
            frames: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Frames requested so far, including the final one.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Workers have been spawned.
    pub fn workers_spawned(&mut self) {
        debug_assert_eq!(self.phase, Phase::Init, "workers spawned twice");
        self.enter(Phase::Dispatching);
    }

    /// Evaluate one observation of the run.
    pub fn observe(&mut self, queue_drained: bool, snapshot: &Snapshot) -> Observation {
        debug_assert!(
            matches!(self.phase, Phase::Dispatching | Phase::Rendering),
            "observe called in phase {:?}",
            self.phase
        );

        if is_complete(queue_drained, snapshot) {
            self.enter(Phase::Draining);
            return Observation::Complete;
        }

        self.enter(Phase::Rendering);
        self.frames += 1;
        Observation::Render
    }

    /// All workers have exited. The final frame is always rendered.
    pub fn workers_joined(&mut self) {
        debug_assert_eq!(self.phase, Phase::Draining, "joined before completion");
        self.enter(Phase::Done);
        self.frames += 1;
    }

    fn enter(&mut self, next: Phase) {
        if self.phase != next {
            debug!(from = ?self.phase, to = ?next, "coordinator phase change");
            self.phase = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::StatusTable;
    use crate::types::Task;
    use tokio::time::Instant;

    fn tasks(n: usize) -> Vec<Task> {
        (0..n).map(|i| Task::new(i, format!("t{i}"), 1)).collect()
    }

    #[test]
    fn running_task_after_queue_drained_is_not_complete() {
        let table = StatusTable::new(&tasks(2));
        let now = Instant::now();
        assert!(table.set_running(0, now));
        assert!(table.set_done(0, now));
        assert!(table.set_running(1, now));

        assert!(!is_complete(true, &table.snapshot()));
        assert!(table.set_done(1, now));
        assert!(is_complete(true, &table.snapshot()));
    }

    #[test]
    fn taken_but_unstarted_task_is_not_complete() {
        // Queue drained by a worker that has not yet marked its task running.
        let table = StatusTable::new(&tasks(1));
        assert!(!is_complete(true, &table.snapshot()));
    }

    #[test]
    fn non_empty_queue_is_never_complete() {
        let table = StatusTable::new(&[]);
        assert!(!is_complete(false, &table.snapshot()));
    }

    #[test]
    fn walks_through_every_phase() {
        let table = StatusTable::new(&tasks(1));
        let mut core = CoordinatorCore::new();
        assert_eq!(core.phase(), Phase::Init);

        core.workers_spawned();
        assert_eq!(core.phase(), Phase::Dispatching);

        assert_eq!(core.observe(true, &table.snapshot()), Observation::Render);
        assert_eq!(core.phase(), Phase::Rendering);

        let now = Instant::now();
        assert!(table.set_running(0, now));
        assert!(table.set_done(0, now));
        assert_eq!(core.observe(true, &table.snapshot()), Observation::Complete);
        assert_eq!(core.phase(), Phase::Draining);

        core.workers_joined();
        assert_eq!(core.phase(), Phase::Done);
        assert_eq!(core.frames(), 2);
    }

    #[test]
    fn empty_run_completes_on_first_observation() {
        let mut core = CoordinatorCore::new();
        core.workers_spawned();
        let snap = StatusTable::new(&[]).snapshot();
        assert_eq!(core.observe(true, &snap), Observation::Complete);
        core.workers_joined();
        assert_eq!(core.frames(), 1, "only the final frame");
    }
}
