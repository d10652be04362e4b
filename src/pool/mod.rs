// src/pool/mod.rs

//! Shared state of a scheduling run and the workers that mutate it.
//!
//! - [`queue`] holds the tasks not yet dispatched; draining it is the only
//!   dispatch synchronisation point.
//! - [`status`] is the per-task lifecycle table written by workers and read
//!   by the coordinator.
//! - [`worker`] is the pull-and-run loop executed by each pool member.

pub mod queue;
pub mod status;
pub mod worker;

pub use queue::TaskQueue;
pub use status::{RunEpoch, Snapshot, StatusTable, TaskStatus};
pub use worker::{run_worker, SimulatedWork, TaskWork, WorkerId, WorkerSummary};
