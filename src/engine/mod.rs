// src/engine/mod.rs

//! Coordination of a scheduling run.
//!
//! The decision logic (which phase the run is in, when it is complete) lives
//! in the synchronous [`core`]; the async shell in [`runtime`] spawns the
//! workers, drives the observation loop and drains the pool.

pub mod core;
pub mod runtime;

pub use core::{CoordinatorCore, Observation, Phase};
pub use runtime::{Coordinator, RunReport};
