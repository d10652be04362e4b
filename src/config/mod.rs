// src/config/mod.rs

//! Run configuration.
//!
//! - [`loader`] reads and parses the task file (`<name>: <seconds>` per line).
//! - [`model`] holds the validated [`PoolOptions`].
//! - [`validate`] turns raw CLI values into `PoolOptions`.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_tasks, parse_tasks, LineError};
pub use model::{PoolOptions, DEFAULT_RENDER_INTERVAL};
