// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod pool;
pub mod render;
pub mod types;

use tracing::info;

use crate::cli::CliArgs;
use crate::config::{load_tasks, PoolOptions};
use crate::engine::{Coordinator, RunReport};
use crate::errors::Result;
use crate::fs::RealFileSystem;
use crate::render::TerminalRenderer;

/// High-level entry point used by `main.rs`.
///
/// Validates the concurrency level, loads the task file, then runs the pool
/// to completion with the terminal renderer. Either validation step failing
/// aborts before any worker exists.
pub async fn run(args: CliArgs) -> Result<RunReport> {
    let options = PoolOptions::from_concurrency(args.processes)?;
    let tasks = load_tasks(&RealFileSystem, &args.file)?;

    info!(
        file = %args.file.display(),
        tasks = tasks.len(),
        concurrency = options.concurrency.get(),
        "task list loaded"
    );

    Coordinator::new(tasks, options, TerminalRenderer::new())
        .run()
        .await
}
