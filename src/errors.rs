// src/errors.rs

//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskpoolError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Cannot read task file {path:?}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Malformed task file {path:?}, line {line}: {reason}")]
    LoadError {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Worker aborted: {0}")]
    WorkerPanicked(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, TaskpoolError>;
