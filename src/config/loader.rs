// src/config/loader.rs

use std::path::Path;

use tracing::debug;

use crate::errors::{Result, TaskpoolError};
use crate::fs::FileSystem;
use crate::types::Task;

const SEPARATOR: &str = ": ";

/// A line of the task file that does not have the `<name>: <seconds>` shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// 1-based line number in the source text.
    pub line: usize,
    pub reason: String,
}

/// Parse task file contents into an ordered task list.
///
/// Each line, blank ones included, is split at the first `": "`; everything after it,
/// trimmed, must be a non-negative integer number of seconds. Indices are
/// assigned in order of appearance.
pub fn parse_tasks(contents: &str) -> std::result::Result<Vec<Task>, LineError> {
    let mut tasks = Vec::new();

    for (lineno, line) in contents.lines().enumerate() {
        let Some((name, raw_duration)) = line.split_once(SEPARATOR) else {
            return Err(LineError {
                line: lineno + 1,
                reason: format!("expected `<name>: <seconds>`, found {line:?}"),
            });
        };

        let duration_secs = raw_duration.trim().parse::<u64>().map_err(|e| LineError {
            line: lineno + 1,
            reason: format!(
                "duration {:?} for task {name:?} is not a non-negative integer ({e})",
                raw_duration.trim()
            ),
        })?;

        tasks.push(Task::new(tasks.len(), name, duration_secs));
    }

    Ok(tasks)
}

/// Read and parse the task file at `path`.
///
/// Fails on a missing or unreadable file and on the first malformed line;
/// nothing is returned for a partially valid file.
pub fn load_tasks(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<Vec<Task>> {
    let path = path.as_ref();

    if !fs.is_file(path) {
        return Err(TaskpoolError::SourceUnreadable {
            path: path.to_path_buf(),
            source: anyhow::anyhow!("not a readable file"),
        });
    }

    let contents = fs
        .read_to_string(path)
        .map_err(|source| TaskpoolError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

    let tasks = parse_tasks(&contents).map_err(|e| TaskpoolError::LoadError {
        path: path.to_path_buf(),
        line: e.line,
        reason: e.reason,
    })?;

    debug!(path = %path.display(), count = tasks.len(), "loaded task list");
    Ok(tasks)
}
