// tests/error_handling.rs

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use taskpool::cli::CliArgs;
use taskpool::config::load_tasks;
use taskpool::errors::TaskpoolError;
use taskpool::fs::RealFileSystem;
use taskpool::types::Task;
use taskpool_test_utils::builders::TaskListBuilder;

fn task_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

fn args(processes: i64, file: impl Into<PathBuf>) -> CliArgs {
    CliArgs {
        processes,
        file: file.into(),
    }
}

#[test]
fn loads_task_file_from_disk() {
    let source = TaskListBuilder::new()
        .with_task("A", 2)
        .with_task("B", 1)
        .with_task("C", 3);
    let file = task_file(&source.to_source());

    let tasks = load_tasks(&RealFileSystem, file.path()).unwrap();
    assert_eq!(tasks, source.build());
}

#[test]
fn load_without_trailing_newline() {
    let file = task_file("only: 7");
    let tasks = load_tasks(&RealFileSystem, file.path()).unwrap();
    assert_eq!(tasks, vec![Task::new(0, "only", 7)]);
}

#[tokio::test]
async fn malformed_line_fails_before_any_work() {
    let file = task_file("A: 2\nBadLine\nC: 3\n");

    match taskpool::run(args(2, file.path())).await {
        Err(TaskpoolError::LoadError { path, line, reason }) => {
            assert_eq!(path, file.path());
            assert_eq!(line, 2);
            assert!(reason.contains("BadLine"));
        }
        other => panic!("expected LoadError, got {other:?}"),
    }
}

#[tokio::test]
async fn non_integer_duration_is_a_load_error() {
    let file = task_file("A: soon\n");

    let err = taskpool::run(args(1, file.path())).await.unwrap_err();
    assert!(matches!(err, TaskpoolError::LoadError { line: 1, .. }));
    assert!(err.to_string().contains("soon"));
}

#[tokio::test]
async fn missing_file_is_reported_with_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    let err = taskpool::run(args(1, &missing)).await.unwrap_err();
    match &err {
        TaskpoolError::SourceUnreadable { path, .. } => assert_eq!(path, &missing),
        other => panic!("expected SourceUnreadable, got {other:?}"),
    }
    assert!(err.to_string().contains("nope.txt"));
}

#[tokio::test]
async fn non_positive_concurrency_is_rejected_before_loading() {
    // The file does not exist either; the concurrency check must win.
    for processes in [0, -5] {
        match taskpool::run(args(processes, "/definitely/not/here.txt")).await {
            Err(TaskpoolError::ConfigError(msg)) => {
                assert!(msg.contains(&processes.to_string()));
            }
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }
}
