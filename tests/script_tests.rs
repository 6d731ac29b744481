//! ReminderScript tests: errors are returned to the caller instead of folded
//! into an OperationResult
#![cfg(unix)]
mod common;

use reminders_mcp::*;
use tempfile::TempDir;

#[tokio::test]
async fn test_add_returns_trimmed_stdout() {
    let _lock = common::script_lock();
    let dir = TempDir::new().unwrap();
    let path = common::write_script(dir.path(), "add.sh", "printf '\\n  Reminder added  \\n\\n'");
    let script = ReminderScript::new(&path);

    let message = script.add(&ReminderRequest::new("Buy milk")).await.unwrap();
    assert_eq!(message, "Reminder added");
}

#[tokio::test]
async fn test_add_invalid_request_is_invalid_input() {
    let dir = TempDir::new().unwrap();
    let script = ReminderScript::new(dir.path().join("missing.sh"));

    let err = script
        .add(&ReminderRequest::new("X").with_due_date("2025-13-01"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ReminderError::InvalidInput("bad due_date format".to_string())
    );
}

#[tokio::test]
async fn test_add_missing_script() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.sh");
    let script = ReminderScript::new(&path);

    let err = script.add(&ReminderRequest::new("Buy milk")).await.unwrap_err();
    assert_eq!(err, ReminderError::ExecutableNotFound(path));
    assert_eq!(err.error_code(), None);
}

#[tokio::test]
async fn test_add_non_zero_exit() {
    let _lock = common::script_lock();
    let dir = TempDir::new().unwrap();
    let path = common::write_script(dir.path(), "add.sh", "echo ' list not found ' >&2\nexit 2");
    let script = ReminderScript::new(&path);

    let err = script.add(&ReminderRequest::new("Buy milk")).await.unwrap_err();
    assert_eq!(
        err,
        ReminderError::ExternalFailure {
            code: 2,
            stderr: "list not found".to_string()
        }
    );
    assert_eq!(err.error_code(), Some(2));
    assert_eq!(err.to_string(), "list not found");
}

#[tokio::test]
async fn test_add_killed_by_signal() {
    let _lock = common::script_lock();
    let dir = TempDir::new().unwrap();
    let path = common::write_script(dir.path(), "add.sh", "kill -9 $$");
    let script = ReminderScript::new(&path);

    let err = script.add(&ReminderRequest::new("Buy milk")).await.unwrap_err();
    assert!(matches!(err, ReminderError::Unexpected(_)));
    assert_eq!(err.error_code(), None);
}

#[tokio::test]
async fn test_run_spawns_once_per_call() {
    let _lock = common::script_lock();
    let dir = TempDir::new().unwrap();
    let path = common::write_script(
        dir.path(),
        "add.sh",
        "echo run >> \"$(dirname \"$0\")/runs.log\"\necho done",
    );
    let script = ReminderScript::new(&path);

    script.add(&ReminderRequest::new("One")).await.unwrap();
    script.add(&ReminderRequest::new("Two")).await.unwrap();

    let runs = std::fs::read_to_string(dir.path().join("runs.log")).unwrap();
    assert_eq!(runs.lines().count(), 2);
}
