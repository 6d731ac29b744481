//! Common test utilities for integration tests
#![allow(dead_code)]

use reminders_mcp::{Config, RemindersServerHandler};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

static SCRIPT_LOCK: Mutex<()> = Mutex::new(());

/// Serialize tests that write and then execute scripts.
///
/// Executing a file while another thread's freshly forked child still holds
/// a write handle to it fails with ETXTBSY.
pub fn script_lock() -> MutexGuard<'static, ()> {
    SCRIPT_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Write an executable shell script into `dir`
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Script that records its arguments, one per line, in `args.log` next to
/// itself and prints `stdout`
pub fn recording_script(dir: &Path, stdout: &str) -> PathBuf {
    write_script(
        dir,
        "add_reminder.sh",
        &format!(
            "printf '%s\\n' \"$@\" > \"$(dirname \"$0\")/args.log\"\necho '{}'",
            stdout
        ),
    )
}

/// Arguments captured by [`recording_script`], or `None` if it never ran
pub fn recorded_args(dir: &Path) -> Option<Vec<String>> {
    let content = fs::read_to_string(dir.join("args.log")).ok()?;
    Some(content.lines().map(str::to_string).collect())
}

/// Create a handler backed by the given script and the default list name
pub fn handler_for(script_path: &Path) -> RemindersServerHandler {
    RemindersServerHandler::new(
        Config::default().with_overrides(Some(script_path.to_path_buf()), None),
    )
}

/// Temporary directory holding a recording script, plus a handler using it
pub fn recording_handler(stdout: &str) -> (RemindersServerHandler, TempDir) {
    let dir = TempDir::new().unwrap();
    let script = recording_script(dir.path(), stdout);
    (handler_for(&script), dir)
}
