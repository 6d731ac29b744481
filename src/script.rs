//! Invocation of the external reminder script
//!
//! The script is called once per reminder as
//! `<script> <title> [description] [due_date] [due_time] [list_name]`.
//! It reports success on stdout and failure through a non-zero exit status
//! with diagnostics on stderr.

use crate::error::{ReminderError, Result};
use crate::reminder::ReminderRequest;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Captured outcome of one script run
#[derive(Debug, Clone)]
pub struct ScriptOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
}

/// Handle on the external reminder script
#[derive(Debug, Clone)]
pub struct ReminderScript {
    path: PathBuf,
}

impl ReminderScript {
    /// Create a handle on the script at `path`
    ///
    /// A relative path is resolved against the current directory here, so
    /// the existence check and the spawn see the same file instead of the
    /// spawn searching `PATH` for a bare name.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self {
            path: std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add a reminder, returning the script's trimmed stdout
    ///
    /// Validation errors are returned before the script is looked up, so an
    /// invalid request never spawns a process.
    pub async fn add(&self, request: &ReminderRequest) -> Result<String> {
        let args = request.encode_args()?;
        debug!(script = %self.path.display(), ?args, "invoking reminder script");

        let output = self.run(&args).await?;
        match output.exit_code {
            Some(0) => Ok(output.stdout),
            Some(code) => Err(ReminderError::ExternalFailure {
                code,
                stderr: output.stderr,
            }),
            None => Err(ReminderError::Unexpected(
                "reminder script was terminated by a signal".to_string(),
            )),
        }
    }

    /// Spawn the script once with the given arguments and wait for it
    pub async fn run(&self, args: &[String]) -> Result<ScriptOutput> {
        if !self.path.exists() {
            return Err(ReminderError::ExecutableNotFound(self.path.clone()));
        }

        let output = Command::new(&self.path)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ReminderError::ExecutableNotFound(self.path.clone()),
                _ => ReminderError::Unexpected(e.to_string()),
            })?;

        Ok(ScriptOutput {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            exit_code: output.status.code(),
        })
    }
}
