use std::path::PathBuf;
use thiserror::Error;

/// Failure kinds of a single reminder operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReminderError {
    /// Malformed or missing field, detected before any process is spawned
    #[error("{0}")]
    InvalidInput(String),

    #[error("Reminder script not found at: {}", .0.display())]
    ExecutableNotFound(PathBuf),

    /// The script ran and exited with a non-zero status
    #[error("{}", external_failure_message(.code, .stderr))]
    ExternalFailure { code: i32, stderr: String },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ReminderError {
    pub(crate) fn invalid(message: &str) -> Self {
        ReminderError::InvalidInput(message.to_string())
    }

    /// Exit status of the external process, if it ran and failed
    pub fn error_code(&self) -> Option<i32> {
        match self {
            ReminderError::ExternalFailure { code, .. } => Some(*code),
            _ => None,
        }
    }
}

fn external_failure_message(code: &i32, stderr: &str) -> String {
    if stderr.is_empty() {
        format!("reminder script exited with status {}", code)
    } else {
        stderr.to_string()
    }
}

pub type Result<T> = std::result::Result<T, ReminderError>;
