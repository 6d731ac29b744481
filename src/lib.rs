//! Reminders MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server that lets an
//! agent add reminders. Reminder creation itself is delegated to an external
//! script; this crate validates the request, encodes it into the script's
//! positional arguments, runs the script and normalizes the outcome.
//!
//! # Architecture
//!
//! - **MCP Layer**: `RemindersServerHandler` - exposes the `add_reminder` tool
//! - **Domain Layer**: `reminder` and `validation` modules - request checks and argument encoding
//! - **Process Layer**: `script` module - runs the external reminder script
//!
//! # Example
//!
//! ```no_run
//! use reminders_mcp::{Config, RemindersServerHandler};
//!
//! let handler = RemindersServerHandler::new(Config::default());
//! // Serve the handler with mcp_attr::server::serve_stdio...
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod reminder;
pub mod script;
pub mod validation;

use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};

// Re-export commonly used types
pub use config::Config;
pub use error::ReminderError;
pub use reminder::{DEFAULT_LIST_NAME, OperationResult, ReminderRequest};
pub use script::ReminderScript;

/// MCP Server handler for adding reminders
///
/// Holds only immutable configuration, so concurrent tool calls each run
/// their own script process without any locking.
pub struct RemindersServerHandler {
    pub(crate) script: ReminderScript,
    pub(crate) default_list: String,
}

impl RemindersServerHandler {
    /// Create a new handler from the server configuration
    pub fn new(config: Config) -> Self {
        Self {
            script: ReminderScript::new(&config.script_path),
            default_list: config.default_list,
        }
    }
}

/// Reminders server for capturing tasks into the user's reminders app.
///
/// Use `add_reminder` whenever the user asks to be reminded of something.
/// Only the title is required. Dates use YYYY-MM-DD and times use 24-hour
/// HH:MM. Leave optional fields empty when the user did not mention them.
///
/// Every call returns a JSON object with `success` and `message`. On failure
/// the message explains what went wrong, and `error_code` carries the exit
/// status when the reminder script itself failed.
#[mcp_server]
impl McpServer for RemindersServerHandler {
    /// **Add reminder**: Create a reminder, optionally with notes, a due date, a due time and a target list.
    /// **Example**: title="Pay rent", due_date="2025-06-16" → reminder due on that day in the default list.
    #[tool]
    async fn add_reminder(
        &self,
        /// Title: what to be reminded of (required)
        title: String,
        /// Description: notes for the reminder (optional)
        description: Option<String>,
        /// Due date: YYYY-MM-DD (optional)
        due_date: Option<String>,
        /// Due time: HH:MM, 24-hour (optional)
        due_time: Option<String>,
        /// List name: Reminders list to add to, default list if empty (optional)
        list_name: Option<String>,
    ) -> McpResult<String> {
        let result = self
            .handle_add_reminder(title, description, due_date, due_time, list_name)
            .await;
        Ok(result.to_json())
    }
}
