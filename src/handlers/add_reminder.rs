//! add_reminder handler for the reminders MCP server

use crate::RemindersServerHandler;
use crate::reminder::{OperationResult, ReminderRequest};
use tracing::{info, warn};

impl RemindersServerHandler {
    /// Normalize the tool arguments, run the reminder script once and fold
    /// every outcome into an [`OperationResult`].
    ///
    /// Never fails: validation errors, a missing script and script failures
    /// all come back as `success: false`.
    pub async fn handle_add_reminder(
        &self,
        title: String,
        description: Option<String>,
        due_date: Option<String>,
        due_time: Option<String>,
        list_name: Option<String>,
    ) -> OperationResult {
        let request = ReminderRequest::from_tool_args(
            title,
            description,
            due_date,
            due_time,
            list_name,
            &self.default_list,
        );
        info!(title = %request.title, list = ?request.list_name, "adding reminder");

        match self.script.add(&request).await {
            Ok(message) => OperationResult::succeeded(message, request),
            Err(e) => {
                warn!(title = %request.title, error = %e, "failed to add reminder");
                OperationResult::failed(&e)
            }
        }
    }
}
