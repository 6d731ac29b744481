//! Reminder request and operation result types
//!
//! A [`ReminderRequest`] lives for a single call: it is normalized from the
//! tool arguments, validated, encoded into the reminder script's positional
//! arguments and then discarded.

use crate::error::{ReminderError, Result};
use crate::validation;
use serde::Serialize;

/// Name of the list the reminder script uses when none is given
pub const DEFAULT_LIST_NAME: &str = "Reminders";

/// A single reminder to hand to the reminder script
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ReminderRequest {
    pub title: String,
    pub description: Option<String>,
    /// Due date in YYYY-MM-DD format
    pub due_date: Option<String>,
    /// Due time in 24-hour HH:MM format
    pub due_time: Option<String>,
    pub list_name: Option<String>,
}

impl ReminderRequest {
    /// Create a request with only a title
    ///
    /// # Example
    /// ```
    /// # use reminders_mcp::ReminderRequest;
    /// let request = ReminderRequest::new("Doctor appointment")
    ///     .with_due_date("2025-06-20")
    ///     .with_due_time("09:30")
    ///     .with_list("Personal");
    /// assert_eq!(
    ///     request.encode_args().unwrap(),
    ///     vec!["Doctor appointment", "", "2025-06-20", "09:30", "Personal"]
    /// );
    /// ```
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub fn with_due_time(mut self, due_time: impl Into<String>) -> Self {
        self.due_time = Some(due_time.into());
        self
    }

    pub fn with_list(mut self, list_name: impl Into<String>) -> Self {
        self.list_name = Some(list_name.into());
        self
    }

    /// Build a request from MCP tool arguments
    ///
    /// The tool boundary uses the empty string to mean "not given". Those
    /// values become `None` here, and so does a `list_name` equal to
    /// `default_list`: naming the default list explicitly is treated the
    /// same as not naming a list at all.
    pub fn from_tool_args(
        title: String,
        description: Option<String>,
        due_date: Option<String>,
        due_time: Option<String>,
        list_name: Option<String>,
        default_list: &str,
    ) -> Self {
        Self {
            title,
            description: non_empty(description),
            due_date: non_empty(due_date),
            due_time: non_empty(due_time),
            list_name: non_empty(list_name).filter(|name| name != default_list),
        }
    }

    /// Check every field, stopping at the first violation
    ///
    /// Order: title, then due date, then due time.
    pub fn validate(&self) -> Result<()> {
        validation::validate_title(&self.title)?;
        if let Some(ref date) = self.due_date {
            validation::parse_due_date(date)?;
        }
        if let Some(ref time) = self.due_time {
            validation::parse_due_time(time)?;
        }
        Ok(())
    }

    /// Validate the request and encode it as the script's positional arguments
    ///
    /// The script takes `<title> [description] [due_date] [due_time] [list_name]`
    /// with no named arguments, so a skipped slot followed by a filled one is
    /// sent as an empty-string placeholder. Trailing skipped slots are dropped.
    pub fn encode_args(&self) -> Result<Vec<String>> {
        self.validate()?;

        let optional = [
            &self.description,
            &self.due_date,
            &self.due_time,
            &self.list_name,
        ];
        let last_present = optional.iter().rposition(|slot| slot.is_some());

        let mut args = vec![self.title.clone()];
        if let Some(last) = last_present {
            args.extend(
                optional[..=last]
                    .iter()
                    .map(|slot| slot.as_deref().unwrap_or_default().to_string()),
            );
        }
        Ok(args)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Uniform response of the `add_reminder` tool
///
/// On success the normalized request is echoed back; on failure only
/// `error_code` may accompany the message, and only when the script exited
/// with a non-zero status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationResult {
    pub success: bool,
    pub message: String,
    #[serde(flatten)]
    pub reminder: Option<ReminderRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i32>,
}

impl OperationResult {
    pub fn succeeded(message: String, reminder: ReminderRequest) -> Self {
        Self {
            success: true,
            message,
            reminder: Some(reminder),
            error_code: None,
        }
    }

    pub fn failed(error: &ReminderError) -> Self {
        Self {
            success: false,
            message: error.to_string(),
            reminder: None,
            error_code: error.error_code(),
        }
    }

    /// JSON text sent back to the MCP client
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            format!(
                "{{\"success\": false, \"message\": \"failed to serialize result: {}\"}}",
                e
            )
        })
    }
}
