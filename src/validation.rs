//! Validation helper functions for reminder requests
//!
//! This module contains the field checks applied before the reminder script
//! is invoked: title presence, due date and due time formats.

use crate::error::{ReminderError, Result};
use chrono::{NaiveDate, NaiveTime};

/// Check that the title is present after trimming whitespace
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(ReminderError::invalid("title required"));
    }
    Ok(())
}

/// Parse and validate a due date
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// Result containing parsed NaiveDate or `InvalidInput`
pub fn parse_due_date(date_str: &str) -> Result<NaiveDate> {
    if !has_shape(date_str, "dddd-dd-dd") {
        return Err(ReminderError::invalid("bad due_date format"));
    }
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ReminderError::invalid("bad due_date format"))
}

/// Parse and validate a due time
///
/// # Arguments
/// * `time_str` - Time string in 24-hour HH:MM format
///
/// # Returns
/// Result containing parsed NaiveTime or `InvalidInput`
pub fn parse_due_time(time_str: &str) -> Result<NaiveTime> {
    if !has_shape(time_str, "dd:dd") {
        return Err(ReminderError::invalid("bad due_time format"));
    }
    NaiveTime::parse_from_str(time_str, "%H:%M")
        .map_err(|_| ReminderError::invalid("bad due_time format"))
}

/// Match `value` against a pattern where `d` stands for an ASCII digit and
/// any other byte must appear literally.
///
/// chrono accepts unpadded fields and signed years, so the fixed width is
/// checked separately.
fn has_shape(value: &str, pattern: &str) -> bool {
    value.len() == pattern.len()
        && value
            .bytes()
            .zip(pattern.bytes())
            .all(|(v, p)| match p {
                b'd' => v.is_ascii_digit(),
                _ => v == p,
            })
}
