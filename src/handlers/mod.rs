//! MCP tool handlers for the reminders server
//!
//! Each handler is in a separate file and works on plain Rust types;
//! `lib.rs` only forwards the tool arguments.

pub mod add_reminder;
