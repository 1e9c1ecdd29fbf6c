//! Utility modules for audit-tools

pub mod command;

pub use command::{execute_command, CommandResult};
