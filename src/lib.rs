//! audit-tools Library
//!
//! Queries a GitHub repository's secret-scanning and Dependabot alert
//! listings through the `gh` CLI and reports their counts on the terminal.

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod providers;
pub mod utils;

pub use cli::exit_codes;
pub use error::AuditError;
