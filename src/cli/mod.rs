//! # CLI Module
//!
//! This module defines the command-line interface for audit-tools using `clap`.
//!
//! The program takes no arguments. Each run queries the compiled-in
//! repository for secret-scanning and Dependabot alerts and prints:
//!
//! ```text
//! ⚠ Secret scanning alerts: 3
//! Dependabot alerts: 12
//! ✓ Security audit complete
//! ```
//!
//! A line is left out when its check fails (missing `gh`, no session,
//! network error). The banner is always printed.
//!
//! ## Submodules
//!
//! - [`commands`] - Command implementations
//! - [`exit_codes`] - Standardized exit codes
//! - [`output`] - Terminal output formatting

pub mod commands;
pub mod exit_codes;
pub mod output;

use clap::Parser;

/// audit-tools - Report GitHub secret-scanning and Dependabot alert counts
#[derive(Parser, Debug)]
#[command(name = "audit-tools")]
#[command(author, version, about, long_about = None)]
pub struct Cli {}
