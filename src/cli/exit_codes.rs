//! Exit codes for the CLI
//!
//! # Exit Code Reference
//!
//! | Code | Constant | Meaning | Example |
//! |------|----------|---------|---------|
//! | 0 | `SUCCESS` | Run completed | Banner printed, whatever the checks returned |
//! | 1 | `ERROR` | Runtime error | stdout closed while writing the report |
//! | 2 | (clap) | Invalid arguments | Any argument other than `--help`/`--version` |
//!
//! Failed alert checks never change the exit code.

/// The audit ran to completion and printed its banner.
pub const SUCCESS: i32 = 0;

/// An error outside the shielded alert checks aborted the run.
pub const ERROR: i32 = 1;
