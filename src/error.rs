//! Error types for audit-tools
//!
//! This module defines custom error types using `thiserror`. Provider errors
//! are classified so that swallowed check failures still log a useful cause.

use thiserror::Error;

/// Main error type for audit-tools
#[derive(Error, Debug)]
pub enum AuditError {
    /// GitHub provider errors
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Failed to write the report to the terminal
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

/// Errors raised while querying GitHub through the `gh` CLI
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The client program could not be found on PATH
    #[error("'{program}' is not installed or not in PATH")]
    NotInstalled {
        /// Program that was looked up
        program: String,
    },

    /// The client has no valid session
    #[error("GitHub CLI is not authenticated (run: gh auth login)")]
    NotAuthenticated,

    /// The endpoint does not exist or is not visible to the session
    #[error("Endpoint not found: {endpoint}")]
    NotFound {
        /// API path that returned 404
        endpoint: String,
    },

    /// The client exited with a non-zero status
    #[error("Command failed: {command}: {stderr}")]
    CommandFailed {
        /// Command line that was executed
        command: String,
        /// Trimmed standard error of the command
        stderr: String,
    },

    /// The response body was not a JSON array stream
    #[error("Invalid response from {endpoint}: {source}")]
    InvalidResponse {
        /// API path that was queried
        endpoint: String,
        /// The underlying parse error
        source: serde_json::Error,
    },

    /// Spawning the client failed for another reason
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProviderError {
    /// Classify a failed `gh api` call from its stderr
    pub fn from_stderr(command: &str, endpoint: &str, stderr: &str) -> Self {
        let lowered = stderr.to_lowercase();

        if lowered.contains("gh auth login")
            || lowered.contains("authentication")
            || lowered.contains("http 401")
        {
            ProviderError::NotAuthenticated
        } else if lowered.contains("http 404") || lowered.contains("not found") {
            ProviderError::NotFound {
                endpoint: endpoint.to_string(),
            }
        } else {
            ProviderError::CommandFailed {
                command: command.to_string(),
                stderr: stderr.to_string(),
            }
        }
    }
}
