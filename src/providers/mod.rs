//! # Providers Module
//!
//! This module handles integrations with external services, here GitHub.
//!
//! ## GitHub Integration
//!
//! The [`github`] module queries alert listings through `gh api`:
//!
//! - Secret-scanning alerts (`repos/{repo}/secret-scanning/alerts`)
//! - Dependabot alerts (`repos/{repo}/dependabot/alerts`)
//!
//! ## Prerequisites
//!
//! GitHub operations require:
//!
//! 1. GitHub CLI (`gh`) installed and in PATH
//! 2. Authentication via `gh auth login`
//! 3. Security alert read access on the target repository
//!
//! ## Examples
//!
//! ```rust,no_run
//! use audit_tools::audit::AlertKind;
//! use audit_tools::config::AuditConfig;
//! use audit_tools::providers::github::GitHubProvider;
//!
//! # async fn demo() {
//! let provider = GitHubProvider::new(&AuditConfig::default());
//! match provider.count_alerts(AlertKind::Dependabot).await {
//!     Ok(count) => println!("{count} Dependabot alerts"),
//!     Err(e) => eprintln!("query failed: {e}"),
//! }
//! # }
//! ```

pub mod github;
