//! # Alert Structures
//!
//! - [`AlertKind`] - The alert listings an audit queries
//! - [`CheckOutcome`] - The count a single check produced, if any
//! - [`AuditReport`] - Ordered outcomes of one run
//!
//! ```rust
//! use audit_tools::audit::{AlertKind, AuditReport, CheckOutcome};
//!
//! let mut report = AuditReport::new("octo/repo");
//! report.push(CheckOutcome::counted(AlertKind::SecretScanning, 3));
//! report.push(CheckOutcome::failed(AlertKind::Dependabot));
//!
//! assert_eq!(report.count(AlertKind::SecretScanning), Some(3));
//! assert_eq!(report.count(AlertKind::Dependabot), None);
//! ```

use std::fmt;

/// Kind of alert listing queried on the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
    /// Potential credentials committed to the repository
    SecretScanning,
    /// Known vulnerabilities in declared dependencies
    Dependabot,
}

impl AlertKind {
    /// Every kind, in the order an audit runs them
    pub const ALL: [AlertKind; 2] = [AlertKind::SecretScanning, AlertKind::Dependabot];

    /// Path under `repos/{owner}/{name}/` listing these alerts
    pub fn endpoint_suffix(self) -> &'static str {
        match self {
            AlertKind::SecretScanning => "secret-scanning/alerts",
            AlertKind::Dependabot => "dependabot/alerts",
        }
    }

    /// Human-readable label used in terminal output
    pub fn label(self) -> &'static str {
        match self {
            AlertKind::SecretScanning => "Secret scanning alerts",
            AlertKind::Dependabot => "Dependabot alerts",
        }
    }

    /// Whether the status line is rendered in the warning style
    pub fn is_warning(self) -> bool {
        matches!(self, AlertKind::SecretScanning)
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertKind::SecretScanning => write!(f, "secret-scanning"),
            AlertKind::Dependabot => write!(f, "dependabot"),
        }
    }
}

/// Result of one check. `count` is `None` when the query failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Alert listing that was queried
    pub kind: AlertKind,
    /// Number of alerts, `None` if the query failed
    pub count: Option<u64>,
}

impl CheckOutcome {
    /// Outcome of a check that returned `count` alerts
    pub fn counted(kind: AlertKind, count: u64) -> Self {
        Self {
            kind,
            count: Some(count),
        }
    }

    /// Outcome of a check whose query failed
    pub fn failed(kind: AlertKind) -> Self {
        Self { kind, count: None }
    }
}

/// Outcomes of an audit run, in execution order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    /// Repository the checks ran against (`owner/name`)
    pub repository: String,
    outcomes: Vec<CheckOutcome>,
}

impl AuditReport {
    /// Create an empty report for `repository`
    pub fn new(repository: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            outcomes: Vec::new(),
        }
    }

    /// Record the next outcome
    pub fn push(&mut self, outcome: CheckOutcome) {
        self.outcomes.push(outcome);
    }

    /// All outcomes, in execution order
    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    /// Count reported for `kind`, if that check succeeded
    pub fn count(&self, kind: AlertKind) -> Option<u64> {
        self.outcomes
            .iter()
            .find(|o| o.kind == kind)
            .and_then(|o| o.count)
    }

    /// Number of checks that produced a count
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.count.is_some()).count()
    }
}
