//! Configuration module
//!
//! audit-tools has no configuration file. The target repository and the
//! client program are compiled in; [`AuditConfig`] carries them so the
//! provider can be pointed elsewhere from library code and tests.

/// Repository audited by every run (`owner/name`)
pub const TARGET_REPOSITORY: &str = "BlackRoad-OS/audit-tools";

/// GitHub CLI program used for API calls
pub const GH_PROGRAM: &str = "gh";

/// Run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    /// Repository to query, as `owner/name`
    pub repository: String,

    /// Program name or path of the GitHub CLI
    pub gh_program: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            repository: TARGET_REPOSITORY.to_string(),
            gh_program: GH_PROGRAM.to_string(),
        }
    }
}
