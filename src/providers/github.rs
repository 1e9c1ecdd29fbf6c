//! GitHub provider - Alert listings via the gh CLI

use async_trait::async_trait;
use serde::de::IgnoredAny;
use std::path::PathBuf;
use tracing::debug;

use crate::audit::{AlertKind, AlertSource};
use crate::config::AuditConfig;
use crate::error::ProviderError;
use crate::utils::execute_command;

/// GitHub provider for alert queries
pub struct GitHubProvider {
    repository: String,
    program: String,
}

impl GitHubProvider {
    /// Create a provider for the configured repository
    pub fn new(config: &AuditConfig) -> Self {
        Self {
            repository: config.repository.clone(),
            program: config.gh_program.clone(),
        }
    }

    /// Get the full repository name (owner/name)
    pub fn full_name(&self) -> &str {
        &self.repository
    }

    /// REST path listing alerts of the given kind
    pub fn endpoint(&self, kind: AlertKind) -> String {
        format!("repos/{}/{}", self.repository, kind.endpoint_suffix())
    }

    /// Locate the gh binary on PATH
    fn resolve_program(&self) -> Result<PathBuf, ProviderError> {
        which::which(&self.program).map_err(|_| ProviderError::NotInstalled {
            program: self.program.clone(),
        })
    }

    /// Map a failure to start the client onto a provider error
    fn spawn_error(&self, err: std::io::Error) -> ProviderError {
        match err.kind() {
            std::io::ErrorKind::NotFound => ProviderError::NotInstalled {
                program: self.program.clone(),
            },
            _ => ProviderError::Io(err),
        }
    }

    /// Run `gh api --paginate <endpoint>` and return its stdout
    pub async fn api(&self, endpoint: &str) -> Result<String, ProviderError> {
        let program = self.resolve_program()?;
        let args = ["api", "--paginate", endpoint];
        let command = format!("{} {}", self.program, args.join(" "));

        let result = execute_command(&program, &args)
            .await
            .map_err(|e| self.spawn_error(e))?;

        if !result.success() {
            debug!(%command, exit_code = result.exit_code, "gh api failed");
            return Err(ProviderError::from_stderr(
                &command,
                endpoint,
                &result.stderr,
            ));
        }

        Ok(result.stdout)
    }

    /// Count the alerts of the given kind on the repository
    pub async fn count_alerts(&self, kind: AlertKind) -> Result<u64, ProviderError> {
        let endpoint = self.endpoint(kind);
        let body = self.api(&endpoint).await?;
        count_json_arrays(&body)
            .map_err(|source| ProviderError::InvalidResponse { endpoint, source })
    }
}

#[async_trait]
impl AlertSource for GitHubProvider {
    fn repository(&self) -> &str {
        self.full_name()
    }

    async fn count_alerts(&self, kind: AlertKind) -> Result<u64, ProviderError> {
        GitHubProvider::count_alerts(self, kind).await
    }
}

/// Sum the lengths of every JSON array in `body`.
///
/// `gh api --paginate` writes one array per page back to back, so the body
/// is a stream of arrays rather than a single document.
pub fn count_json_arrays(body: &str) -> Result<u64, serde_json::Error> {
    let stream = serde_json::Deserializer::from_str(body).into_iter::<Vec<IgnoredAny>>();

    let mut total = 0u64;
    for page in stream {
        total += page?.len() as u64;
    }
    Ok(total)
}
