//! Audit command - Query alert counts and print the report

use std::io;
use tracing::info;

use crate::audit::run_audit;
use crate::cli::exit_codes;
use crate::config::AuditConfig;
use crate::error::AuditError;
use crate::providers::github::GitHubProvider;

pub async fn execute(config: AuditConfig) -> Result<i32, AuditError> {
    let provider = GitHubProvider::new(&config);
    info!("Starting alert audit for {}", provider.full_name());

    let mut out = io::stdout();
    let report = run_audit(&provider, &mut out).await?;

    info!(
        "Audit finished: {}/{} checks reported",
        report.succeeded(),
        report.outcomes().len()
    );

    Ok(exit_codes::SUCCESS)
}
