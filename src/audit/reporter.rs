//! Alert reporter - runs the checks in order and prints their status lines

use async_trait::async_trait;
use std::io::Write;
use tracing::{debug, info, info_span, Instrument};

use super::alerts::{AlertKind, AuditReport, CheckOutcome};
use crate::cli::output::TerminalOutput;
use crate::error::{AuditError, ProviderError};

/// Source of alert counts for one repository
#[async_trait]
pub trait AlertSource: Send + Sync {
    /// Repository the counts are read from (`owner/name`)
    fn repository(&self) -> &str;

    /// Number of alerts of the given kind
    async fn count_alerts(&self, kind: AlertKind) -> Result<u64, ProviderError>;
}

/// Run one check. Failures are logged and reported as a missing count.
async fn run_check(source: &dyn AlertSource, kind: AlertKind) -> CheckOutcome {
    let span = info_span!("check", %kind, repository = source.repository());

    async {
        match source.count_alerts(kind).await {
            Ok(count) => {
                info!(count, "check completed");
                CheckOutcome::counted(kind, count)
            }
            Err(e) => {
                debug!(error = %e, "check failed, skipping its line");
                CheckOutcome::failed(kind)
            }
        }
    }
    .instrument(span)
    .await
}

/// Run every alert check and write the report to `out`.
///
/// Each successful check prints its line as soon as it finishes; failed
/// checks print nothing. The completion banner is always written last.
/// Only write failures are returned as errors.
pub async fn run_audit<W: Write>(
    source: &dyn AlertSource,
    out: &mut W,
) -> Result<AuditReport, AuditError> {
    let renderer = TerminalOutput::new();
    let mut report = AuditReport::new(source.repository());

    for kind in AlertKind::ALL {
        let outcome = run_check(source, kind).await;

        if let Some(line) = renderer.format_outcome(&outcome) {
            writeln!(out, "{}", line).map_err(AuditError::Output)?;
        }
        report.push(outcome);
    }

    writeln!(out, "{}", renderer.format_banner()).map_err(AuditError::Output)?;
    out.flush().map_err(AuditError::Output)?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use std::sync::Mutex;

    /// Alert source returning canned results and recording call order
    struct FakeSource {
        secret_scanning: Option<u64>,
        dependabot: Option<u64>,
        calls: Mutex<Vec<AlertKind>>,
    }

    impl FakeSource {
        fn new(secret_scanning: Option<u64>, dependabot: Option<u64>) -> Self {
            Self {
                secret_scanning,
                dependabot,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AlertSource for FakeSource {
        fn repository(&self) -> &str {
            "test-owner/test-repo"
        }

        async fn count_alerts(&self, kind: AlertKind) -> Result<u64, ProviderError> {
            self.calls.lock().unwrap().push(kind);
            let canned = match kind {
                AlertKind::SecretScanning => self.secret_scanning,
                AlertKind::Dependabot => self.dependabot,
            };
            canned.ok_or(ProviderError::NotAuthenticated)
        }
    }

    /// Writer whose every write fails
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn plain_lines(buf: Vec<u8>) -> Vec<String> {
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[tokio::test]
    #[serial]
    async fn test_both_checks_succeed_prints_three_lines() {
        colored::control::set_override(false);
        let source = FakeSource::new(Some(4), Some(7));
        let mut out = Vec::new();

        let report = run_audit(&source, &mut out).await.unwrap();
        colored::control::unset_override();

        assert_eq!(
            plain_lines(out),
            vec![
                "⚠ Secret scanning alerts: 4".to_string(),
                "Dependabot alerts: 7".to_string(),
                "✓ Security audit complete".to_string(),
            ]
        );
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.repository, "test-owner/test-repo");
    }

    #[tokio::test]
    #[serial]
    async fn test_failed_check_omits_only_its_line() {
        colored::control::set_override(false);
        let source = FakeSource::new(None, Some(0));
        let mut out = Vec::new();

        let report = run_audit(&source, &mut out).await.unwrap();
        colored::control::unset_override();

        assert_eq!(
            plain_lines(out),
            vec![
                "Dependabot alerts: 0".to_string(),
                "✓ Security audit complete".to_string(),
            ]
        );
        assert_eq!(report.count(AlertKind::SecretScanning), None);
        assert_eq!(report.count(AlertKind::Dependabot), Some(0));
    }

    #[tokio::test]
    #[serial]
    async fn test_all_checks_failing_still_prints_banner() {
        colored::control::set_override(false);
        let source = FakeSource::new(None, None);
        let mut out = Vec::new();

        let report = run_audit(&source, &mut out).await.unwrap();
        colored::control::unset_override();

        assert_eq!(plain_lines(out), vec!["✓ Security audit complete".to_string()]);
        assert_eq!(report.succeeded(), 0);
    }

    #[tokio::test]
    async fn test_checks_run_in_order_even_after_failure() {
        let source = FakeSource::new(None, None);
        let mut out = Vec::new();

        run_audit(&source, &mut out).await.unwrap();

        assert_eq!(
            *source.calls.lock().unwrap(),
            vec![AlertKind::SecretScanning, AlertKind::Dependabot]
        );
    }

    #[tokio::test]
    async fn test_write_failure_aborts() {
        let source = FakeSource::new(Some(1), Some(1));

        let err = run_audit(&source, &mut BrokenPipe).await.unwrap_err();
        assert!(matches!(err, AuditError::Output(_)));
        // The first check ran; the write after it failed before the second
        assert_eq!(
            *source.calls.lock().unwrap(),
            vec![AlertKind::SecretScanning]
        );
    }
}
