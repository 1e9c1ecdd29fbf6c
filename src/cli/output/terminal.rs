//! Terminal output formatting with colors

use colored::Colorize;

use crate::audit::CheckOutcome;

/// Renders audit status lines for the terminal
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    /// Status line for a check, or `None` when the check produced no count.
    ///
    /// A failed check is reported as an absent count line: the whole line is
    /// dropped rather than printed with an empty count. Warning-styled kinds
    /// are rendered in yellow with a warning marker.
    pub fn format_outcome(&self, outcome: &CheckOutcome) -> Option<String> {
        let count = outcome.count?;
        let kind = outcome.kind;

        let line = if kind.is_warning() {
            format!("⚠ {}: {}", kind.label(), count)
                .yellow()
                .to_string()
        } else {
            format!("{}: {}", kind.label(), count)
        };

        Some(line)
    }

    /// Completion banner, printed after every run
    pub fn format_banner(&self) -> String {
        "✓ Security audit complete".green().bold().to_string()
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AlertKind;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_format_secret_scanning_outcome() {
        colored::control::set_override(false);
        let output = TerminalOutput::new();
        let line = output.format_outcome(&CheckOutcome::counted(AlertKind::SecretScanning, 12));
        colored::control::unset_override();

        assert_eq!(line.as_deref(), Some("⚠ Secret scanning alerts: 12"));
    }

    #[test]
    #[serial]
    fn test_format_dependabot_outcome_is_plain() {
        colored::control::set_override(true);
        let output = TerminalOutput::new();
        let line = output
            .format_outcome(&CheckOutcome::counted(AlertKind::Dependabot, 0))
            .unwrap();
        colored::control::unset_override();

        assert_eq!(line, "Dependabot alerts: 0");
        assert!(!line.contains('\u{1b}'));
    }

    #[test]
    #[serial]
    fn test_secret_scanning_outcome_is_colored_when_forced() {
        colored::control::set_override(true);
        let output = TerminalOutput::new();
        let line = output
            .format_outcome(&CheckOutcome::counted(AlertKind::SecretScanning, 1))
            .unwrap();
        colored::control::unset_override();

        assert!(line.contains('\u{1b}'));
        assert!(line.contains("Secret scanning alerts: 1"));
    }

    #[test]
    fn test_failed_outcome_has_no_line() {
        let output = TerminalOutput::new();
        assert!(output
            .format_outcome(&CheckOutcome::failed(AlertKind::SecretScanning))
            .is_none());
        assert!(output
            .format_outcome(&CheckOutcome::failed(AlertKind::Dependabot))
            .is_none());
    }

    #[test]
    #[serial]
    fn test_format_banner() {
        colored::control::set_override(false);
        let banner = TerminalOutput::default().format_banner();
        colored::control::unset_override();

        assert_eq!(banner, "✓ Security audit complete");
    }
}
