//! Audit module - Alert checks and the reporter that runs them

pub mod alerts;
pub mod reporter;

pub use alerts::{AlertKind, AuditReport, CheckOutcome};
pub use reporter::{run_audit, AlertSource};
