//! audit-tools - Report GitHub secret-scanning and Dependabot alert counts
//!
//! This is the main entry point for the CLI application.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use audit_tools::cli::{self, Cli};
use audit_tools::config::AuditConfig;
use audit_tools::exit_codes;

#[tokio::main]
async fn main() {
    // No arguments are accepted; clap still handles --help and --version
    let _cli = Cli::parse();

    setup_logging();

    match cli::commands::audit::execute(AuditConfig::default()).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn setup_logging() {
    // stdout is reserved for the report
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}
