//! grafana-provision - bootstrap a freshly started Grafana server.
//!
//! Responsibilities:
//! - Resolve configuration from `.env`, the environment, and CLI flags.
//! - Initialize logging to stderr.
//! - Run the provisioning steps and translate the outcome into an exit code.
//!
//! Does NOT handle:
//! - HTTP or reconciliation logic (see `crates/client`).
//! - Starting or stopping the dashboard server.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` values sit below flags.
//! - stdout carries only the issued token; everything else goes to stderr.

mod args;
mod error;
mod report;
mod run;
mod token_output;

use std::io::IsTerminal;

use args::{Cli, LogFormat};
use clap::Parser;
use clap::error::ErrorKind;
use error::ExitCode;
use grafana_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal()),
            )
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so flags always win over it
    let loader = match ConfigLoader::new().load_dotenv() {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load environment: {}", e);
            std::process::exit(ExitCode::Failure.as_i32());
        }
    };

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(ExitCode::Failure.as_i32());
        }
    };

    init_tracing(cli.log_format);

    let loader = match loader.from_env() {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to load configuration from environment: {:#}", e);
            std::process::exit(ExitCode::Failure.as_i32());
        }
    };

    let config = match cli.apply_to(loader).build() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::Failure.as_i32());
        }
    };

    if config.credential.is_default() {
        tracing::warn!(
            "Using default Grafana credentials (admin/admin). \
             These are for local development only - change before production use."
        );
    }

    let exit_code = match run::run(&config, &mut std::io::stdout()).await {
        Ok(summary) => {
            report::log_summary(&summary);
            summary.exit_code()
        }
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::Failure
        }
    };

    std::process::exit(exit_code.as_i32());
}
