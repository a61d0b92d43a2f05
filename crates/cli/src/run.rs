//! Provisioning run: readiness, data sources, service credential, summary.
//!
//! Responsibilities:
//! - Sequence the steps and await each one in order.
//! - Record one [`StepOutcome`] per declared data source.
//! - Surface the issued token exactly once.
//!
//! Does NOT handle:
//! - HTTP details (see `grafana_client`).
//! - Configuration resolution (see `grafana_config`).
//!
//! Invariants:
//! - Only a readiness timeout (or a client that cannot be built) aborts the run.
//! - A data source failure never stops later data sources.
//! - The service credential outcome never affects the exit code.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use grafana_client::GrafanaClient;
use grafana_config::{ProvisionConfig, ServiceCredentialSpec};
use tracing::{info, warn};

use crate::error::ExitCode;
use crate::report;
use crate::token_output::{echo_token, write_token_file};

/// Result of reconciling one data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub name: String,
    pub succeeded: bool,
    /// `created` / `already exists` on success, the server's diagnostic otherwise.
    pub detail: String,
}

impl StepOutcome {
    pub fn succeeded(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            succeeded: true,
            detail: detail.into(),
        }
    }

    pub fn failed(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            succeeded: false,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialOutcome {
    Skipped,
    Issued {
        /// Where the token was written, if the write succeeded.
        token_file: Option<std::path::PathBuf>,
    },
    Failed {
        detail: String,
    },
}

/// Aggregated outcome of one run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub data_sources: Vec<StepOutcome>,
    pub credential: CredentialOutcome,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize {
        self.data_sources.iter().filter(|o| o.succeeded).count()
    }

    pub fn attempted(&self) -> usize {
        self.data_sources.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.succeeded() == self.attempted()
    }

    /// Success only when every declared data source succeeded.
    pub fn exit_code(&self) -> ExitCode {
        if self.all_succeeded() {
            ExitCode::Success
        } else {
            ExitCode::Failure
        }
    }
}

/// Execute one provisioning run. The token echo goes to `out`.
///
/// # Errors
///
/// Returns an error when the server never became ready; every later
/// failure is recorded in the returned [`RunSummary`] instead.
pub async fn run<W: Write>(config: &ProvisionConfig, out: &mut W) -> Result<RunSummary> {
    let client = GrafanaClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build HTTP client")?;

    client
        .wait_until_ready(&config.readiness)
        .await
        .context("Dashboard server is not ready")?;

    if !config.startup_grace.is_zero() {
        info!(
            grace_secs = config.startup_grace.as_secs(),
            "Waiting for dashboard server to finish starting"
        );
        tokio::time::sleep(config.startup_grace).await;
    }

    let mut data_sources = Vec::with_capacity(config.data_sources.len());
    for spec in &config.data_sources {
        let outcome = match client.ensure_data_source(spec).await {
            Ok(reconciled) => StepOutcome::succeeded(&spec.name, reconciled.as_str()),
            Err(e) => StepOutcome::failed(&spec.name, e.detail()),
        };
        report::log_step(&outcome);
        data_sources.push(outcome);
    }

    let credential = match &config.service_credential {
        Some(spec) => provision_credential(&client, spec, config.token_file.as_deref(), out).await,
        None => {
            info!("Skipping service account creation");
            CredentialOutcome::Skipped
        }
    };

    Ok(RunSummary {
        data_sources,
        credential,
    })
}

async fn provision_credential<W: Write>(
    client: &GrafanaClient,
    spec: &ServiceCredentialSpec,
    token_file: Option<&Path>,
    out: &mut W,
) -> CredentialOutcome {
    info!(name = %spec.account.name, "Creating service account token");

    let token = match client
        .ensure_service_account_token(&spec.account, &spec.token_name)
        .await
    {
        Ok(token) => token,
        Err(e) => {
            warn!(
                name = %spec.account.name,
                detail = %e.detail(),
                "Could not create service account token"
            );
            return CredentialOutcome::Failed { detail: e.detail() };
        }
    };

    let written = token_file.and_then(|path| match write_token_file(&token.key, path) {
        Ok(()) => {
            info!(path = %path.display(), "Token written");
            Some(path.to_path_buf())
        }
        Err(e) => {
            warn!(error = %format!("{:#}", e), "Could not write token file");
            None
        }
    });

    if let Err(e) = echo_token(&token.key, out) {
        warn!(error = %format!("{:#}", e), "Could not echo token");
    }

    CredentialOutcome::Issued {
        token_file: written,
    }
}
