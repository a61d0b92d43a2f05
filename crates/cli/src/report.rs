//! Leveled per-step messages and the final summary line.
//!
//! Responsibilities:
//! - Emit one message per step outcome at the matching level.
//! - Format the `Data sources: N/M successful` summary line.
//!
//! Does NOT handle:
//! - Deciding outcomes or exit status (see `run` module).

use tracing::{error, info, warn};

use crate::run::{CredentialOutcome, RunSummary, StepOutcome};

/// `Data sources: N/M successful`.
pub fn summary_line(summary: &RunSummary) -> String {
    format!(
        "Data sources: {}/{} successful",
        summary.succeeded(),
        summary.attempted()
    )
}

pub fn log_step(outcome: &StepOutcome) {
    if outcome.succeeded {
        info!(name = %outcome.name, result = %outcome.detail, "Data source ready");
    } else {
        error!(name = %outcome.name, detail = %outcome.detail, "Data source failed");
    }
}

/// Log every outcome, then the summary line last.
pub fn log_summary(summary: &RunSummary) {
    match &summary.credential {
        CredentialOutcome::Skipped => info!("Service account: skipped"),
        CredentialOutcome::Issued { token_file: Some(path) } => {
            info!(token_file = %path.display(), "Service account: token issued")
        }
        CredentialOutcome::Issued { token_file: None } => info!("Service account: token issued"),
        CredentialOutcome::Failed { detail } => {
            warn!(detail = %detail, "Service account: failed")
        }
    }

    for outcome in summary.data_sources.iter().filter(|o| !o.succeeded) {
        warn!(name = %outcome.name, detail = %outcome.detail, "Failed data source");
    }

    let line = summary_line(summary);
    if summary.all_succeeded() {
        info!("{}", line);
    } else {
        error!("{}", line);
    }
}
