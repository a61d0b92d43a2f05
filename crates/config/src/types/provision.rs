//! Fully resolved provisioning run configuration.
//!
//! Responsibilities:
//! - Bundle everything one orchestration run needs into [`ProvisionConfig`].
//! - Group readiness polling knobs into [`ReadinessConfig`].
//!
//! Does NOT handle:
//! - Validation of raw values (performed by `ConfigLoader::build`).

use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_READY_POLL_INTERVAL_MS, DEFAULT_READY_PROBE_TIMEOUT_SECS, DEFAULT_READY_TIMEOUT_SECS,
};
use crate::types::connection::{Credential, Endpoint};
use crate::types::resources::{DataSourceSpec, ServiceCredentialSpec};

/// Readiness polling settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessConfig {
    /// Hard deadline for the whole wait.
    pub timeout: Duration,
    /// Fixed delay between probes.
    pub poll_interval: Duration,
    /// Upper bound for a single probe.
    pub probe_timeout: Duration,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_READY_TIMEOUT_SECS),
            poll_interval: Duration::from_millis(DEFAULT_READY_POLL_INTERVAL_MS),
            probe_timeout: Duration::from_secs(DEFAULT_READY_PROBE_TIMEOUT_SECS),
        }
    }
}

/// Configuration for a single provisioning run.
#[derive(Debug, Clone)]
pub struct ProvisionConfig {
    pub endpoint: Endpoint,
    pub credential: Credential,
    pub readiness: ReadinessConfig,
    /// Delay between readiness and the first management API call.
    pub startup_grace: Duration,
    /// Timeout applied to every management API call.
    pub request_timeout: Duration,
    /// Data sources in reconciliation order.
    pub data_sources: Vec<DataSourceSpec>,
    /// `None` skips the service credential step.
    pub service_credential: Option<ServiceCredentialSpec>,
    /// Where the issued token secret is written. `None` disables the file.
    pub token_file: Option<PathBuf>,
    /// Probe `/api/datasources/{id}/health` after creating a data source.
    pub connectivity_check: bool,
}
