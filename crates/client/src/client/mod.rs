//! Main Grafana management API client and reconciliation methods.
//!
//! This module provides the primary [`GrafanaClient`] used by the
//! provisioning driver.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `readiness`: Waiting for the server to accept requests
//! - `datasources`: Idempotent data source reconciliation
//! - `service_accounts`: Service account and token reconciliation
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Sequencing of steps or exit status (handled by the binary)
//!
//! # Invariants
//! - Calls are never retried here; a failure is reported to the caller once
//! - Every management call carries basic auth when a credential is configured

pub mod builder;

mod datasources;
mod readiness;
mod service_accounts;

pub use datasources::Reconciled;

use grafana_config::Credential;

/// Grafana management API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use grafana_client::GrafanaClient;
/// use grafana_config::Credential;
///
/// let client = GrafanaClient::builder()
///     .base_url("http://grafana:3000".to_string())
///     .credential(Credential::new("admin", "admin"))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct GrafanaClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credential: Option<Credential>,
    pub(crate) connectivity_check: bool,
}

impl GrafanaClient {
    /// Create a new client builder.
    pub fn builder() -> builder::GrafanaClientBuilder {
        builder::GrafanaClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }
}
