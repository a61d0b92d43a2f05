//! Data source reconciliation for [`GrafanaClient`].
//!
//! # What this module handles:
//! - Existence check by name, creation when absent
//! - Best-effort connectivity check after creation
//!
//! # Invariants
//! - The data source name is the idempotency key: an existing name is never re-created
//! - A failed connectivity check is logged and never fails the reconciliation

use grafana_config::DataSourceSpec;
use tracing::{debug, info, warn};

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::datasources::DataSourceName;
use crate::models::{DataSourceHealth, DataSourceRecord};

/// Outcome of a successful reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    Created,
    AlreadyExists,
}

impl Reconciled {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::AlreadyExists => "already exists",
        }
    }
}

impl GrafanaClient {
    /// Returns `true` when a data source named `name` is registered.
    ///
    /// Only a 2xx answer whose body carries a non-empty `name` counts; a 404,
    /// any other status, or an unrecognizable body means "absent".
    pub async fn data_source_exists(&self, name: &str) -> Result<bool> {
        let response =
            endpoints::get_data_source_by_name(&self.http, &self.base_url, self.credential(), name)
                .await?;

        if !response.is_success() {
            debug!(name, status = response.status, "Data source lookup returned no match");
            return Ok(false);
        }

        Ok(response
            .json::<DataSourceName>()
            .ok()
            .and_then(|probe| probe.name)
            .is_some_and(|n| !n.is_empty()))
    }

    /// Fetch the full server-side record for `name`.
    pub async fn get_data_source(&self, name: &str) -> Result<DataSourceRecord> {
        let response =
            endpoints::get_data_source_by_name(&self.http, &self.base_url, self.credential(), name)
                .await?;

        match response.status {
            200..=299 => response.json(),
            _ => Err(response.into_error()),
        }
    }

    /// Register a data source. 200 and 201 are success; anything else fails
    /// with the server body as detail.
    pub async fn create_data_source(&self, spec: &DataSourceSpec) -> Result<()> {
        let response =
            endpoints::create_data_source(&self.http, &self.base_url, self.credential(), spec)
                .await?;

        match response.status {
            200 | 201 => Ok(()),
            _ => Err(response.into_error()),
        }
    }

    /// Probe a data source's backend through the dashboard server.
    ///
    /// # Errors
    ///
    /// `ConnectivityCheckFailed` for a non-200 health status or when the id
    /// cannot be resolved. Transport errors propagate unchanged.
    pub async fn check_data_source_health(&self, name: &str) -> Result<DataSourceHealth> {
        let record = self
            .get_data_source(name)
            .await
            .map_err(|e| ClientError::ConnectivityCheckFailed {
                name: name.to_string(),
                detail: format!("could not resolve data source id: {}", e.detail()),
            })?;

        let response = endpoints::get_data_source_health(
            &self.http,
            &self.base_url,
            self.credential(),
            record.id,
        )
        .await?;

        let health: DataSourceHealth = response.json().unwrap_or_default();
        if response.status != 200 {
            return Err(ClientError::ConnectivityCheckFailed {
                name: name.to_string(),
                detail: health
                    .message
                    .unwrap_or_else(|| format!("HTTP {}: {}", response.status, response.body)),
            });
        }

        Ok(health)
    }

    /// Make sure a data source with `spec.name` exists.
    ///
    /// Repeated calls against the same server state yield `Created` once,
    /// then `AlreadyExists`.
    pub async fn ensure_data_source(&self, spec: &DataSourceSpec) -> Result<Reconciled> {
        if self.data_source_exists(&spec.name).await? {
            info!(name = %spec.name, "Data source already exists");
            return Ok(Reconciled::AlreadyExists);
        }

        info!(name = %spec.name, kind = %spec.kind, url = %spec.url, "Creating data source");
        self.create_data_source(spec).await?;
        info!(name = %spec.name, "Data source created");

        if self.connectivity_check {
            match self.check_data_source_health(&spec.name).await {
                Ok(health) => info!(
                    name = %spec.name,
                    message = health.message.as_deref().unwrap_or("OK"),
                    "Data source connectivity check passed"
                ),
                Err(e) => warn!(error = %e, "Data source connectivity check did not pass"),
            }
        }

        Ok(Reconciled::Created)
    }
}
