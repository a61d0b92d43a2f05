//! Readiness API methods for [`GrafanaClient`].

use std::time::Duration;

use grafana_config::ReadinessConfig;

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;

impl GrafanaClient {
    /// Block until the server answers any HTTP request or the deadline passes.
    ///
    /// See [`endpoints::wait_until_ready`] for the polling contract.
    pub async fn wait_until_ready(&self, options: &ReadinessConfig) -> Result<Duration> {
        endpoints::wait_until_ready(&self.http, &self.base_url, options).await
    }
}
