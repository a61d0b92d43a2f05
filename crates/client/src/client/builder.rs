//! Client builder for constructing [`GrafanaClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating the base URL and normalizing trailing slashes
//! - Configuring the underlying HTTP client (timeout, redirects)
//!
//! # Invariants
//! - `base_url` is required and must start with `http://` or `https://`
//! - The base URL never ends with a slash, so paths can be appended directly

use std::time::Duration;

use grafana_config::{
    Credential, ProvisionConfig,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_REQUEST_TIMEOUT_SECS},
};

use crate::client::GrafanaClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`GrafanaClient`].
pub struct GrafanaClientBuilder {
    base_url: Option<String>,
    credential: Option<Credential>,
    timeout: Duration,
    connectivity_check: bool,
}

impl Default for GrafanaClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credential: None,
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connectivity_check: true,
        }
    }
}

impl GrafanaClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the dashboard server, e.g. `http://grafana:3000`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the basic-auth credential attached to management calls.
    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    ///
    /// Readiness probes override this per attempt.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable or disable the health probe after a data source is created.
    pub fn connectivity_check(mut self, enabled: bool) -> Self {
        self.connectivity_check = enabled;
        self
    }

    /// Create a client builder from a resolved provisioning configuration.
    pub fn from_config(mut self, config: &ProvisionConfig) -> Self {
        self.base_url = Some(config.endpoint.base_url());
        self.credential = Some(config.credential.clone());
        self.timeout = config.request_timeout;
        self.connectivity_check = config.connectivity_check;
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`GrafanaClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is missing or not http(s).
    /// Returns `ClientError::Http` if the HTTP client fails to build.
    pub fn build(self) -> Result<GrafanaClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidUrl(format!(
                "{} (expected http:// or https://)",
                base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        Ok(GrafanaClient {
            http,
            base_url,
            credential: self.credential,
            connectivity_check: self.connectivity_check,
        })
    }
}
