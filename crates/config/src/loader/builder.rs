//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Support loading from `.env`, environment variables, and direct builder methods.
//! - Validate bounds and URLs, then build the final `ProvisionConfig`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables when applied after `from_env()`.
//! - Unset values fall back to the constants in `crate::constants`.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USER, DEFAULT_GRAFANA_HOST, DEFAULT_GRAFANA_PORT,
    DEFAULT_JAEGER_URL, DEFAULT_LOKI_URL, DEFAULT_PROMETHEUS_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SERVICE_ACCOUNT_DISPLAY_NAME, DEFAULT_SERVICE_ACCOUNT_NAME, DEFAULT_STARTUP_GRACE_SECS,
    DEFAULT_TOKEN_FILE_NAME, DEFAULT_TOKEN_NAME, MAX_READY_TIMEOUT_SECS,
    MAX_REQUEST_TIMEOUT_SECS, MAX_STARTUP_GRACE_SECS,
};
use crate::types::{
    Credential, DataSourceSpec, Endpoint, ProvisionConfig, ReadinessConfig, Scheme,
    ServiceAccountRole, ServiceAccountSpec, ServiceCredentialSpec, default_data_sources,
};

/// Configuration loader that builds a [`ProvisionConfig`] from layered sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    scheme: Option<Scheme>,
    host: Option<String>,
    port: Option<u16>,
    admin_user: Option<String>,
    admin_password: Option<String>,
    prometheus_url: Option<String>,
    loki_url: Option<String>,
    jaeger_url: Option<String>,
    ready_timeout: Option<Duration>,
    ready_poll_interval: Option<Duration>,
    startup_grace: Option<Duration>,
    request_timeout: Option<Duration>,
    service_account: Option<String>,
    token_name: Option<String>,
    token_file: Option<PathBuf>,
    no_token_file: bool,
    skip_service_account: bool,
    connectivity_check: Option<bool>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    pub fn with_host(mut self, host: String) -> Self {
        self.host = Some(host);
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_admin_user(mut self, user: String) -> Self {
        self.admin_user = Some(user);
        self
    }

    pub fn with_admin_password(mut self, password: String) -> Self {
        self.admin_password = Some(password);
        self
    }

    pub fn with_prometheus_url(mut self, url: String) -> Self {
        self.prometheus_url = Some(url);
        self
    }

    pub fn with_loki_url(mut self, url: String) -> Self {
        self.loki_url = Some(url);
        self
    }

    pub fn with_jaeger_url(mut self, url: String) -> Self {
        self.jaeger_url = Some(url);
        self
    }

    /// Set the readiness deadline.
    pub fn with_ready_timeout(mut self, timeout: Duration) -> Self {
        self.ready_timeout = Some(timeout);
        self
    }

    /// Set the delay between readiness probes (primarily for testing).
    pub fn with_ready_poll_interval(mut self, interval: Duration) -> Self {
        self.ready_poll_interval = Some(interval);
        self
    }

    /// Set the delay between readiness and the first API call.
    pub fn with_startup_grace(mut self, grace: Duration) -> Self {
        self.startup_grace = Some(grace);
        self
    }

    /// Set the per-request timeout for management API calls.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_service_account(mut self, name: String) -> Self {
        self.service_account = Some(name);
        self
    }

    pub fn with_token_name(mut self, name: String) -> Self {
        self.token_name = Some(name);
        self
    }

    pub fn with_token_file(mut self, path: PathBuf) -> Self {
        self.token_file = Some(path);
        self
    }

    /// Keep the issued token out of the filesystem; it is only echoed.
    pub fn with_no_token_file(mut self, disabled: bool) -> Self {
        self.no_token_file = disabled;
        self
    }

    /// Skip the service account and token step entirely.
    pub fn with_skip_service_account(mut self, skip: bool) -> Self {
        self.skip_service_account = skip;
        self
    }

    /// Enable or disable the post-create data source health probe.
    pub fn with_connectivity_check(mut self, enabled: bool) -> Self {
        self.connectivity_check = Some(enabled);
        self
    }

    pub(crate) fn set_scheme(&mut self, scheme: Option<Scheme>) {
        self.scheme = scheme;
    }

    pub(crate) fn set_host(&mut self, host: Option<String>) {
        self.host = host;
    }

    pub(crate) fn set_port(&mut self, port: Option<u16>) {
        self.port = port;
    }

    pub(crate) fn set_admin_user(&mut self, user: Option<String>) {
        self.admin_user = user;
    }

    pub(crate) fn set_admin_password(&mut self, password: Option<String>) {
        self.admin_password = password;
    }

    pub(crate) fn set_prometheus_url(&mut self, url: Option<String>) {
        self.prometheus_url = url;
    }

    pub(crate) fn set_loki_url(&mut self, url: Option<String>) {
        self.loki_url = url;
    }

    pub(crate) fn set_jaeger_url(&mut self, url: Option<String>) {
        self.jaeger_url = url;
    }

    pub(crate) fn set_ready_timeout(&mut self, timeout: Option<Duration>) {
        self.ready_timeout = timeout;
    }

    pub(crate) fn set_startup_grace(&mut self, grace: Option<Duration>) {
        self.startup_grace = grace;
    }

    pub(crate) fn set_request_timeout(&mut self, timeout: Option<Duration>) {
        self.request_timeout = timeout;
    }

    pub(crate) fn set_service_account(&mut self, name: Option<String>) {
        self.service_account = name;
    }

    pub(crate) fn set_token_name(&mut self, name: Option<String>) {
        self.token_name = name;
    }

    pub(crate) fn set_token_file(&mut self, path: Option<PathBuf>) {
        self.token_file = path;
    }

    /// Build the final configuration, applying defaults and validating bounds.
    pub fn build(self) -> Result<ProvisionConfig, ConfigError> {
        let port = self.port.unwrap_or(DEFAULT_GRAFANA_PORT);
        if port == 0 {
            return Err(ConfigError::InvalidPort {
                message: "must be between 1 and 65535 (got 0)".to_string(),
            });
        }

        let endpoint = Endpoint::new(
            self.scheme.unwrap_or_default(),
            self.host
                .unwrap_or_else(|| DEFAULT_GRAFANA_HOST.to_string()),
            port,
        );
        Url::parse(&endpoint.base_url()).map_err(|e| ConfigError::InvalidEndpoint {
            message: format!("{} ({})", endpoint.base_url(), e),
        })?;

        let credential = Credential::new(
            self.admin_user
                .unwrap_or_else(|| DEFAULT_ADMIN_USER.to_string()),
            self.admin_password
                .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string()),
        );

        let mut readiness = ReadinessConfig::default();
        if let Some(timeout) = self.ready_timeout {
            readiness.timeout = timeout;
        }
        if let Some(interval) = self.ready_poll_interval {
            readiness.poll_interval = interval;
        }
        let ready_secs = readiness.timeout.as_secs();
        if ready_secs == 0 || ready_secs > MAX_READY_TIMEOUT_SECS {
            return Err(ConfigError::InvalidReadyTimeout {
                message: format!(
                    "must be between 1 and {} seconds (got {})",
                    MAX_READY_TIMEOUT_SECS, ready_secs
                ),
            });
        }

        let startup_grace = self
            .startup_grace
            .unwrap_or(Duration::from_secs(DEFAULT_STARTUP_GRACE_SECS));
        if startup_grace.as_secs() > MAX_STARTUP_GRACE_SECS {
            return Err(ConfigError::InvalidStartupGrace {
                message: format!(
                    "must be at most {} seconds (got {})",
                    MAX_STARTUP_GRACE_SECS,
                    startup_grace.as_secs()
                ),
            });
        }

        let request_timeout = self
            .request_timeout
            .unwrap_or(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
        let request_secs = request_timeout.as_secs();
        if request_secs == 0 || request_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ConfigError::InvalidRequestTimeout {
                message: format!(
                    "must be between 1 and {} seconds (got {})",
                    MAX_REQUEST_TIMEOUT_SECS, request_secs
                ),
            });
        }

        let data_sources = default_data_sources(
            self.prometheus_url
                .as_deref()
                .unwrap_or(DEFAULT_PROMETHEUS_URL),
            self.loki_url.as_deref().unwrap_or(DEFAULT_LOKI_URL),
            self.jaeger_url.as_deref().unwrap_or(DEFAULT_JAEGER_URL),
        );
        for spec in &data_sources {
            validate_data_source_url(spec)?;
        }

        let service_credential = if self.skip_service_account {
            None
        } else {
            let name = self
                .service_account
                .unwrap_or_else(|| DEFAULT_SERVICE_ACCOUNT_NAME.to_string());
            let display_name = if name == DEFAULT_SERVICE_ACCOUNT_NAME {
                DEFAULT_SERVICE_ACCOUNT_DISPLAY_NAME.to_string()
            } else {
                name.clone()
            };
            Some(ServiceCredentialSpec {
                account: ServiceAccountSpec {
                    name,
                    display_name,
                    role: ServiceAccountRole::Viewer,
                },
                token_name: self
                    .token_name
                    .unwrap_or_else(|| DEFAULT_TOKEN_NAME.to_string()),
            })
        };

        let token_file = if self.no_token_file {
            None
        } else {
            Some(
                self.token_file
                    .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_TOKEN_FILE_NAME)),
            )
        };

        tracing::debug!(
            endpoint = %endpoint,
            data_sources = data_sources.len(),
            service_account = service_credential.as_ref().map(|s| s.account.name.as_str()),
            token_file = ?token_file,
            "Resolved provisioning configuration"
        );

        Ok(ProvisionConfig {
            endpoint,
            credential,
            readiness,
            startup_grace,
            request_timeout,
            data_sources,
            service_credential,
            token_file,
            connectivity_check: self.connectivity_check.unwrap_or(true),
        })
    }
}

/// Data source URLs must be absolute http(s) URLs with a host.
fn validate_data_source_url(spec: &DataSourceSpec) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::InvalidDataSourceUrl {
        name: spec.name.clone(),
        message,
    };

    let url = Url::parse(&spec.url).map_err(|e| invalid(format!("{} ({})", spec.url, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "{} (scheme must be http or https)",
            spec.url
        )));
    }
    if url.host_str().is_none() {
        return Err(invalid(format!("{} (missing host)", spec.url)));
    }
    Ok(())
}
