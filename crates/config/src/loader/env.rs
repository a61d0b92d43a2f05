//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse environment variables for provisioning configuration.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::Scheme;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Read and parse an environment variable, mapping parse failures to `InvalidValue`.
fn parse_env<T: FromStr>(key: &str, message: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(key)
        .map(|raw| {
            raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: key.to_string(),
                message: message.to_string(),
            })
        })
        .transpose()
}

fn parse_secs(key: &str) -> Result<Option<Duration>, ConfigError> {
    Ok(parse_env::<u64>(key, "must be a number of seconds")?.map(Duration::from_secs))
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(scheme) = env_var_or_none("GRAFANA_SCHEME") {
        let scheme: Scheme = scheme
            .parse()
            .map_err(|message| ConfigError::InvalidValue {
                var: "GRAFANA_SCHEME".to_string(),
                message,
            })?;
        loader.set_scheme(Some(scheme));
    }
    if let Some(host) = env_var_or_none("GRAFANA_HOST") {
        loader.set_host(Some(host));
    }
    if let Some(port) = parse_env::<u16>("GRAFANA_PORT", "must be a port number (1-65535)")? {
        loader.set_port(Some(port));
    }
    if let Some(user) = env_var_or_none("GRAFANA_ADMIN_USER") {
        loader.set_admin_user(Some(user));
    }
    if let Some(password) = env_var_or_none("GRAFANA_ADMIN_PASSWORD") {
        loader.set_admin_password(Some(password));
    }

    if let Some(url) = env_var_or_none("PROMETHEUS_URL") {
        loader.set_prometheus_url(Some(url));
    }
    if let Some(url) = env_var_or_none("LOKI_URL") {
        loader.set_loki_url(Some(url));
    }
    if let Some(url) = env_var_or_none("JAEGER_URL") {
        loader.set_jaeger_url(Some(url));
    }

    if let Some(timeout) = parse_secs("GRAFANA_READY_TIMEOUT")? {
        loader.set_ready_timeout(Some(timeout));
    }
    if let Some(grace) = parse_secs("GRAFANA_STARTUP_GRACE")? {
        loader.set_startup_grace(Some(grace));
    }
    if let Some(timeout) = parse_secs("GRAFANA_REQUEST_TIMEOUT")? {
        loader.set_request_timeout(Some(timeout));
    }

    if let Some(account) = env_var_or_none("GRAFANA_SERVICE_ACCOUNT") {
        loader.set_service_account(Some(account));
    }
    if let Some(token_name) = env_var_or_none("GRAFANA_TOKEN_NAME") {
        loader.set_token_name(Some(token_name));
    }
    if let Some(path) = env_var_or_none("GRAFANA_TOKEN_FILE") {
        loader.set_token_file(Some(PathBuf::from(path)));
    }

    Ok(())
}
