//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Document the environment variable behind each flag.
//! - Apply parsed flags onto a [`ConfigLoader`].
//!
//! Non-responsibilities:
//! - Does not read the environment; `ConfigLoader::from_env` does, so that
//!   blank values are treated as unset.
//! - Does not validate bounds (see `ConfigLoader::build`).
//! - Does not execute provisioning (see `run` module).

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use grafana_config::{ConfigLoader, Scheme};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "grafana-provision")]
#[command(
    about = "Wait for a Grafana server, then register data sources and issue a service account token",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  grafana-provision\n  grafana-provision --host localhost --ready-timeout 60\n  grafana-provision --skip-service-account --startup-grace 0\n  GRAFANA_ADMIN_PASSWORD=secret grafana-provision --token-file ./token\n"
)]
pub struct Cli {
    /// URL scheme of the dashboard server (http or https) [env: GRAFANA_SCHEME]
    #[arg(long)]
    pub scheme: Option<Scheme>,

    /// Dashboard server host [env: GRAFANA_HOST]
    #[arg(long)]
    pub host: Option<String>,

    /// Dashboard server port [env: GRAFANA_PORT]
    #[arg(long)]
    pub port: Option<u16>,

    /// Admin username for basic authentication [env: GRAFANA_ADMIN_USER]
    #[arg(long)]
    pub admin_user: Option<String>,

    /// Admin password for basic authentication [env: GRAFANA_ADMIN_PASSWORD]
    #[arg(long)]
    pub admin_password: Option<String>,

    /// Prometheus URL as seen from the dashboard server [env: PROMETHEUS_URL]
    #[arg(long)]
    pub prometheus_url: Option<String>,

    /// Loki URL as seen from the dashboard server [env: LOKI_URL]
    #[arg(long)]
    pub loki_url: Option<String>,

    /// Jaeger query URL as seen from the dashboard server [env: JAEGER_URL]
    #[arg(long)]
    pub jaeger_url: Option<String>,

    /// Seconds to wait for the server to answer before giving up [env: GRAFANA_READY_TIMEOUT]
    #[arg(long, value_name = "SECS")]
    pub ready_timeout: Option<u64>,

    /// Seconds to pause after the server first answers [env: GRAFANA_STARTUP_GRACE]
    #[arg(long, value_name = "SECS")]
    pub startup_grace: Option<u64>,

    /// Timeout for each management API call, in seconds [env: GRAFANA_REQUEST_TIMEOUT]
    #[arg(long, value_name = "SECS")]
    pub request_timeout: Option<u64>,

    /// Name of the service account to create [env: GRAFANA_SERVICE_ACCOUNT]
    #[arg(long)]
    pub service_account: Option<String>,

    /// Name of the API token issued for the service account [env: GRAFANA_TOKEN_NAME]
    #[arg(long)]
    pub token_name: Option<String>,

    /// File the issued token is written to [env: GRAFANA_TOKEN_FILE]
    #[arg(long, value_name = "FILE")]
    pub token_file: Option<PathBuf>,

    /// Do not write the issued token to a file
    #[arg(long, conflicts_with = "token_file")]
    pub no_token_file: bool,

    /// Skip service account and token creation
    #[arg(long)]
    pub skip_service_account: bool,

    /// Skip the health probe after a data source is created
    #[arg(long)]
    pub no_connectivity_check: bool,

    /// Log output format (written to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Apply CLI overrides onto a loader that already holds environment values.
    ///
    /// Flags take precedence over everything loaded before them.
    pub fn apply_to(&self, mut loader: ConfigLoader) -> ConfigLoader {
        if let Some(scheme) = self.scheme {
            loader = loader.with_scheme(scheme);
        }
        if let Some(ref host) = self.host {
            loader = loader.with_host(host.clone());
        }
        if let Some(port) = self.port {
            loader = loader.with_port(port);
        }
        if let Some(ref user) = self.admin_user {
            loader = loader.with_admin_user(user.clone());
        }
        if let Some(ref password) = self.admin_password {
            loader = loader.with_admin_password(password.clone());
        }
        if let Some(ref url) = self.prometheus_url {
            loader = loader.with_prometheus_url(url.clone());
        }
        if let Some(ref url) = self.loki_url {
            loader = loader.with_loki_url(url.clone());
        }
        if let Some(ref url) = self.jaeger_url {
            loader = loader.with_jaeger_url(url.clone());
        }
        if let Some(secs) = self.ready_timeout {
            loader = loader.with_ready_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = self.startup_grace {
            loader = loader.with_startup_grace(Duration::from_secs(secs));
        }
        if let Some(secs) = self.request_timeout {
            loader = loader.with_request_timeout(Duration::from_secs(secs));
        }
        if let Some(ref name) = self.service_account {
            loader = loader.with_service_account(name.clone());
        }
        if let Some(ref name) = self.token_name {
            loader = loader.with_token_name(name.clone());
        }
        if let Some(ref path) = self.token_file {
            loader = loader.with_token_file(path.clone());
        }
        if self.no_token_file {
            loader = loader.with_no_token_file(true);
        }
        if self.skip_service_account {
            loader = loader.with_skip_service_account(true);
        }
        if self.no_connectivity_check {
            loader = loader.with_connectivity_check(false);
        }
        loader
    }
}
