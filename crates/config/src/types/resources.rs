//! Declared resources to reconcile on the dashboard server.
//!
//! Responsibilities:
//! - Define data source and service account specs as declared by the operator.
//! - Provide the default data source set for the observability stack.
//!
//! Does NOT handle:
//! - Server-side records returned by the API (see client crate `models`).
//!
//! Invariants:
//! - `DataSourceSpec::name` is the natural idempotency key on the server.
//! - Enum serializations match the wire values the dashboard API expects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Data source plugin type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceType {
    Prometheus,
    Loki,
    Jaeger,
    Tempo,
}

impl DataSourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prometheus => "prometheus",
            Self::Loki => "loki",
            Self::Jaeger => "jaeger",
            Self::Tempo => "tempo",
        }
    }
}

impl fmt::Display for DataSourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A data source that should exist on the dashboard server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSourceSpec {
    pub name: String,
    pub kind: DataSourceType,
    pub url: String,
}

impl DataSourceSpec {
    pub fn new(name: impl Into<String>, kind: DataSourceType, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            url: url.into(),
        }
    }
}

/// Builds the default data source list in reconciliation order:
/// metrics, then logs, then traces.
pub fn default_data_sources(
    prometheus_url: &str,
    loki_url: &str,
    jaeger_url: &str,
) -> Vec<DataSourceSpec> {
    vec![
        DataSourceSpec::new("Prometheus", DataSourceType::Prometheus, prometheus_url),
        DataSourceSpec::new("Loki", DataSourceType::Loki, loki_url),
        DataSourceSpec::new("Jaeger", DataSourceType::Jaeger, jaeger_url),
    ]
}

/// Organization role granted to a service account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServiceAccountRole {
    #[default]
    Viewer,
    Editor,
    Admin,
}

/// A service account that should exist on the dashboard server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceAccountSpec {
    pub name: String,
    pub display_name: String,
    pub role: ServiceAccountRole,
}

/// Service account plus the name of the token to issue for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCredentialSpec {
    pub account: ServiceAccountSpec,
    pub token_name: String,
}
