//! Configuration type definitions for Grafana provisioning.
//!
//! Responsibilities:
//! - Define the dashboard endpoint and credential.
//! - Define declared resources (data sources, service accounts).
//! - Define the resolved per-run configuration.
//!
//! Does NOT handle:
//! - Configuration loading from the environment (see `loader` module).
//! - Network access (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.

pub(crate) mod connection;
mod provision;
mod resources;

pub use connection::{Credential, Endpoint, Scheme};
pub use provision::{ProvisionConfig, ReadinessConfig};
pub use resources::{
    DataSourceSpec, DataSourceType, ServiceAccountRole, ServiceAccountSpec, ServiceCredentialSpec,
    default_data_sources,
};
