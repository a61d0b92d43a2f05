//! Configuration management for Grafana provisioning.
//!
//! This crate provides types and loaders for resolving the dashboard
//! endpoint, admin credential, and declared resources from environment
//! variables, `.env` files, and explicit overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{
    Credential, DataSourceSpec, DataSourceType, Endpoint, ProvisionConfig, ReadinessConfig, Scheme,
    ServiceAccountRole, ServiceAccountSpec, ServiceCredentialSpec,
};
