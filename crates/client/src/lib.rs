//! Grafana management API client.
//!
//! This crate provides a type-safe client for the parts of the Grafana HTTP
//! API needed to bootstrap a fresh server: readiness polling, data source
//! registration, and service account tokens.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub use client::builder::GrafanaClientBuilder;
pub use client::{GrafanaClient, Reconciled};
pub use endpoints::ApiResponse;
pub use error::{ClientError, Result};
pub use models::{DataSourceHealth, DataSourceRecord, ServiceAccountRecord, TokenRecord};
