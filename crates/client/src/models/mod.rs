//! Data models for dashboard management API requests and responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod datasources;
pub mod service_accounts;

pub use datasources::{CreateDataSourceRequest, DataSourceHealth, DataSourceRecord};
pub use service_accounts::{
    CreateServiceAccountRequest, CreateTokenRequest, ServiceAccountRecord,
    ServiceAccountSearchResponse, TokenRecord,
};
