//! Data source management endpoints.

use grafana_config::{Credential, DataSourceSpec};
use reqwest::Client;

use crate::auth::apply_basic_auth;
use crate::endpoints::encode_path_segment;
use crate::endpoints::request::{ApiResponse, send_request};
use crate::error::Result;
use crate::models::CreateDataSourceRequest;

/// `GET /api/datasources/name/{name}`.
pub async fn get_data_source_by_name(
    client: &Client,
    base_url: &str,
    credential: Option<&Credential>,
    name: &str,
) -> Result<ApiResponse> {
    let path = format!("/api/datasources/name/{}", encode_path_segment(name));
    let builder = apply_basic_auth(client.get(format!("{}{}", base_url, path)), credential);

    send_request(builder, &path, "GET").await
}

/// `POST /api/datasources` with a proxy-access, non-default registration.
pub async fn create_data_source(
    client: &Client,
    base_url: &str,
    credential: Option<&Credential>,
    spec: &DataSourceSpec,
) -> Result<ApiResponse> {
    let builder = apply_basic_auth(
        client
            .post(format!("{}/api/datasources", base_url))
            .json(&CreateDataSourceRequest::from(spec)),
        credential,
    );

    send_request(builder, "/api/datasources", "POST").await
}

/// `GET /api/datasources/{id}/health`.
pub async fn get_data_source_health(
    client: &Client,
    base_url: &str,
    credential: Option<&Credential>,
    id: u64,
) -> Result<ApiResponse> {
    let path = format!("/api/datasources/{}/health", id);
    let builder = apply_basic_auth(client.get(format!("{}{}", base_url, path)), credential);

    send_request(builder, &path, "GET").await
}
