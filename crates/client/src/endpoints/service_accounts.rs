//! Service account and token endpoints.

use grafana_config::{Credential, ServiceAccountSpec};
use reqwest::Client;

use crate::auth::apply_basic_auth;
use crate::endpoints::request::{ApiResponse, send_request};
use crate::error::Result;
use crate::models::{CreateServiceAccountRequest, CreateTokenRequest};

/// `POST /api/serviceaccounts`.
pub async fn create_service_account(
    client: &Client,
    base_url: &str,
    credential: Option<&Credential>,
    spec: &ServiceAccountSpec,
) -> Result<ApiResponse> {
    let builder = apply_basic_auth(
        client
            .post(format!("{}/api/serviceaccounts", base_url))
            .json(&CreateServiceAccountRequest::from(spec)),
        credential,
    );

    send_request(builder, "/api/serviceaccounts", "POST").await
}

/// `GET /api/serviceaccounts/search?query={name}`.
pub async fn search_service_accounts(
    client: &Client,
    base_url: &str,
    credential: Option<&Credential>,
    query: &str,
) -> Result<ApiResponse> {
    let builder = apply_basic_auth(
        client
            .get(format!("{}/api/serviceaccounts/search", base_url))
            .query(&[("query", query)]),
        credential,
    );

    send_request(builder, "/api/serviceaccounts/search", "GET").await
}

/// `POST /api/serviceaccounts/{id}/tokens`.
///
/// Not idempotent: every call issues a new token, even with a repeated name.
pub async fn create_service_account_token(
    client: &Client,
    base_url: &str,
    credential: Option<&Credential>,
    account_id: u64,
    token_name: &str,
) -> Result<ApiResponse> {
    let path = format!("/api/serviceaccounts/{}/tokens", account_id);
    let builder = apply_basic_auth(
        client
            .post(format!("{}{}", base_url, path))
            .json(&CreateTokenRequest { name: token_name }),
        credential,
    );

    send_request(builder, &path, "POST").await
}
