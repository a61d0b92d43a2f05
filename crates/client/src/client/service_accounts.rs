//! Service account and token reconciliation for [`GrafanaClient`].
//!
//! # What this module handles:
//! - Creating a service account, or resolving it after a 409 conflict
//! - Issuing an API token for the account
//!
//! # What this module does NOT handle:
//! - Token deduplication: the API issues a new token on every call, and a
//!   repeated run creates another token with the same name
//! - Persisting the token secret (handled by the binary)

use grafana_config::ServiceAccountSpec;
use secrecy::SecretString;
use tracing::info;

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::service_accounts::TokenResponse;
use crate::models::{ServiceAccountRecord, ServiceAccountSearchResponse, TokenRecord};

impl GrafanaClient {
    /// Create the service account, or look it up when it already exists.
    pub async fn ensure_service_account(
        &self,
        spec: &ServiceAccountSpec,
    ) -> Result<ServiceAccountRecord> {
        let response =
            endpoints::create_service_account(&self.http, &self.base_url, self.credential(), spec)
                .await?;

        match response.status {
            200 | 201 => {
                let record: ServiceAccountRecord = response.json()?;
                info!(name = %spec.name, id = record.id, "Service account created");
                Ok(record)
            }
            409 => {
                info!(name = %spec.name, "Service account already exists, looking it up");
                let mut record = self.find_service_account(&spec.name).await?;
                record.pre_existing = true;
                info!(name = %spec.name, id = record.id, "Resolved existing service account");
                Ok(record)
            }
            _ => Err(response.into_error()),
        }
    }

    /// Resolve a service account by name through the search endpoint.
    pub async fn find_service_account(&self, name: &str) -> Result<ServiceAccountRecord> {
        let response =
            endpoints::search_service_accounts(&self.http, &self.base_url, self.credential(), name)
                .await?;

        if !response.is_success() {
            return Err(response.into_error());
        }

        response
            .json::<ServiceAccountSearchResponse>()?
            .into_match(name)
            .ok_or_else(|| {
                ClientError::MalformedResponse(format!(
                    "service account search for '{}' returned no results",
                    name
                ))
            })
    }

    /// Issue a new token for `account_id`.
    ///
    /// The returned secret is the only copy the server will ever hand out.
    pub async fn create_token(&self, account_id: u64, token_name: &str) -> Result<TokenRecord> {
        let response = endpoints::create_service_account_token(
            &self.http,
            &self.base_url,
            self.credential(),
            account_id,
            token_name,
        )
        .await?;

        match response.status {
            200 | 201 => {
                let token: TokenResponse = response.json()?;
                let key = token.key.filter(|k| !k.is_empty()).ok_or_else(|| {
                    ClientError::MalformedResponse(format!(
                        "token response from {} has no key",
                        response.url
                    ))
                })?;
                info!(account_id, token_name, "Service account token created");
                Ok(TokenRecord {
                    name: token.name.unwrap_or_else(|| token_name.to_string()),
                    key: SecretString::new(key.into()),
                })
            }
            _ => Err(response.into_error()),
        }
    }

    /// Ensure the service account exists and issue a token for it.
    pub async fn ensure_service_account_token(
        &self,
        spec: &ServiceAccountSpec,
        token_name: &str,
    ) -> Result<TokenRecord> {
        let account = self.ensure_service_account(spec).await?;
        self.create_token(account.id, token_name).await
    }
}
