//! Service account and token models.

use grafana_config::{ServiceAccountRole, ServiceAccountSpec};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/serviceaccounts`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceAccountRequest<'a> {
    pub name: &'a str,
    pub display_name: &'a str,
    pub role: ServiceAccountRole,
}

impl<'a> From<&'a ServiceAccountSpec> for CreateServiceAccountRequest<'a> {
    fn from(spec: &'a ServiceAccountSpec) -> Self {
        Self {
            name: &spec.name,
            display_name: &spec.display_name,
            role: spec.role,
        }
    }
}

/// A service account resolved on the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceAccountRecord {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub login: Option<String>,
    /// `true` when the account was found via the conflict lookup instead of created.
    #[serde(skip)]
    pub pre_existing: bool,
}

/// Body of `GET /api/serviceaccounts/search`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAccountSearchResponse {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub service_accounts: Vec<ServiceAccountRecord>,
}

impl ServiceAccountSearchResponse {
    /// Pick the account named `name`, falling back to the first hit.
    ///
    /// The search endpoint does substring matching, so `reader` also returns
    /// `reader-2`; an exact name or login match wins.
    pub fn into_match(self, name: &str) -> Option<ServiceAccountRecord> {
        let mut accounts = self.service_accounts;
        let exact = accounts
            .iter()
            .position(|a| a.name == name || a.login.as_deref() == Some(name));
        match exact {
            Some(idx) => Some(accounts.swap_remove(idx)),
            None => accounts.into_iter().next(),
        }
    }
}

/// Body of `POST /api/serviceaccounts/{id}/tokens`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateTokenRequest<'a> {
    pub name: &'a str,
}

/// Raw token creation response; `key` is only present on success.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
}

/// An issued API token. The secret cannot be fetched again from the server.
#[derive(Debug, Clone)]
pub struct TokenRecord {
    pub name: String,
    pub key: SecretString,
}
