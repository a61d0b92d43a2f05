//! Basic authentication for management API requests.

use grafana_config::Credential;
use reqwest::RequestBuilder;
use secrecy::ExposeSecret;

/// Attach `Authorization: Basic base64(user:pass)` when a credential is configured.
///
/// Readiness probes pass `None`: liveness must not depend on valid credentials.
pub(crate) fn apply_basic_auth(
    builder: RequestBuilder,
    credential: Option<&Credential>,
) -> RequestBuilder {
    match credential {
        Some(c) => builder.basic_auth(&c.username, Some(c.secret.expose_secret())),
        None => builder,
    }
}
