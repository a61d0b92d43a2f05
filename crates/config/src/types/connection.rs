//! Connection types for the dashboard server.
//!
//! Responsibilities:
//! - Define the dashboard [`Endpoint`] (scheme, host, port) and render its base URL.
//! - Define the admin [`Credential`] used for HTTP basic authentication.
//!
//! Does NOT handle:
//! - Reading values from the environment (see `loader` module).
//! - Building HTTP clients or attaching headers (see client crate).
//!
//! Invariants:
//! - Both types are immutable once resolved; there are no setters.
//! - The credential secret is a `SecretString` and never appears in `Debug` output.

use secrecy::SecretString;
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USER, DEFAULT_GRAFANA_HOST, DEFAULT_GRAFANA_PORT,
};

/// URL scheme used to reach the dashboard server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    #[default]
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            other => Err(format!("unsupported scheme '{other}' (expected http or https)")),
        }
    }
}

/// Network location of the dashboard server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub scheme: Scheme,
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(scheme: Scheme, host: impl Into<String>, port: u16) -> Self {
        Self {
            scheme,
            host: host.into(),
            port,
        }
    }

    /// Base URL without a trailing slash, e.g. `http://grafana:3000`.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(Scheme::Http, DEFAULT_GRAFANA_HOST, DEFAULT_GRAFANA_PORT)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base_url())
    }
}

/// Basic-auth credential for the dashboard management API.
#[derive(Debug, Clone)]
pub struct Credential {
    pub username: String,
    pub secret: SecretString,
}

impl Credential {
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: SecretString::new(secret.into().into()),
        }
    }

    /// Returns `true` when this is the stock `admin`/`admin` login.
    pub fn is_default(&self) -> bool {
        use secrecy::ExposeSecret;

        self.username == DEFAULT_ADMIN_USER && self.secret.expose_secret() == DEFAULT_ADMIN_PASSWORD
    }
}

impl Default for Credential {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_USER, DEFAULT_ADMIN_PASSWORD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_base_url() {
        assert_eq!(Endpoint::default().base_url(), "http://grafana:3000");
    }

    #[test]
    fn test_https_endpoint_base_url() {
        let endpoint = Endpoint::new(Scheme::Https, "dash.example.com", 8443);
        assert_eq!(endpoint.base_url(), "https://dash.example.com:8443");
        assert_eq!(endpoint.to_string(), "https://dash.example.com:8443");
    }

    #[test]
    fn test_scheme_from_str_is_case_insensitive() {
        assert_eq!("HTTPS".parse::<Scheme>().unwrap(), Scheme::Https);
        assert_eq!("http".parse::<Scheme>().unwrap(), Scheme::Http);
        assert!("ftp".parse::<Scheme>().is_err());
    }

    #[test]
    fn test_credential_debug_does_not_expose_secret() {
        let credential = Credential::new("admin", "super-secret-password");
        let debug = format!("{:?}", credential);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("super-secret-password"));
    }

    #[test]
    fn test_default_credential_detection() {
        assert!(Credential::default().is_default());
        assert!(!Credential::new("admin", "hunter2").is_default());
    }
}
