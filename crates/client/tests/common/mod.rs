//! Common test utilities for integration tests.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

use std::time::Duration;

#[allow(unused_imports)]
pub use grafana_client::{ClientError, GrafanaClient, Reconciled};
#[allow(unused_imports)]
pub use grafana_config::{
    Credential, DataSourceSpec, DataSourceType, ReadinessConfig, ServiceAccountRole,
    ServiceAccountSpec,
};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// `Authorization` header value for `admin:admin`.
#[allow(dead_code)]
pub const ADMIN_BASIC_AUTH: &str = "Basic YWRtaW46YWRtaW4=";

/// Client pointed at `server` with admin credentials.
#[allow(dead_code)]
pub fn admin_client(server: &MockServer, connectivity_check: bool) -> GrafanaClient {
    GrafanaClient::builder()
        .base_url(server.uri())
        .credential(Credential::new("admin", "admin"))
        .timeout(Duration::from_secs(5))
        .connectivity_check(connectivity_check)
        .build()
        .expect("client should build")
}

/// Client pointed at an arbitrary base URL.
#[allow(dead_code)]
pub fn client_for_url(base_url: String) -> GrafanaClient {
    GrafanaClient::builder()
        .base_url(base_url)
        .credential(Credential::new("admin", "admin"))
        .build()
        .expect("client should build")
}

/// Readiness settings with a short deadline and fast polling.
#[allow(dead_code)]
pub fn fast_readiness(timeout: Duration) -> ReadinessConfig {
    ReadinessConfig {
        timeout,
        poll_interval: Duration::from_millis(100),
        probe_timeout: Duration::from_secs(5),
    }
}

/// A local port with nothing listening on it.
#[allow(dead_code)]
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    listener.local_addr().expect("local addr").port()
}

#[allow(dead_code)]
pub fn prometheus_spec() -> DataSourceSpec {
    DataSourceSpec::new(
        "Prometheus",
        DataSourceType::Prometheus,
        "http://prometheus:9090",
    )
}

#[allow(dead_code)]
pub fn reader_spec() -> ServiceAccountSpec {
    ServiceAccountSpec {
        name: "reader".to_string(),
        display_name: "Reader".to_string(),
        role: ServiceAccountRole::Viewer,
    }
}
