//! Shared test utilities for grafana-provision integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic command factory that prevents dotenv loading.
//! - Mount the mock endpoints most scenarios share.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - The startup grace is zero so tests do not sleep.

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Every variable the binary reads, cleared to avoid host leakage.
const GRAFANA_ENV_VARS: &[&str] = &[
    "GRAFANA_SCHEME",
    "GRAFANA_HOST",
    "GRAFANA_PORT",
    "GRAFANA_ADMIN_USER",
    "GRAFANA_ADMIN_PASSWORD",
    "PROMETHEUS_URL",
    "LOKI_URL",
    "JAEGER_URL",
    "GRAFANA_READY_TIMEOUT",
    "GRAFANA_STARTUP_GRACE",
    "GRAFANA_REQUEST_TIMEOUT",
    "GRAFANA_SERVICE_ACCOUNT",
    "GRAFANA_TOKEN_NAME",
    "GRAFANA_TOKEN_FILE",
];

/// Returns a hermetic `grafana-provision` command.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Every `GRAFANA_*` and data source variable is cleared.
/// - `GRAFANA_STARTUP_GRACE=0`.
pub fn provision_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("grafana-provision");

    cmd.env("DOTENV_DISABLED", "1");
    for var in GRAFANA_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env("GRAFANA_STARTUP_GRACE", "0");
    cmd.env("RUST_LOG", "info");

    cmd
}

/// Hermetic command pointed at `server`, with no token file.
pub fn provision_cmd_for(server: &MockServer) -> Command {
    let mut cmd = provision_cmd();
    cmd.env("GRAFANA_HOST", server.address().ip().to_string())
        .env("GRAFANA_PORT", server.address().port().to_string())
        .env("GRAFANA_READY_TIMEOUT", "5");
    cmd
}

/// A local port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    listener.local_addr().expect("local addr").port()
}

pub async fn mount_health(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"database": "ok"})))
        .mount(server)
        .await;
}

pub async fn mount_existing_data_source(server: &MockServer, name: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/datasources/name/{}", name)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": name})))
        .mount(server)
        .await;
}

pub async fn mount_all_existing(server: &MockServer) {
    for name in ["Prometheus", "Loki", "Jaeger"] {
        mount_existing_data_source(server, name).await;
    }
}

/// Service account 7 is created and token `key` is issued for it.
pub async fn mount_token_flow(server: &MockServer, key: &str) {
    Mock::given(method("POST"))
        .and(path("/api/serviceaccounts"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 7, "name": "observability-assistant"})))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/serviceaccounts/7/tokens"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 1, "name": "observability-assistant-token", "key": key})),
        )
        .mount(server)
        .await;
}
