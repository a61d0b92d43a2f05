//! Data source reconciliation tests.
//!
//! # Invariants
//! - An existing name is never re-created
//! - Creation failures carry the server body
//! - A failed connectivity check does not fail the reconciliation

mod common;

use common::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};

#[tokio::test]
async fn test_creates_missing_data_source() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/datasources/name/Prometheus"))
        .and(header("authorization", ADMIN_BASIC_AUTH))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Data source not found"})))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/datasources"))
        .and(header("authorization", ADMIN_BASIC_AUTH))
        .and(body_json(json!({
            "name": "Prometheus",
            "type": "prometheus",
            "access": "proxy",
            "url": "http://prometheus:9090",
            "basicAuth": false,
            "isDefault": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "message": "Datasource added",
            "name": "Prometheus"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = admin_client(&mock_server, false);
    let outcome = client.ensure_data_source(&prometheus_spec()).await.unwrap();

    assert_eq!(outcome, Reconciled::Created);
}

#[tokio::test]
async fn test_existing_data_source_is_not_recreated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/datasources/name/Prometheus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "name": "Prometheus",
            "type": "prometheus",
            "url": "http://prometheus:9090"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/datasources"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = admin_client(&mock_server, true);
    let outcome = client.ensure_data_source(&prometheus_spec()).await.unwrap();

    assert_eq!(outcome, Reconciled::AlreadyExists);
}

#[tokio::test]
async fn test_second_run_reports_already_exists() {
    let mock_server = MockServer::start().await;

    // First lookup misses, later lookups hit.
    Mock::given(method("GET"))
        .and(path("/api/datasources/name/Prometheus"))
        .respond_with(ResponseTemplate::new(404))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/datasources/name/Prometheus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "Prometheus"})))
        .with_priority(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/datasources"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = admin_client(&mock_server, false);
    let spec = prometheus_spec();

    assert_eq!(client.ensure_data_source(&spec).await.unwrap(), Reconciled::Created);
    assert_eq!(
        client.ensure_data_source(&spec).await.unwrap(),
        Reconciled::AlreadyExists
    );
}

#[tokio::test]
async fn test_success_without_name_counts_as_missing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/datasources/name/Prometheus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": ""})))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/datasources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 2})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = admin_client(&mock_server, false);
    assert_eq!(
        client.ensure_data_source(&prometheus_spec()).await.unwrap(),
        Reconciled::Created
    );
}

#[tokio::test]
async fn test_creation_failure_carries_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/datasources/name/Prometheus"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/datasources"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"message":"invalid url"}"#))
        .mount(&mock_server)
        .await;

    let client = admin_client(&mock_server, false);
    let err = client.ensure_data_source(&prometheus_spec()).await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert!(err.detail().contains("invalid url"));
}

#[tokio::test]
async fn test_health_failure_still_created() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/datasources/name/Prometheus"))
        .respond_with(ResponseTemplate::new(404))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/datasources/name/Prometheus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 4, "name": "Prometheus"})))
        .with_priority(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/datasources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 4})))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/datasources/4/health"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": "ERROR",
            "message": "Post \"http://prometheus:9090/api/v1/query\": dial tcp: lookup prometheus: no such host"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = admin_client(&mock_server, true);
    let outcome = client.ensure_data_source(&prometheus_spec()).await.unwrap();

    assert_eq!(outcome, Reconciled::Created);
}

#[tokio::test]
async fn test_check_health_reports_server_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/datasources/name/Loki"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9, "name": "Loki"})))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/datasources/9/health"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": "ERROR",
            "message": "connection refused"
        })))
        .mount(&mock_server)
        .await;

    let client = admin_client(&mock_server, true);
    let err = client.check_data_source_health("Loki").await.unwrap_err();

    match err {
        ClientError::ConnectivityCheckFailed { name, detail } => {
            assert_eq!(name, "Loki");
            assert_eq!(detail, "connection refused");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_name_is_percent_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/datasources/name/My%20Metrics%2FProd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3, "name": "My Metrics/Prod"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = admin_client(&mock_server, false);
    let spec = DataSourceSpec::new(
        "My Metrics/Prod",
        DataSourceType::Prometheus,
        "http://prometheus:9090",
    );

    assert_eq!(
        client.ensure_data_source(&spec).await.unwrap(),
        Reconciled::AlreadyExists
    );
}

#[tokio::test]
async fn test_lookup_transport_error_propagates() {
    let client = client_for_url(format!("http://127.0.0.1:{}", closed_port()));
    let err = client.ensure_data_source(&prometheus_spec()).await.unwrap_err();

    assert!(err.is_transport());
}
