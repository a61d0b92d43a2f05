//! Bounds and URL validation tests.

use std::time::Duration;

use serial_test::serial;

use super::{env_lock, with_clean_env};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

#[test]
#[serial]
fn test_zero_port_rejected() {
    let _lock = env_lock().lock().unwrap();

    with_clean_env(&[], || {
        let err = ConfigLoader::new().with_port(0).build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    });
}

#[test]
#[serial]
fn test_ready_timeout_bounds() {
    let _lock = env_lock().lock().unwrap();

    with_clean_env(&[], || {
        let err = ConfigLoader::new()
            .with_ready_timeout(Duration::ZERO)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidReadyTimeout { .. }));

        let err = ConfigLoader::new()
            .with_ready_timeout(Duration::from_secs(3601))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidReadyTimeout { .. }));

        assert!(
            ConfigLoader::new()
                .with_ready_timeout(Duration::from_secs(3600))
                .build()
                .is_ok()
        );
    });
}

#[test]
#[serial]
fn test_startup_grace_bounds() {
    let _lock = env_lock().lock().unwrap();

    with_clean_env(&[], || {
        assert!(
            ConfigLoader::new()
                .with_startup_grace(Duration::ZERO)
                .build()
                .is_ok()
        );

        let err = ConfigLoader::new()
            .with_startup_grace(Duration::from_secs(601))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStartupGrace { .. }));
    });
}

#[test]
#[serial]
fn test_request_timeout_bounds() {
    let _lock = env_lock().lock().unwrap();

    with_clean_env(&[], || {
        let err = ConfigLoader::new()
            .with_request_timeout(Duration::ZERO)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRequestTimeout { .. }));
    });
}

#[test]
#[serial]
fn test_data_source_url_must_be_http() {
    let _lock = env_lock().lock().unwrap();

    with_clean_env(&[("LOKI_URL", "ftp://loki:3100")], || {
        let err = ConfigLoader::new().from_env().unwrap().build().unwrap_err();
        match err {
            ConfigError::InvalidDataSourceUrl { name, message } => {
                assert_eq!(name, "Loki");
                assert!(message.contains("http or https"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    });
}

#[test]
#[serial]
fn test_data_source_url_must_parse() {
    let _lock = env_lock().lock().unwrap();

    with_clean_env(&[], || {
        let err = ConfigLoader::new()
            .with_prometheus_url("prometheus:9090/metrics".to_string())
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDataSourceUrl { ref name, .. } if name == "Prometheus"
        ));
    });
}

#[test]
#[serial]
fn test_host_with_space_rejected() {
    let _lock = env_lock().lock().unwrap();

    with_clean_env(&[], || {
        let err = ConfigLoader::new()
            .with_host("bad host".to_string())
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
    });
}
