//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.

use std::sync::Mutex;

pub mod validation_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable `from_env()` reads, for clearing host leakage.
pub const GRAFANA_ENV_VARS: [&str; 14] = [
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

/// Run `f` with every provisioning variable unset plus the given overrides.
pub fn with_clean_env<F: FnOnce()>(overrides: &[(&str, &str)], f: F) {
    let mut vars: Vec<(&str, Option<&str>)> =
        GRAFANA_ENV_VARS.iter().map(|k| (*k, None)).collect();
    for (key, value) in overrides {
        vars.retain(|(k, _)| k != key);
        vars.push((*key, Some(*value)));
    }
    temp_env::with_vars(vars, f);
}
