//! Centralized constants for the Grafana provisioning workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Dashboard Endpoint Defaults
// =============================================================================

/// Default URL scheme of the dashboard server.
pub const DEFAULT_GRAFANA_SCHEME: &str = "http";

/// Default dashboard host (the compose service name).
pub const DEFAULT_GRAFANA_HOST: &str = "grafana";

/// Default dashboard HTTP port.
pub const DEFAULT_GRAFANA_PORT: u16 = 3000;

/// Default admin username.
pub const DEFAULT_ADMIN_USER: &str = "admin";

/// Default admin password.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

// =============================================================================
// Data Source Defaults
// =============================================================================

/// Default Prometheus URL as seen from inside the dashboard container.
pub const DEFAULT_PROMETHEUS_URL: &str = "http://prometheus:9090";

/// Default Loki URL as seen from inside the dashboard container.
pub const DEFAULT_LOKI_URL: &str = "http://loki:3100";

/// Default Jaeger query URL as seen from inside the dashboard container.
pub const DEFAULT_JAEGER_URL: &str = "http://jaeger:16686";

// =============================================================================
// Readiness & Timeout Defaults
// =============================================================================

/// Default readiness deadline in seconds.
pub const DEFAULT_READY_TIMEOUT_SECS: u64 = 300;

/// Interval between readiness probes in milliseconds.
pub const DEFAULT_READY_POLL_INTERVAL_MS: u64 = 1000;

/// Per-attempt timeout for a readiness probe in seconds.
pub const DEFAULT_READY_PROBE_TIMEOUT_SECS: u64 = 5;

/// Delay after readiness before the first management API call, in seconds.
pub const DEFAULT_STARTUP_GRACE_SECS: u64 = 5;

/// Default HTTP request timeout for management API calls in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Configuration Bounds
// =============================================================================

/// Maximum allowed readiness deadline in seconds (1 hour).
pub const MAX_READY_TIMEOUT_SECS: u64 = 3600;

/// Maximum allowed startup grace in seconds (10 minutes).
pub const MAX_STARTUP_GRACE_SECS: u64 = 600;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Service Credential Defaults
// =============================================================================

/// Default service account name.
pub const DEFAULT_SERVICE_ACCOUNT_NAME: &str = "observability-assistant";

/// Default service account display name.
pub const DEFAULT_SERVICE_ACCOUNT_DISPLAY_NAME: &str = "Observability Assistant";

/// Default name of the API token issued for the service account.
pub const DEFAULT_TOKEN_NAME: &str = "observability-assistant-token";

/// File name of the token output, placed in the system temp directory.
pub const DEFAULT_TOKEN_FILE_NAME: &str = "grafana-service-account-token";
