//! Readiness polling for the dashboard server.

use std::time::Duration;

use grafana_config::ReadinessConfig;
use reqwest::Client;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::error::{ClientError, Result};

/// Probes between two `info`-level progress lines.
const PROGRESS_EVERY_ATTEMPTS: u32 = 10;

/// Issue one lightweight `GET /api/health` and return the status code.
///
/// Any HTTP response, including 5xx, proves the server is listening.
/// The body is discarded.
pub async fn probe(client: &Client, base_url: &str, timeout: Duration) -> Result<u16> {
    let url = format!("{}/api/health", base_url);
    let response = client.get(&url).timeout(timeout).send().await?;
    Ok(response.status().as_u16())
}

/// Poll `base_url` until it answers or `options.timeout` elapses.
///
/// Probes run at a fixed `poll_interval`. Both the probe timeout and the
/// sleep are clamped to the remaining budget, so the deadline is a hard
/// ceiling rather than a minimum.
///
/// # Returns
///
/// Elapsed wall-clock time when the first response arrived.
///
/// # Errors
///
/// `ClientError::ReadinessTimeout` once the deadline passes without a response.
pub async fn wait_until_ready(
    client: &Client,
    base_url: &str,
    options: &ReadinessConfig,
) -> Result<Duration> {
    let start = Instant::now();
    let deadline = start + options.timeout;
    let timed_out = || ClientError::ReadinessTimeout {
        url: base_url.to_string(),
        timeout: options.timeout,
    };

    info!(
        url = base_url,
        timeout_secs = options.timeout.as_secs(),
        "Waiting for dashboard server to become ready"
    );

    let mut attempt: u32 = 0;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(timed_out());
        }

        attempt += 1;
        match probe(client, base_url, options.probe_timeout.min(remaining)).await {
            Ok(status) => {
                let elapsed = start.elapsed();
                info!(
                    url = base_url,
                    status,
                    attempt,
                    elapsed_secs = elapsed.as_secs(),
                    "Dashboard server is ready"
                );
                return Ok(elapsed);
            }
            Err(e) => debug!(attempt, error = %e, "Readiness probe failed"),
        }

        if attempt % PROGRESS_EVERY_ATTEMPTS == 0 {
            info!(
                attempt,
                elapsed_secs = start.elapsed().as_secs(),
                "Still waiting for dashboard server"
            );
        }

        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(timed_out());
        }
        tokio::time::sleep(options.poll_interval.min(remaining)).await;
    }
}
