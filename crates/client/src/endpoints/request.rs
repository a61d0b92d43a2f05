//! Request execution that captures status and body for every response.
//!
//! Callers branch on the status code (2xx, 409, anything else), so a
//! non-2xx response is returned as data, never converted into an error here.
//! Only transport failures (no HTTP response at all) surface as `Err`.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};

/// A completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub url: String,
    pub body: String,
}

impl ApiResponse {
    /// 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON, mapping failures to `MalformedResponse`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            ClientError::MalformedResponse(format!("{} (status {}): {}", self.url, self.status, e))
        })
    }

    /// Convert an unexpected status into `ApiRequestFailed`, keeping the body as detail.
    pub fn into_error(self) -> ClientError {
        ClientError::ApiRequestFailed {
            status: self.status,
            url: self.url,
            body: self.body,
        }
    }
}

/// Send a request once and capture its status and body.
///
/// No retry is attempted; retry policy belongs to the caller.
///
/// # Errors
///
/// Returns `ClientError::Http` when no response was received
/// (connection refused, DNS failure, timeout).
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
) -> Result<ApiResponse> {
    let started = std::time::Instant::now();

    let response = builder.send().await.map_err(|e| {
        debug!(endpoint, method, error = %e, "Request failed before a response was received");
        ClientError::from(e)
    })?;

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read response body".to_string());

    debug!(
        endpoint,
        method,
        status,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Request completed"
    );

    Ok(ApiResponse { status, url, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            url: "http://grafana:3000/api/test".to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_is_success_covers_2xx_only() {
        assert!(response(200, "").is_success());
        assert!(response(201, "").is_success());
        assert!(response(204, "").is_success());
        assert!(!response(199, "").is_success());
        assert!(!response(300, "").is_success());
        assert!(!response(409, "").is_success());
    }

    #[test]
    fn test_json_failure_is_malformed_response() {
        #[derive(Debug, Deserialize)]
        struct Id {
            #[allow(dead_code)]
            id: u64,
        }

        let err = response(200, "<html>oops</html>").json::<Id>().unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));

        let err = response(200, "{\"name\":\"x\"}").json::<Id>().unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[test]
    fn test_into_error_keeps_body() {
        let err = response(500, "database is locked").into_error();
        match err {
            ClientError::ApiRequestFailed { status, body, .. } => {
                assert_eq!(status, 500);
                assert_eq!(body, "database is locked");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
