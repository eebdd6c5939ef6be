//! HTTP transport abstraction.
//!
//! The collection client only ever issues GET requests, so the trait is
//! deliberately narrow. Production code uses
//! [`crate::adapters::ReqwestHttpClient`]; tests use
//! [`crate::adapters::mock::MockHttpClient`] or a wiremock server.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;

/// Request/response headers as a flat map.
pub type Headers = HashMap<String, String>;

/// A fully buffered HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Headers,
    /// Response body
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: Bytes) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body,
        }
    }

    pub fn with_headers(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Build a 200 response carrying `value` serialized as JSON.
    pub fn json_ok(value: &serde_json::Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        Self::with_headers(200, headers, Bytes::from(value.to_string()))
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parse the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level failures. A non-2xx status is *not* an `HttpError`;
/// it arrives as a [`Response`] and is classified by the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Request timeout: {0}")]
    Timeout(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Failed to read response body: {0}")]
    Body(String),
    #[error("HTTP error: {0}")]
    Other(String),
}

/// GET-only HTTP client.
///
/// ```ignore
/// use listdeck::traits::{Headers, HttpClient};
///
/// async fn ping<C: HttpClient>(client: &C) -> bool {
///     client
///         .get("https://dummyjson.com/users?limit=1", &Headers::new())
///         .await
///         .map(|r| r.is_success())
///         .unwrap_or(false)
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request and buffer the whole body.
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_is_success() {
        assert!(Response::new(200, Bytes::new()).is_success());
        assert!(Response::new(204, Bytes::new()).is_success());
        assert!(!Response::new(301, Bytes::new()).is_success());
        assert!(!Response::new(404, Bytes::new()).is_success());
        assert!(!Response::new(503, Bytes::new()).is_success());
    }

    #[test]
    fn test_response_json_ok_sets_content_type() {
        let response = Response::json_ok(&serde_json::json!({"total": 3}));
        assert_eq!(response.status, 200);
        assert_eq!(
            response.headers.get("content-type"),
            Some(&"application/json".to_string())
        );
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["total"], 3);
    }

    #[test]
    fn test_response_text_lossy() {
        let response = Response::new(500, Bytes::from_static(b"boom\xff"));
        assert!(response.text_lossy().starts_with("boom"));
    }

    #[test]
    fn test_http_error_display() {
        assert_eq!(
            HttpError::ConnectionFailed("refused".to_string()).to_string(),
            "Connection failed: refused"
        );
        assert_eq!(
            HttpError::Timeout("30s".to_string()).to_string(),
            "Request timeout: 30s"
        );
        assert_eq!(
            HttpError::InvalidUrl("nope".to_string()).to_string(),
            "Invalid URL: nope"
        );
    }
}
