//! Transport-level failures.

use std::fmt;

use crate::traits::HttpError;

/// The request never produced an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { url: String, message: String },

    /// The request URL could not be built or parsed.
    InvalidUrl { url: String },

    /// Response body could not be read to completion.
    Interrupted { url: String, message: String },

    /// Anything else reported by the transport.
    Other { message: String },
}

impl NetworkError {
    /// Classify a transport error raised while requesting `url`.
    pub fn from_http(url: &str, err: HttpError) -> Self {
        let url = url.to_string();
        match err {
            HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed { url, message },
            HttpError::Timeout(message) => NetworkError::Timeout { url, message },
            HttpError::InvalidUrl(_) => NetworkError::InvalidUrl { url },
            HttpError::Body(message) => NetworkError::Interrupted { url, message },
            HttpError::Other(message) => NetworkError::Other { message },
        }
    }

    /// Whether trying again later might succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, NetworkError::InvalidUrl { .. })
    }

    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to connect to the server. Please check your internet connection."
                    .to_string()
            }
            NetworkError::Timeout { .. } => {
                "The request timed out. The server may be slow or unreachable.".to_string()
            }
            NetworkError::InvalidUrl { url } => {
                format!("The request URL '{}' is invalid.", url)
            }
            NetworkError::Interrupted { .. } => {
                "The connection was interrupted while loading data.".to_string()
            }
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::Interrupted { .. } => "E_NET_BODY",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { url, message } => {
                write!(f, "Request to '{}' timed out: {}", url, message)
            }
            NetworkError::InvalidUrl { url } => write!(f, "Invalid URL '{}'", url),
            NetworkError::Interrupted { url, message } => {
                write!(f, "Reading response from '{}' failed: {}", url, message)
            }
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_http_classification() {
        let url = "https://dummyjson.com/users";
        assert!(matches!(
            NetworkError::from_http(url, HttpError::ConnectionFailed("refused".into())),
            NetworkError::ConnectionFailed { .. }
        ));
        assert!(matches!(
            NetworkError::from_http(url, HttpError::Timeout("30s".into())),
            NetworkError::Timeout { .. }
        ));
        assert_eq!(
            NetworkError::from_http(url, HttpError::InvalidUrl("bad".into())),
            NetworkError::InvalidUrl { url: url.to_string() }
        );
    }

    #[test]
    fn test_retryable() {
        assert!(NetworkError::Timeout {
            url: "u".into(),
            message: "m".into()
        }
        .is_retryable());
        assert!(!NetworkError::InvalidUrl { url: "u".into() }.is_retryable());
    }

    #[test]
    fn test_error_codes_unique() {
        let errors = [
            NetworkError::ConnectionFailed { url: "u".into(), message: "m".into() },
            NetworkError::Timeout { url: "u".into(), message: "m".into() },
            NetworkError::InvalidUrl { url: "u".into() },
            NetworkError::Interrupted { url: "u".into(), message: "m".into() },
            NetworkError::Other { message: "m".into() },
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.error_code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}
