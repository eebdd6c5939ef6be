//! Failures reported by (or about) the remote API.

use std::fmt;

/// The server answered, but not with a usable page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx response.
    HttpStatus { status: u16, message: String },

    /// 2xx response whose body does not match the expected page shape.
    InvalidResponse { message: String },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            ApiError::InvalidResponse { .. } => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::HttpStatus { status, .. } => *status >= 500 || *status == 429 || *status == 408,
            ApiError::InvalidResponse { .. } => false,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            ApiError::HttpStatus { status, .. } => match *status {
                400 => "The request was invalid.".to_string(),
                404 => "The requested resource was not found.".to_string(),
                429 => "Too many requests. Please wait a moment and try again.".to_string(),
                500..=599 => {
                    "The server is experiencing issues. Please try again later.".to_string()
                }
                _ => format!("The server returned an error (HTTP {}).", status),
            },
            ApiError::InvalidResponse { .. } => {
                "Received an invalid response from the server.".to_string()
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::HttpStatus { .. } => "E_API_HTTP",
            ApiError::InvalidResponse { .. } => "E_API_INVALID",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            ApiError::InvalidResponse { message } => write!(f, "Invalid response: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidResponse {
            message: err.to_string(),
        }
    }
}
