//! The error surfaced by a single fetch cycle.

use super::api::ApiError;
use super::network::NetworkError;

/// Result alias for collection fetches.
pub type ListResult<T> = Result<T, ListError>;

/// Either kind of fetch failure. Failures are local to one fetch cycle; the
/// view-model stays usable afterward.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("{0}")]
    Network(#[from] NetworkError),
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl ListError {
    pub fn is_retryable(&self) -> bool {
        match self {
            ListError::Network(err) => err.is_retryable(),
            ListError::Api(err) => err.is_retryable(),
        }
    }

    /// Message shown next to the stale data.
    pub fn user_message(&self) -> String {
        match self {
            ListError::Network(err) => err.user_message(),
            ListError::Api(err) => err.user_message(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ListError::Network(err) => err.error_code(),
            ListError::Api(err) => err.error_code(),
        }
    }
}
