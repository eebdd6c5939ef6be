//! HTTP client for collection pages.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::adapters::ReqwestHttpClient;
use crate::error::{ApiError, ListResult, NetworkError};
use crate::traits::{Headers, HttpClient};

use super::request::PageRequest;
use super::response::PageResponse;

pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Longest error body carried into an [`ApiError`].
const MAX_ERROR_BODY: usize = 200;

/// Fetches pages of a collection. Cheap to clone; the transport is shared.
#[derive(Clone)]
pub struct CollectionClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl CollectionClient {
    /// Client for [`DEFAULT_BASE_URL`] over reqwest.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_http(base_url, Arc::new(ReqwestHttpClient::new()))
    }

    /// Client over an injected transport.
    pub fn with_http(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for `request`.
    pub fn build_url(&self, request: &PageRequest) -> String {
        format!(
            "{}/{}?{}",
            self.base_url,
            request.endpoint(),
            request.query_string()
        )
    }

    /// Issue one GET for `request` and decode the page.
    pub async fn fetch_page(&self, request: &PageRequest) -> ListResult<PageResponse> {
        let url = self.build_url(request);
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        debug!(url = %url, "fetching page");

        let response = self
            .http
            .get(&url, &headers)
            .await
            .map_err(|err| NetworkError::from_http(&url, err))?;

        if !response.is_success() {
            let mut message = response.text_lossy();
            if message.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY)
                    .rev()
                    .find(|i| message.is_char_boundary(*i))
                    .unwrap_or(0);
                message.truncate(cut);
            }
            warn!(url = %url, status = response.status, "page request rejected");
            return Err(ApiError::HttpStatus {
                status: response.status,
                message,
            }
            .into());
        }

        let page = PageResponse::decode(request.resource, &response.body, request.skip, request.limit)?;
        debug!(
            url = %url,
            items = page.items.len(),
            total = page.total,
            "page received"
        );
        Ok(page)
    }
}

impl Default for CollectionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CollectionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
