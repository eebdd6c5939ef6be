//! Scripted HTTP client for tests.
//!
//! Responses are resolved in this order: the FIFO queue, an exact URL match,
//! a URL prefix match, then the default. A [`MockResponse::Gated`] response is
//! held until its [`ResponseGate`] is opened, which lets a test decide the
//! order in which concurrent requests complete.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A request seen by the mock.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
}

impl RecordedRequest {
    /// Value of a query parameter, percent-decoded.
    pub fn query_param(&self, name: &str) -> Option<String> {
        let (_, query) = self.url.split_once('?')?;
        query.split('&').find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (key == name).then(|| {
                urlencoding::decode(value)
                    .map(|v| v.into_owned())
                    .unwrap_or_else(|_| value.to_string())
            })
        })
    }

    /// URL without its query string.
    pub fn path(&self) -> &str {
        self.url.split_once('?').map_or(&self.url, |(path, _)| path)
    }
}

/// Opens a held response. Opening before the request arrives is fine; the
/// permit is stored.
#[derive(Debug, Clone, Default)]
pub struct ResponseGate {
    notify: Arc<Notify>,
}

impl ResponseGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self) {
        self.notify.notify_one();
    }

    async fn wait(&self) {
        self.notify.notified().await;
    }
}

#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
    /// Resolve `inner` only after the gate is opened.
    Gated {
        inner: Box<MockResponse>,
        gate: ResponseGate,
    },
}

impl MockResponse {
    /// Shorthand for a 200 JSON response.
    pub fn json(value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_ok(&value))
    }

    pub fn gated(self, gate: &ResponseGate) -> Self {
        MockResponse::Gated {
            inner: Box::new(self),
            gate: gate.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    queue: Arc<Mutex<VecDeque<MockResponse>>>,
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to the next unmatched request with `response`, in FIFO order.
    pub fn push_response(&self, response: MockResponse) {
        self.queue.lock().unwrap().push_back(response);
    }

    /// Respond to `url` (exact or prefix match) with `response`.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
    }

    pub fn set_default_response(&self, response: MockResponse) {
        *self.default_response.lock().unwrap() = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn resolve(&self, url: &str) -> Option<MockResponse> {
        if let Some(queued) = self.queue.lock().unwrap().pop_front() {
            return Some(queued);
        }

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }
        // Longest prefix wins so "/users/search" beats "/users".
        let prefix_match = responses
            .iter()
            .filter(|(pattern, _)| url.starts_with(pattern.as_str()))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, response)| response.clone());
        if prefix_match.is_some() {
            return prefix_match;
        }

        self.default_response.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });

        let mut next = self.resolve(url);
        loop {
            match next {
                Some(MockResponse::Success(response)) => return Ok(response),
                Some(MockResponse::Error(err)) => return Err(err),
                Some(MockResponse::Gated { inner, gate }) => {
                    gate.wait().await;
                    next = Some(*inner);
                }
                None => {
                    return Err(HttpError::Other(format!("No mock response for URL: {}", url)))
                }
            }
        }
    }
}
