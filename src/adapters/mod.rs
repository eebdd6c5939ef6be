//! Concrete implementations of the traits in `crate::traits`.
//!
//! - [`ReqwestHttpClient`] - production HTTP client
//! - [`mock::MockHttpClient`] - scripted test double

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, MockResponse, RecordedRequest, ResponseGate};
pub use reqwest_http::ReqwestHttpClient;
