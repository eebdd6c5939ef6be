//! Trait seams for dependency injection.
//!
//! - [`HttpClient`] - the transport used by [`crate::api::CollectionClient`]

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
