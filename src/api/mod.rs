//! Client for the demo API's collection endpoints.
//!
//! - [`PageRequest`] - one GET's worth of pagination, sort and search
//! - [`PageResponse`] - a decoded page
//! - [`CollectionClient`] - builds URLs and performs the request

mod client;
mod request;
mod response;

pub use client::{CollectionClient, DEFAULT_BASE_URL};
pub use request::PageRequest;
pub use response::PageResponse;
