//! Error types for fetching remote collections.
//!
//! Two kinds of failure can end a fetch cycle:
//!
//! | Kind | Cause |
//! |------|-------|
//! | [`NetworkError`] | transport failure, timeout, bad URL |
//! | [`ApiError`] | non-2xx status, malformed payload |
//!
//! Both are wrapped in [`ListError`], which the view-model reduces to a
//! human-readable message. Neither is retried automatically.

mod api;
mod list_error;
mod network;

pub use api::ApiError;
pub use list_error::{ListError, ListResult};
pub use network::NetworkError;
