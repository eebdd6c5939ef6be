//! Data model shared by the API client, the view-model and the renderers.

pub mod query;
pub mod record;
pub mod resource;

pub use query::{PageResult, QueryState, SortDirection};
pub use record::Record;
pub use resource::{Column, Resource};
