//! AppMessage enum for async communication within the application.

use crate::api::PageResponse;
use crate::error::ListResult;

use super::Route;

/// Messages sent back to the event loop by spawned fetch tasks
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A page request finished. `seq` is the ticket it answers.
    PageLoaded {
        route: Route,
        seq: u64,
        result: ListResult<PageResponse>,
    },
}
