//! Small value types used by [`RemoteList`](super::RemoteList).

use crate::api::PageRequest;

/// How successive successful fetches are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    /// Each fetch replaces the displayed page (explicit pager).
    Replace,
    /// Each page is appended to one growing sequence (infinite scroll).
    Append,
}

/// Lifecycle of the current logical query.
///
/// The displayed [`PageResult`](crate::models::PageResult) is held next to
/// the state rather than inside `Success`, so it survives an `Error`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Fetching,
    Success,
    Error(String),
}

/// Why a fetch was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Fetch the page the query points at (Append: the first page).
    Reload,
    /// Fetch the page after the accumulated sequence (Append only).
    LoadMore,
}

/// A fetch the caller must execute and report back with `seq`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub kind: FetchKind,
    pub request: PageRequest,
}

/// What [`RemoteList::apply`](super::RemoteList::apply) did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// A newer request was issued after this one; the outcome was dropped.
    Stale,
}
