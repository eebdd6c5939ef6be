//! View-model for paged, sortable, searchable remote lists.
//!
//! [`RemoteList`] owns a view's [`QueryState`](crate::models::QueryState) and
//! the last [`PageResult`](crate::models::PageResult). It never performs I/O:
//! state-changing operations leave a fetch *pending*, the caller drains it
//! with [`RemoteList::take_fetch`], runs the returned [`FetchTicket`] and
//! hands the outcome back through [`RemoteList::apply`]. Each ticket carries
//! a sequence number; outcomes for anything but the most recently issued
//! ticket are discarded.
//!
//! ```ignore
//! let mut users = RemoteList::new(Resource::Users, ListMode::Replace, 5);
//! if let Some(ticket) = users.take_fetch() {
//!     let outcome = client.fetch_page(&ticket.request).await;
//!     users.apply(ticket.seq, outcome);
//! }
//! ```

mod debounce;
mod remote_list;
mod state;

pub use debounce::{SearchDebounce, DEFAULT_SEARCH_DEBOUNCE_MS};
pub use remote_list::RemoteList;
pub use state::{ApplyOutcome, FetchKind, FetchState, FetchTicket, ListMode};
