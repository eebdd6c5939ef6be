//! The remote list state machine.

use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::api::{PageRequest, PageResponse};
use crate::error::ListResult;
use crate::models::query::{clamp_page_size, last_page};
use crate::models::{PageResult, QueryState, Record, Resource, SortDirection};

use super::debounce::SearchDebounce;
use super::state::{ApplyOutcome, FetchKind, FetchState, FetchTicket, ListMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlight {
    seq: u64,
    kind: FetchKind,
}

/// Pagination/sort/search view-model for one remote collection.
///
/// Lifecycle: `Idle -> Fetching -> {Success | Error}`, with `Fetching`
/// re-entered whenever a changed query is issued. All mutation happens on the
/// caller's event loop; the type itself is plain data.
#[derive(Debug, Clone)]
pub struct RemoteList {
    resource: Resource,
    mode: ListMode,
    query: QueryState,
    result: Option<PageResult>,
    state: FetchState,
    /// Sequence number of the most recently issued ticket.
    last_seq: u64,
    in_flight: Option<InFlight>,
    pending: Option<FetchKind>,
    debounce: SearchDebounce,
    /// Text as typed; committed to `query` when the debounce fires.
    search_input: String,
    /// Append mode: offset of the next page.
    next_skip: usize,
    /// Append mode: the last page has been received.
    exhausted: bool,
}

impl RemoteList {
    /// New view-model with its initial fetch pending.
    pub fn new(resource: Resource, mode: ListMode, page_size: usize) -> Self {
        Self {
            resource,
            mode,
            query: QueryState::new(page_size),
            result: None,
            state: FetchState::Idle,
            last_seq: 0,
            in_flight: None,
            pending: Some(FetchKind::Reload),
            debounce: SearchDebounce::default(),
            search_input: String::new(),
            next_skip: 0,
            exhausted: false,
        }
    }

    /// Override the search quiet interval.
    pub fn with_debounce(mut self, quiet: Duration) -> Self {
        self.debounce = SearchDebounce::new(quiet);
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn mode(&self) -> ListMode {
        self.mode
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Last successfully received result, kept across errors.
    pub fn result(&self) -> Option<&PageResult> {
        self.result.as_ref()
    }

    pub fn items(&self) -> &[Record] {
        self.result.as_ref().map_or(&[], |r| r.items.as_slice())
    }

    pub fn total_count(&self) -> usize {
        self.result.as_ref().map_or(0, |r| r.total_count)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// A load-more request is in flight (Append mode footer).
    pub fn is_loading_more(&self) -> bool {
        matches!(
            self.in_flight,
            Some(InFlight {
                kind: FetchKind::LoadMore,
                ..
            })
        )
    }

    /// Either a fetch is queued or the search debounce is armed.
    pub fn needs_fetch(&self) -> bool {
        self.pending.is_some() || self.debounce.is_pending()
    }

    pub fn search_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Search box contents, including text not yet committed to the query.
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn last_seq(&self) -> u64 {
        self.last_seq
    }

    /// Number of pages for the current total; 0 before anything loaded.
    pub fn page_count(&self) -> usize {
        match self.total_count() {
            0 => 0,
            total => last_page(total, self.query.page_size) + 1,
        }
    }

    /// Whether more records exist beyond what is displayed.
    pub fn has_more(&self) -> bool {
        match self.mode {
            ListMode::Append => self.result.is_some() && !self.exhausted,
            ListMode::Replace => self.result.as_ref().is_some_and(|r| {
                self.query.page < last_page(r.total_count, self.query.page_size)
            }),
        }
    }

    // ------------------------------------------------------------------
    // Query mutation
    // ------------------------------------------------------------------

    /// Move to page `page`, clamped to the last page of the known total.
    /// Ignored in Append mode, which has no explicit pager.
    pub fn set_page(&mut self, page: usize) {
        if self.mode == ListMode::Append {
            debug!(resource = self.resource.path(), "set_page ignored in append mode");
            return;
        }
        let page = self.clamp_page(page);
        if page == self.query.page {
            return;
        }
        self.query.page = page;
        self.schedule(FetchKind::Reload);
    }

    /// Change rows per page (clamped to `1..=100`) and return to page 0.
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = clamp_page_size(page_size);
        if page_size == self.query.page_size {
            return;
        }
        self.query.page_size = page_size;
        self.query.page = 0;
        self.schedule(FetchKind::Reload);
    }

    /// Sort by `field`, ascending unless `direction` says otherwise.
    /// `None` clears sorting.
    pub fn set_sort(&mut self, field: Option<String>, direction: Option<SortDirection>) {
        let (field, direction) = match field {
            Some(field) => (Some(field), Some(direction.unwrap_or_default())),
            None => (None, None),
        };
        if field == self.query.sort_field && direction == self.query.sort_direction {
            return;
        }
        self.query.sort_field = field;
        self.query.sort_direction = direction;
        self.schedule(FetchKind::Reload);
    }

    /// Update the search text. It reaches the query, and a fetch, only after
    /// the quiet interval.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.set_search_text_at(text, Instant::now());
    }

    pub fn set_search_text_at(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        if text == self.search_input {
            return;
        }
        self.search_input = text;
        self.debounce.schedule(now);
    }

    /// Request the next page in Append mode. Returns false when nothing was
    /// scheduled: the list is exhausted, a fetch is already queued or in
    /// flight, or the mode is Replace.
    pub fn load_more(&mut self) -> bool {
        if self.mode != ListMode::Append
            || self.exhausted
            || self.result.is_none()
            || self.in_flight.is_some()
            || self.pending.is_some()
        {
            return false;
        }
        self.pending = Some(FetchKind::LoadMore);
        true
    }

    /// Re-issue the current query.
    pub fn refresh(&mut self) {
        self.schedule(FetchKind::Reload);
    }

    /// Drop results and start over from the first page. Any in-flight
    /// response becomes stale.
    pub fn reset(&mut self) {
        self.query.page = 0;
        self.result = None;
        self.state = FetchState::Idle;
        self.in_flight = None;
        self.next_skip = 0;
        self.exhausted = false;
        self.debounce.cancel();
        self.query.search_text = self.search_input.clone();
        self.pending = Some(FetchKind::Reload);
    }

    fn clamp_page(&self, page: usize) -> usize {
        match &self.result {
            Some(result) => page.min(last_page(result.total_count, self.query.page_size)),
            None => page,
        }
    }

    fn schedule(&mut self, kind: FetchKind) {
        self.pending = Some(kind);
    }

    // ------------------------------------------------------------------
    // Fetch cycle
    // ------------------------------------------------------------------

    pub fn take_fetch(&mut self) -> Option<FetchTicket> {
        self.take_fetch_at(Instant::now())
    }

    /// Commit the typed search text once the debounce is due and queue a
    /// reload of page 0. Returns true when a reload was queued; text that
    /// trims to the committed search changes nothing.
    pub fn poll_debounce(&mut self, now: Instant) -> bool {
        if !self.debounce.fire_if_due(now) {
            return false;
        }
        let unchanged = self.search_input.trim() == self.query.search_text.trim();
        self.query.search_text = self.search_input.clone();
        if unchanged {
            debug!(
                resource = self.resource.path(),
                "search debounce elapsed, query unchanged"
            );
            return false;
        }
        debug!(
            resource = self.resource.path(),
            q = %self.query.search_text,
            "search debounce elapsed"
        );
        self.query.page = 0;
        self.pending = Some(FetchKind::Reload);
        true
    }

    /// Issue the pending fetch, if any, as of `now`.
    pub fn take_fetch_at(&mut self, now: Instant) -> Option<FetchTicket> {
        self.poll_debounce(now);
        let kind = self.pending.take()?;

        let base = PageRequest::from_query(self.resource, &self.query);
        let request = match (self.mode, kind) {
            (ListMode::Replace, _) => base,
            (ListMode::Append, FetchKind::Reload) => base.at_skip(0),
            (ListMode::Append, FetchKind::LoadMore) => base.at_skip(self.next_skip),
        };

        self.last_seq += 1;
        let seq = self.last_seq;
        if let Some(superseded) = self.in_flight {
            debug!(
                resource = self.resource.path(),
                superseded = superseded.seq,
                seq,
                "superseding in-flight request"
            );
        }
        self.in_flight = Some(InFlight { seq, kind });
        self.state = FetchState::Fetching;

        debug!(
            resource = self.resource.path(),
            seq,
            ?kind,
            skip = request.skip,
            limit = request.limit,
            "fetch issued"
        );
        Some(FetchTicket { seq, kind, request })
    }

    /// Feed back the outcome of ticket `seq`. Outcomes of superseded tickets
    /// are dropped without touching any state.
    pub fn apply(&mut self, seq: u64, outcome: ListResult<PageResponse>) -> ApplyOutcome {
        let Some(in_flight) = self.in_flight.filter(|f| f.seq == seq) else {
            debug!(
                resource = self.resource.path(),
                seq,
                latest = self.last_seq,
                "discarding stale response"
            );
            return ApplyOutcome::Stale;
        };
        self.in_flight = None;

        match outcome {
            Ok(page) => {
                self.apply_page(in_flight.kind, page);
                self.state = FetchState::Success;
            }
            Err(err) => {
                warn!(
                    resource = self.resource.path(),
                    seq,
                    code = err.error_code(),
                    error = %err,
                    "fetch failed"
                );
                self.state = FetchState::Error(err.user_message());
            }
        }
        ApplyOutcome::Applied
    }

    fn apply_page(&mut self, kind: FetchKind, page: PageResponse) {
        match self.mode {
            ListMode::Replace => {
                let total = page.total;
                self.result = Some(PageResult::new(page.items, total));

                let last = last_page(total, self.query.page_size);
                if self.query.page > last {
                    info!(
                        resource = self.resource.path(),
                        from = self.query.page,
                        to = last,
                        total,
                        "total shrank, clamping page"
                    );
                    self.query.page = last;
                    self.pending = Some(FetchKind::Reload);
                }
            }
            ListMode::Append => {
                self.exhausted = page.is_last();
                self.next_skip = page.next_skip();
                let total = page.total;
                match (kind, self.result.as_mut()) {
                    (FetchKind::LoadMore, Some(result)) => {
                        result.items.extend(page.items);
                        result.total_count = total;
                    }
                    _ => self.result = Some(PageResult::new(page.items, total)),
                }
                if self.exhausted {
                    debug!(
                        resource = self.resource.path(),
                        loaded = self.items().len(),
                        total,
                        "reached end of collection"
                    );
                }
            }
        }
    }
}
