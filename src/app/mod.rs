//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Route`] - Which list view is displayed
//! - [`ThemeMode`] - Light or dark palette
//! - [`Focus`] - Which UI component has focus
//! - [`AppMessage`] - Messages for async communication

mod handlers;
mod messages;
pub mod pager;
mod types;

pub use messages::AppMessage;
pub use types::{Focus, Route, ThemeMode};

use std::collections::HashSet;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::debug;

use crate::api::CollectionClient;
use crate::startup::AppConfig;
use crate::view_model::{FetchTicket, ListMode, RemoteList};

/// Event loop tick; drives the spinner and the search debounce.
pub const TICK: Duration = Duration::from_millis(16);

/// Tick timer for the event loop. Build it once, outside the loop, so it
/// keeps its cadence however many terminal events arrive between ticks.
pub fn tick_interval() -> Interval {
    let mut ticker = tokio::time::interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Product grid geometry from the last render, in card rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridViewport {
    pub columns: usize,
    pub visible_rows: usize,
}

/// Main application state
pub struct App {
    pub config: AppConfig,
    /// Current view
    pub route: Route,
    pub theme: ThemeMode,
    pub sidebar_open: bool,
    pub focus: Focus,
    /// Paged user table
    pub users: RemoteList,
    /// Infinite-scroll product grid
    pub products: RemoteList,
    /// First visible card row in the product grid
    pub product_scroll: usize,
    /// Set by the renderer
    pub product_viewport: GridViewport,
    /// Routes shown at least once; only these fetch
    visited: HashSet<Route>,
    client: CollectionClient,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    pub should_quit: bool,
    /// Dirty flag; the loop draws only when set
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let client = CollectionClient::with_base_url(config.base_url.clone());
        Self::with_client(config, client)
    }

    /// App over an injected client (tests point this at a mock server).
    pub fn with_client(config: AppConfig, client: CollectionClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let debounce = config.search_debounce();

        let users = RemoteList::new(
            Route::Users.resource(),
            ListMode::Replace,
            config.users_page_size,
        )
        .with_debounce(debounce);
        let products = RemoteList::new(
            Route::Products.resource(),
            ListMode::Append,
            config.products_page_size,
        )
        .with_debounce(debounce);

        let route = config.initial_route;
        Self {
            route,
            theme: config.theme,
            sidebar_open: config.sidebar_open,
            focus: Focus::List,
            users,
            products,
            product_scroll: 0,
            product_viewport: GridViewport::default(),
            visited: HashSet::from([route]),
            client,
            message_rx: Some(message_rx),
            message_tx,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            config,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn list(&self, route: Route) -> &RemoteList {
        match route {
            Route::Users => &self.users,
            Route::Products => &self.products,
        }
    }

    pub fn list_mut(&mut self, route: Route) -> &mut RemoteList {
        match route {
            Route::Users => &mut self.users,
            Route::Products => &mut self.products,
        }
    }

    pub fn has_visited(&self, route: Route) -> bool {
        self.visited.contains(&route)
    }

    // ------------------------------------------------------------------
    // Navigation and chrome
    // ------------------------------------------------------------------

    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        debug!(from = self.route.path(), to = route.path(), "navigate");
        self.route = route;
        self.focus = Focus::List;
        self.visited.insert(route);
        self.mark_dirty();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.mark_dirty();
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        self.mark_dirty();
    }

    // ------------------------------------------------------------------
    // Fetch dispatch
    // ------------------------------------------------------------------

    /// Advance animations and issue any due fetches.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_busy() {
            self.mark_dirty();
        }
        self.dispatch_fetches_at(Instant::now());
    }

    /// Issue pending fetches for every visited route as of `now`.
    /// Returns the number of requests spawned.
    pub fn dispatch_fetches_at(&mut self, now: Instant) -> usize {
        if self.route == Route::Products {
            self.load_more_if_at_bottom();
        }

        let mut spawned = 0;
        for route in Route::ALL {
            if !self.visited.contains(&route) {
                continue;
            }
            if let Some(ticket) = self.list_mut(route).take_fetch_at(now) {
                self.spawn_fetch(route, ticket);
                spawned += 1;
            }
        }
        if spawned > 0 {
            self.mark_dirty();
        }
        spawned
    }

    /// Run `ticket` on the runtime and post the outcome back.
    fn spawn_fetch(&self, route: Route, ticket: FetchTicket) {
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_page(&ticket.request).await;
            // Receiver gone means the app is shutting down.
            let _ = tx.send(AppMessage::PageLoaded {
                route,
                seq: ticket.seq,
                result,
            });
        });
    }

    fn is_busy(&self) -> bool {
        self.users.is_fetching() || self.products.is_fetching()
    }

    // ------------------------------------------------------------------
    // Product grid scrolling
    // ------------------------------------------------------------------

    pub fn product_rows(&self) -> usize {
        match self.product_viewport.columns {
            0 => 0,
            columns => self.products.items().len().div_ceil(columns),
        }
    }

    fn max_product_scroll(&self) -> usize {
        self.product_rows()
            .saturating_sub(self.product_viewport.visible_rows)
    }

    /// The last card row is on screen (the grid's load-more sentinel).
    pub fn products_at_bottom(&self) -> bool {
        self.product_viewport.columns > 0
            && self.product_viewport.visible_rows > 0
            && self.product_scroll + self.product_viewport.visible_rows >= self.product_rows()
    }

    pub fn scroll_products(&mut self, delta: isize) {
        let target = self.product_scroll.saturating_add_signed(delta);
        let clamped = target.min(self.max_product_scroll());
        if clamped != self.product_scroll {
            self.product_scroll = clamped;
            self.mark_dirty();
        }
        self.load_more_if_at_bottom();
    }

    pub fn load_more_products(&mut self) -> bool {
        let scheduled = self.products.load_more();
        if scheduled {
            debug!(loaded = self.products.items().len(), "load more products");
            self.mark_dirty();
        }
        scheduled
    }

    fn load_more_if_at_bottom(&mut self) {
        if self.products_at_bottom() && self.products.error().is_none() {
            self.load_more_products();
        }
    }
}
