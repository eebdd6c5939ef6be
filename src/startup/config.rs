//! Session configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::api::DEFAULT_BASE_URL;
use crate::app::{Route, ThemeMode};
use crate::cli::CliOptions;
use crate::models::Resource;
use crate::view_model::DEFAULT_SEARCH_DEBOUNCE_MS;

pub const DEFAULT_LOG_FILTER: &str = "listdeck=info";

/// Configuration for one session.
///
/// ```ignore
/// use listdeck::startup::AppConfig;
///
/// let config = AppConfig::from_env()
///     .with_theme(ThemeMode::Dark)
///     .with_search_debounce_ms(250);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// API base URL (default: https://dummyjson.com)
    pub base_url: String,
    /// Search quiet interval in milliseconds (default: 500)
    pub search_debounce_ms: u64,
    pub users_page_size: usize,
    pub products_page_size: usize,
    pub initial_route: Route,
    pub theme: ThemeMode,
    pub sidebar_open: bool,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    /// Log file; `None` uses [`super::default_log_path`]
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            users_page_size: Resource::Users.default_page_size(),
            products_page_size: Resource::Products.default_page_size(),
            initial_route: Route::Users,
            theme: ThemeMode::Light,
            sidebar_open: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_search_debounce_ms(mut self, ms: u64) -> Self {
        self.search_debounce_ms = ms;
        self
    }

    pub fn with_users_page_size(mut self, size: usize) -> Self {
        self.users_page_size = size;
        self
    }

    pub fn with_products_page_size(mut self, size: usize) -> Self {
        self.products_page_size = size;
        self
    }

    pub fn with_initial_route(mut self, route: Route) -> Self {
        self.initial_route = route;
        self
    }

    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_sidebar_open(mut self, open: bool) -> Self {
        self.sidebar_open = open;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Defaults overridden by `LISTDECK_*` environment variables.
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = env_non_empty("LISTDECK_BASE_URL") {
            config.base_url = url;
        }
        if let Some(ms) = env_non_empty("LISTDECK_DEBOUNCE_MS").and_then(|v| v.parse().ok()) {
            config.search_debounce_ms = ms;
        }
        if let Some(filter) = env_non_empty("LISTDECK_LOG") {
            config.log_filter = filter;
        }
        if let Some(path) = env_non_empty("LISTDECK_LOG_FILE") {
            config.log_file = Some(PathBuf::from(path));
        }

        config
    }

    /// Command-line flags take precedence over the environment.
    pub fn apply_cli(mut self, options: &CliOptions) -> Self {
        if options.products {
            self.initial_route = Route::Products;
        }
        if options.dark {
            self.theme = ThemeMode::Dark;
        }
        if let Some(url) = &options.base_url {
            self.base_url = url.clone();
        }
        self
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
