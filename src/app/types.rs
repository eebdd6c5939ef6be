//! Type definitions for the session state.
//!
//! - [`Route`] - which list view is shown
//! - [`ThemeMode`] - light or dark palette
//! - [`Focus`] - whether keys go to navigation or the search box

use crate::models::Resource;

/// A navigable view, addressed by path like the web routes it mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Users,
    Products,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Users, Route::Products];

    pub fn path(self) -> &'static str {
        match self {
            Route::Users => "/",
            Route::Products => "/products",
        }
    }

    /// Unknown paths fall back to the user list.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/products" | "products" => Route::Products,
            _ => Route::Users,
        }
    }

    /// Sidebar menu label.
    pub fn label(self) -> &'static str {
        match self {
            Route::Users => "User List",
            Route::Products => "Product List",
        }
    }

    /// Glyph shown when the sidebar is collapsed.
    pub fn icon(self) -> &'static str {
        match self {
            Route::Users => "☺",
            Route::Products => "▦",
        }
    }

    pub fn resource(self) -> Resource {
        match self {
            Route::Users => Resource::Users,
            Route::Products => Resource::Products,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Route::Users => Route::Products,
            Route::Products => Route::Users,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Which UI component receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Search,
}
