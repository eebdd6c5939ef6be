//! Query state owned by a list view and the page results it produces.

use super::record::Record;

/// Largest page size accepted; larger requests are clamped.
pub const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Value of the `order` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

/// Pagination, sort and search intent for one view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub page: usize,
    /// Always in `1..=MAX_PAGE_SIZE`.
    pub page_size: usize,
    pub sort_field: Option<String>,
    pub sort_direction: Option<SortDirection>,
    pub search_text: String,
}

impl QueryState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: clamp_page_size(page_size),
            sort_field: None,
            sort_direction: None,
            search_text: String::new(),
        }
    }

    /// Index of the first record on the current page.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }

    pub fn is_search(&self) -> bool {
        !self.search_text.trim().is_empty()
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(10)
    }
}

pub fn clamp_page_size(page_size: usize) -> usize {
    page_size.clamp(1, MAX_PAGE_SIZE)
}

/// Index of the last page holding at least one record; 0 for an empty set.
pub fn last_page(total_count: usize, page_size: usize) -> usize {
    let page_size = clamp_page_size(page_size);
    total_count.div_ceil(page_size).saturating_sub(1)
}

/// Records of one fetch (Replace mode) or of all fetches so far (Append mode).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageResult {
    pub items: Vec<Record>,
    pub total_count: usize,
}

impl PageResult {
    pub fn new(items: Vec<Record>, total_count: usize) -> Self {
        Self { items, total_count }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let mut query = QueryState::new(5);
        assert_eq!(query.offset(), 0);
        query.page = 3;
        assert_eq!(query.offset(), 15);
    }

    #[test]
    fn test_page_size_clamped() {
        assert_eq!(QueryState::new(0).page_size, 1);
        assert_eq!(QueryState::new(5000).page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_last_page() {
        assert_eq!(last_page(7, 5), 1);
        assert_eq!(last_page(10, 5), 1);
        assert_eq!(last_page(11, 5), 2);
        assert_eq!(last_page(0, 5), 0);
        assert_eq!(last_page(208, 10), 20);
    }

    #[test]
    fn test_is_search_ignores_whitespace() {
        let mut query = QueryState::default();
        query.search_text = "   ".to_string();
        assert!(!query.is_search());
        query.search_text = " phone ".to_string();
        assert!(query.is_search());
    }

    #[test]
    fn test_sort_direction() {
        assert_eq!(SortDirection::Asc.as_param(), "asc");
        assert_eq!(SortDirection::Desc.as_param(), "desc");
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
    }
}
