//! Table pager arithmetic: range label, button enablement, page-size cycling.

use crate::models::query::last_page;

/// `"{from}–{to} of {total}"`, with `from = 0` for an empty collection.
pub fn range_label(page: usize, page_size: usize, total: usize) -> String {
    let from = if total == 0 { 0 } else { page * page_size + 1 };
    let to = total.min((page + 1) * page_size);
    format!("{from}–{to} of {total}")
}

/// Which pager actions are currently allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerButtons {
    pub first: bool,
    pub previous: bool,
    pub next: bool,
    pub last: bool,
}

impl PagerButtons {
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let at_start = page == 0;
        let at_end = page >= last_page(total, page_size);
        Self {
            first: !at_start,
            previous: !at_start,
            next: !at_end,
            last: !at_end,
        }
    }
}

/// Next larger option, or `current` when already at the largest.
pub fn next_page_size(options: &[usize], current: usize) -> usize {
    options
        .iter()
        .copied()
        .find(|&size| size > current)
        .unwrap_or(current)
}

/// Next smaller option, or `current` when already at the smallest.
pub fn previous_page_size(options: &[usize], current: usize) -> usize {
    options
        .iter()
        .rev()
        .copied()
        .find(|&size| size < current)
        .unwrap_or(current)
}
