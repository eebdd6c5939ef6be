//! Message and input handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use tracing::debug;

use crate::view_model::ApplyOutcome;

use super::pager::{next_page_size, previous_page_size, PagerButtons};
use super::{App, AppMessage, Focus, Route};

/// Rows moved per wheel notch in the product grid
const WHEEL_ROWS: isize = 1;

impl App {
    /// Handle an incoming async message.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::PageLoaded { route, seq, result } => {
                let outcome = self.list_mut(route).apply(seq, result);
                if outcome == ApplyOutcome::Stale {
                    return;
                }
                if route == Route::Products {
                    self.product_scroll = self.product_scroll.min(self.max_product_scroll());
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.focus == Focus::Search {
            self.handle_search_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Tab | KeyCode::BackTab => self.navigate(self.route.next()),
            KeyCode::Char('1') => self.navigate(Route::Users),
            KeyCode::Char('2') => self.navigate(Route::Products),
            KeyCode::Char('b') => self.toggle_sidebar(),
            KeyCode::Char('t') => self.toggle_theme(),
            _ => match self.route {
                Route::Users => self.handle_users_key(key),
                Route::Products => self.handle_products_key(key),
            },
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.route != Route::Products {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_products(WHEEL_ROWS),
            MouseEventKind::ScrollUp => self.scroll_products(-WHEEL_ROWS),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let mut text = self.users.search_input().to_string();
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.focus = Focus::List;
                return;
            }
            KeyCode::Backspace => {
                text.pop();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => text.clear(),
            KeyCode::Char(c) => text.push(c),
            _ => return,
        }
        self.users.set_search_text(text);
    }

    fn handle_users_key(&mut self, key: KeyEvent) {
        let query = self.users.query().clone();
        let buttons = PagerButtons::new(query.page, query.page_size, self.users.total_count());

        match key.code {
            KeyCode::Left if buttons.previous => self.users.set_page(query.page - 1),
            KeyCode::Right if buttons.next => self.users.set_page(query.page + 1),
            KeyCode::Home if buttons.first => self.users.set_page(0),
            KeyCode::End if buttons.last => {
                self.users.set_page(self.users.page_count().saturating_sub(1))
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let options = self.users.resource().page_size_options();
                self.users
                    .set_page_size(next_page_size(options, query.page_size));
            }
            KeyCode::Char('-') => {
                let options = self.users.resource().page_size_options();
                self.users
                    .set_page_size(previous_page_size(options, query.page_size));
            }
            KeyCode::Char('s') => self.cycle_user_sort(),
            KeyCode::Char('o') => {
                if let Some(field) = query.sort_field {
                    let direction = query.sort_direction.unwrap_or_default().toggled();
                    self.users.set_sort(Some(field), Some(direction));
                }
            }
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Char('r') => self.users.refresh(),
            _ => {}
        }
    }

    /// Unsorted, then each column in order, then unsorted again.
    fn cycle_user_sort(&mut self) {
        let query = self.users.query();
        let columns = self.users.resource().columns();
        let next = match &query.sort_field {
            None => columns.first(),
            Some(current) => columns
                .iter()
                .position(|c| c.field == current.as_str())
                .and_then(|i| columns.get(i + 1)),
        };
        let direction = query.sort_direction;
        let field = next.map(|c| c.field.to_string());
        debug!(field = ?field, "cycle sort");
        self.users.set_sort(field, direction);
    }

    fn handle_products_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.scroll_products(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_products(-1),
            KeyCode::PageDown => {
                let rows = self.product_viewport.visible_rows.max(1) as isize;
                self.scroll_products(rows);
            }
            KeyCode::PageUp => {
                let rows = self.product_viewport.visible_rows.max(1) as isize;
                self.scroll_products(-rows);
            }
            KeyCode::Enter | KeyCode::Char('m') => {
                self.load_more_products();
            }
            KeyCode::Char('r') => {
                self.product_scroll = 0;
                self.products.reset();
            }
            _ => {}
        }
    }
}
