//! UI rendering.
//!
//! [`render`] is a pure function of [`App`] state, except that the product
//! grid records its geometry on the app for scroll handling.

mod helpers;
pub mod product_grid;
pub mod sidebar;
mod theme;
pub mod user_table;

pub use helpers::{format_price, spinner, truncate_to_width};
pub use theme::{Palette, DARK, LIGHT};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::{App, Focus, Route};
use product_grid::render_product_grid;
use sidebar::{render_sidebar, sidebar_width};
use user_table::render_user_table;

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = Palette::for_mode(app.theme);
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(sidebar_width(app.sidebar_open)),
            Constraint::Min(0),
        ])
        .split(area);
    render_sidebar(frame, columns[0], app, &palette);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(columns[1]);

    render_header(frame, rows[0], app, &palette);
    match app.route {
        Route::Users => render_user_table(frame, rows[1], app, &palette),
        Route::Products => render_product_grid(frame, rows[1], app, &palette),
    }
    render_hints(frame, rows[2], app, &palette);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let line = Line::from(vec![
        Span::styled(format!(" {} ", app.route.label()), palette.accent()),
        Span::styled(format!("  {}", app.route.path()), palette.dimmed()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Key hints for the current context.
pub fn hint_text(app: &App) -> &'static str {
    match (app.focus, app.route) {
        (Focus::Search, _) => "type to search · Enter/Esc done · Ctrl+U clear",
        (Focus::List, Route::Users) => {
            "←/→ page · Home/End · +/- rows · s sort · o order · / search · r refresh · Tab switch · b menu · t theme · q quit"
        }
        (Focus::List, Route::Products) => {
            "↓/j scroll · Enter/m load more · r reload · Tab switch · b menu · t theme · q quit"
        }
    }
}

fn render_hints(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", hint_text(app)), palette.dimmed())),
        area,
    );
}
