//! Paged user table: search box, sortable header, pager footer.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::pager::{range_label, PagerButtons};
use crate::app::{App, Focus, Route};
use crate::models::{Record, Resource};

use super::helpers::{spinner, truncate_to_width};
use super::theme::Palette;

pub const EMPTY_TEXT: &str = "No Data";
pub const SEARCH_PLACEHOLDER: &str = "Search users... (press /)";

/// Relative column widths, aligned with [`Resource::columns`].
const USER_COLUMN_WEIGHTS: [u16; 7] = [2, 2, 4, 3, 2, 1, 1];

pub fn render_user_table(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_search(frame, chunks[0], app, palette);
    render_table(frame, chunks[1], app, palette);
    render_pager(frame, chunks[2], app, palette);
}

fn render_search(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let focused = app.focus == Focus::Search;
    let border = if focused {
        Style::default().fg(palette.primary)
    } else {
        palette.border_style()
    };
    let mut title = vec![Span::styled(" Search ", palette.dimmed())];
    if app.users.search_pending() {
        title.push(Span::styled(format!("{} ", spinner(app.tick_count)), palette.dimmed()));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Line::from(title));

    let text = app.users.search_input();
    let line = if text.is_empty() && !focused {
        Line::from(Span::styled(SEARCH_PLACEHOLDER, palette.dimmed()))
    } else {
        let mut spans = vec![Span::styled(text.to_string(), Style::default().fg(palette.text))];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(palette.primary)));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let list = &app.users;
    let mut title = vec![Span::styled(format!(" {} ", Route::Users.label()), palette.accent())];
    if list.is_fetching() {
        title.push(Span::styled(format!("{} ", spinner(app.tick_count)), palette.dimmed()));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .title(Line::from(title));

    if list.items().is_empty() {
        let message = if list.result().is_none() && list.error().is_none() {
            "Loading..."
        } else {
            EMPTY_TEXT
        };
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let middle = Rect {
            y: inner.y + inner.height / 2,
            height: inner.height.min(1),
            ..inner
        };
        frame.render_widget(
            Paragraph::new(Span::styled(message, palette.dimmed())).alignment(Alignment::Center),
            middle,
        );
        return;
    }

    let columns = Resource::Users.columns();
    let query = list.query();
    let header = Row::new(columns.iter().map(|column| {
        let mut title = column.title.to_string();
        if query.sort_field.as_deref() == Some(column.field) {
            title.push(' ');
            title.push_str(query.sort_direction.unwrap_or_default().arrow());
        }
        Cell::from(title)
    }))
    .style(Style::default().fg(palette.text).add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let widths = widths(area.width);
    let rows = list
        .items()
        .iter()
        .map(|record| user_row(record, &widths, palette));

    let constraints = widths.iter().map(|&w| Constraint::Length(w));
    let table = Table::new(rows, constraints)
        .header(header)
        .block(block)
        .column_spacing(1);
    frame.render_widget(table, area);
}

fn user_row(record: &Record, widths: &[u16], palette: &Palette) -> Row<'static> {
    let cells = Resource::Users
        .columns()
        .iter()
        .zip(widths)
        .map(|(column, &width)| Cell::from(truncate_to_width(&record.display(column.field), width as usize)));
    Row::new(cells).style(Style::default().fg(palette.text))
}

/// Column widths that fill `total` (block borders and spacing removed).
fn widths(total: u16) -> Vec<u16> {
    let count = USER_COLUMN_WEIGHTS.len() as u16;
    let usable = total.saturating_sub(2 + count.saturating_sub(1));
    let weight_sum: u16 = USER_COLUMN_WEIGHTS.iter().sum();
    USER_COLUMN_WEIGHTS
        .iter()
        .map(|&w| (usable as u32 * w as u32 / weight_sum as u32) as u16)
        .collect()
}

fn render_pager(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let list = &app.users;
    let query = list.query();
    let total = list.total_count();
    let buttons = PagerButtons::new(query.page, query.page_size, total);

    let button = |glyph: &'static str, enabled: bool| {
        let style = if enabled {
            Style::default().fg(palette.text)
        } else {
            palette.dimmed()
        };
        Span::styled(glyph, style)
    };

    let right = Line::from(vec![
        Span::styled(format!("Rows per page: {}   ", query.page_size), palette.dimmed()),
        Span::styled(
            format!("{}   ", range_label(query.page, query.page_size, total)),
            Style::default().fg(palette.text),
        ),
        button("⏮ ", buttons.first),
        button("◀ ", buttons.previous),
        button("▶ ", buttons.next),
        button("⏭ ", buttons.last),
    ])
    .alignment(Alignment::Right);
    frame.render_widget(Paragraph::new(right), area);

    if let Some(message) = list.error() {
        let left = Line::from(Span::styled(format!("Error: {message}"), palette.error_style()));
        let left_area = Rect {
            width: area.width / 2,
            ..area
        };
        frame.render_widget(Paragraph::new(left), left_area);
    }
}
