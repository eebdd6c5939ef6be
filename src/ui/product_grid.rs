//! Infinite-scroll product grid.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, GridViewport, Route};
use crate::models::Record;

use super::helpers::{format_price, spinner, truncate_to_width};
use super::theme::Palette;

pub const LOADING_TEXT: &str = "Loading products...";
pub const LOADING_MORE_TEXT: &str = "Loading more products...";
pub const LOAD_MORE_TEXT: &str = "Load More";
pub const END_OF_LIST_TEXT: &str = "You've reached the end of the list";

pub const CARD_MIN_WIDTH: u16 = 28;
/// Borders plus four content lines
pub const CARD_HEIGHT: u16 = 6;

/// Grid geometry for a content area of `area`.
pub fn grid_viewport(area: Rect) -> GridViewport {
    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);
    GridViewport {
        columns: (inner_width / CARD_MIN_WIDTH).max(1) as usize,
        visible_rows: (inner_height / CARD_HEIGHT) as usize,
    }
}

pub fn render_product_grid(frame: &mut Frame, area: Rect, app: &mut App, palette: &Palette) {
    let has_error = app.products.error().is_some();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(CARD_HEIGHT + 2),
            Constraint::Length(if has_error { 1 } else { 0 }),
            Constraint::Length(1),
        ])
        .split(area);

    app.product_viewport = grid_viewport(chunks[0]);
    let app = &*app;

    render_cards(frame, chunks[0], app, palette);
    if let Some(message) = app.products.error() {
        frame.render_widget(
            Paragraph::new(Span::styled(format!("Error: {message}"), palette.error_style()))
                .alignment(Alignment::Center),
            chunks[1],
        );
    }
    render_footer(frame, chunks[2], app, palette);
}

fn render_cards(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let list = &app.products;
    let mut title = vec![Span::styled(format!(" {} ", Route::Products.label()), palette.accent())];
    if list.total_count() > 0 {
        title.push(Span::styled(
            format!("{} of {} ", list.items().len(), list.total_count()),
            palette.dimmed(),
        ));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .title(Line::from(title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if list.items().is_empty() {
        let message = if list.result().is_none() && list.error().is_none() {
            format!("{} {}", spinner(app.tick_count), LOADING_TEXT)
        } else {
            "No products".to_string()
        };
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

    let viewport = app.product_viewport;
    let card_width = inner.width / viewport.columns.max(1) as u16;
    let rows = list
        .items()
        .chunks(viewport.columns.max(1))
        .skip(app.product_scroll)
        .take(viewport.visible_rows);

    for (row_index, row) in rows.enumerate() {
        for (col_index, record) in row.iter().enumerate() {
            let card_area = Rect {
                x: inner.x + col_index as u16 * card_width,
                y: inner.y + row_index as u16 * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT,
            };
            render_card(frame, card_area, record, palette);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, record: &Record, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style());
    let width = area.width.saturating_sub(2) as usize;

    let title = truncate_to_width(&record.display("title"), width);
    let description = truncate_to_width(&record.display("description"), width);
    let origin = truncate_to_width(
        &format!("{} · {}", record.display("brand"), record.display("category")),
        width,
    );
    let stats = truncate_to_width(
        &format!(
            "{}  ★ {}  stock {}",
            format_price(record.number("price")),
            record.display("rating"),
            record.display("stock")
        ),
        width,
    );

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(description, palette.dimmed())),
        Line::from(Span::styled(origin, palette.dimmed())),
        Line::from(Span::styled(stats, Style::default().fg(palette.primary))),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// The footer text for the current state, if any.
pub fn footer_text(app: &App) -> Option<&'static str> {
    let list = &app.products;
    if list.is_loading_more() {
        Some(LOADING_MORE_TEXT)
    } else if list.has_more() {
        Some(LOAD_MORE_TEXT)
    } else if list.result().is_some() && !list.items().is_empty() {
        Some(END_OF_LIST_TEXT)
    } else {
        None
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(text) = footer_text(app) else {
        return;
    };
    let line = match text {
        LOADING_MORE_TEXT => Line::from(vec![
            Span::styled(format!("{} ", spinner(app.tick_count)), palette.accent()),
            Span::styled(text, palette.dimmed()),
        ]),
        LOAD_MORE_TEXT => Line::from(vec![
            Span::styled(format!("[ {text} ]"), palette.accent()),
            Span::styled("  Enter", palette.dimmed()),
        ]),
        _ => Line::from(Span::styled(text, palette.dimmed())),
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_viewport() {
        let viewport = grid_viewport(Rect::new(0, 0, 86, 20));
        assert_eq!(viewport.columns, 3);
        assert_eq!(viewport.visible_rows, 3);
    }

    #[test]
    fn test_grid_viewport_narrow_keeps_one_column() {
        let viewport = grid_viewport(Rect::new(0, 0, 10, 4));
        assert_eq!(viewport.columns, 1);
        assert_eq!(viewport.visible_rows, 0);
    }
}
