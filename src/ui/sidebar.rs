//! Navigation drawer.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Route};

use super::theme::Palette;

pub const SIDEBAR_TITLE: &str = "Demo App";
pub const OPEN_WIDTH: u16 = 22;
/// Icons only
pub const COLLAPSED_WIDTH: u16 = 5;

pub fn sidebar_width(open: bool) -> u16 {
    if open {
        OPEN_WIDTH
    } else {
        COLLAPSED_WIDTH
    }
}

pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(palette.border_style())
        .style(Style::default().bg(palette.surface));
    if app.sidebar_open {
        block = block.title(Span::styled(format!(" {SIDEBAR_TITLE} "), palette.accent()));
    }

    let mut lines = vec![Line::default()];
    for (i, route) in Route::ALL.into_iter().enumerate() {
        lines.push(menu_line(app, route, i + 1, palette));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn menu_line(app: &App, route: Route, shortcut: usize, palette: &Palette) -> Line<'static> {
    let active = app.route == route;
    let style = if active {
        Style::default()
            .fg(palette.primary)
            .bg(palette.selected_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    };

    if app.sidebar_open {
        Line::from(vec![
            Span::styled(format!(" {} ", route.icon()), style),
            Span::styled(format!("{:<14}", route.label()), style),
            Span::styled(format!("{shortcut}"), palette.dimmed()),
        ])
    } else {
        Line::from(Span::styled(format!(" {} ", route.icon()), style))
    }
}
