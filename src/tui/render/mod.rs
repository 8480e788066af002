pub mod filter_bar;
pub mod header;
pub mod help_overlay;
pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::ops::projection::Header;

use super::app::App;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let view = app.view();

    // Layout: filter bar (2 rows) | header control (+ spacer) | list | status row
    let header_height = if view.header == Header::Hidden { 0 } else { 2 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(header_height),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    filter_bar::render_filter_bar(frame, app, chunks[0]);
    if header_height > 0 {
        header::render_header(frame, app, &view.header, chunks[1]);
    }
    list_view::render_list_view(frame, app, &view, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}

/// Split `text` at byte offset `cursor` and put a bar cursor there
pub(super) fn with_cursor(text: &str, cursor: usize) -> String {
    let cursor = cursor.min(text.len());
    format!("{}\u{258C}{}", &text[..cursor], &text[cursor..])
}
