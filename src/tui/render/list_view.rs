use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::FilterMode;
use crate::ops::projection::{RowControls, ToggleAction, ViewModel};
use crate::tui::app::{App, Mode};
use crate::util::unicode::{display_width, truncate_to_width};

use super::with_cursor;

/// " [x] " before the text
const CHECKBOX_W: usize = 5;
/// " [Restore] " after the text; the widest toggle label sets the column
const TOGGLE_W: usize = 11;

/// Render the visible rows of the current view
pub fn render_list_view(frame: &mut Frame, app: &mut App, view: &ViewModel, area: Rect) {
    let bg = app.theme.background;

    if view.rows.is_empty() {
        let empty = Paragraph::new(empty_message(view.filter))
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;
    let cursor = app.cursor.min(view.rows.len() - 1);
    app.cursor = cursor;
    if cursor < app.scroll_offset {
        app.scroll_offset = cursor;
    } else if cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = cursor.saturating_sub(visible_height.saturating_sub(1));
    }

    let scroll = app.scroll_offset;
    let end = view.rows.len().min(scroll + visible_height);
    let lines: Vec<Line> = view.rows[scroll..end]
        .iter()
        .zip(scroll..end)
        .map(|(row, idx)| row_line(app, row, idx == cursor, area.width as usize))
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn empty_message(filter: FilterMode) -> &'static str {
    match filter {
        FilterMode::All => " No tasks yet. Press a to add one.",
        FilterMode::Completed => " No completed tasks",
        FilterMode::Active => " Nothing left to do",
        FilterMode::Removed => " Trash is empty",
    }
}

fn row_line<'a>(app: &App, row: &RowControls, is_cursor: bool, width: usize) -> Line<'a> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let editing = app.mode == Mode::Edit && app.edit_target == Some(row.id);

    let box_fg = if row.checkbox_enabled {
        app.theme.text
    } else {
        app.theme.dim
    };
    let checkbox = if row.checked { " [x] " } else { " [ ] " };

    let mut text_style = Style::default()
        .fg(app.theme.item_color(row.checked, row.removed))
        .bg(bg);
    if editing {
        text_style = text_style.fg(app.theme.text_bright);
    } else if row.checked {
        text_style = text_style.add_modifier(Modifier::CROSSED_OUT);
    }
    if is_cursor {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }

    let text_width = width.saturating_sub(CHECKBOX_W + TOGGLE_W);
    let text = if editing {
        with_cursor(&row.text, app.edit_cursor)
    } else {
        row.text.clone()
    };
    let shown = truncate_to_width(&text, text_width);
    let pad = text_width.saturating_sub(display_width(&shown));

    let toggle_fg = match row.toggle {
        ToggleAction::Delete => app.theme.red,
        ToggleAction::Restore => app.theme.green,
    };
    let toggle = format!(" {:<9} ", format!("[{}]", row.toggle.label()));

    Line::from(vec![
        Span::styled(checkbox, Style::default().fg(box_fg).bg(bg)),
        Span::styled(shown, text_style),
        Span::styled(" ".repeat(pad), Style::default().bg(bg)),
        Span::styled(toggle, Style::default().fg(toggle_fg).bg(bg)),
    ])
}
