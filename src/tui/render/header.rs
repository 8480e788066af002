use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::projection::Header;
use crate::tui::app::{App, Mode};
use crate::util::unicode::{display_width, truncate_to_width};

use super::with_cursor;

const ADD_BUTTON: &str = "[Add]";
const PURGE_BUTTON: &str = "[Empty trash]";

/// Render the control above the list: add form or purge button
pub fn render_header(frame: &mut Frame, app: &App, header: &Header, area: Rect) {
    let line = match header {
        Header::AddForm { input } => add_form_line(app, input, area.width as usize),
        Header::PurgeButton { enabled } => purge_line(app, *enabled),
        Header::Hidden => return,
    };
    let paragraph = Paragraph::new(line).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

fn add_form_line<'a>(app: &App, input: &str, width: usize) -> Line<'a> {
    let bg = app.theme.background;
    let typing = app.mode == Mode::Input;

    let prompt = Span::styled(
        " + ",
        Style::default()
            .fg(app.theme.purple)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    );
    let button_style = if input.is_empty() {
        Style::default().fg(app.theme.dim).bg(bg)
    } else {
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    };

    // " + " | field | " " | [Add]
    let field_width = width.saturating_sub(3 + 1 + ADD_BUTTON.len());
    let (field_text, field_style) = if typing {
        (
            with_cursor(input, app.edit_cursor),
            Style::default().fg(app.theme.text_bright).bg(app.theme.selection_bg),
        )
    } else if input.is_empty() {
        (
            "new task (a)".to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        )
    } else {
        (
            input.to_string(),
            Style::default().fg(app.theme.text).bg(bg),
        )
    };
    let shown = truncate_to_width(&field_text, field_width);
    let pad = field_width.saturating_sub(display_width(&shown));

    Line::from(vec![
        prompt,
        Span::styled(shown, field_style),
        Span::styled(" ".repeat(pad), field_style),
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(ADD_BUTTON, button_style),
    ])
}

fn purge_line<'a>(app: &App, enabled: bool) -> Line<'a> {
    let bg = app.theme.background;
    let (button_style, hint) = if enabled {
        (
            Style::default()
                .fg(app.theme.red)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
            format!(" P to empty ({})", app.store.removed_count()),
        )
    } else {
        (
            Style::default().fg(app.theme.dim).bg(bg),
            " nothing to empty".to_string(),
        )
    };
    Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(PURGE_BUTTON, button_style),
        Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)),
    ])
}
