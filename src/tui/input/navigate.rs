use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::{FilterMode, TodoUpdate};
use crate::ops::projection::{Header, ToggleAction};
use crate::tui::app::App;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) => app.should_quit = true,
        (_, KeyCode::Char('?')) => app.show_help = true,

        // Filters
        (_, KeyCode::Char(c @ '1'..='4')) => {
            let idx = c as usize - '1' as usize;
            app.set_filter(FilterMode::ALL[idx]);
        }
        (_, KeyCode::Tab | KeyCode::Right | KeyCode::Char('l')) => {
            app.set_filter(app.store.filter().next());
        }
        (_, KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h')) => {
            app.set_filter(app.store.filter().prev());
        }

        // Cursor
        (_, KeyCode::Down | KeyCode::Char('j')) => move_cursor(app, 1),
        (_, KeyCode::Up | KeyCode::Char('k')) => move_cursor(app, -1),
        (_, KeyCode::Home | KeyCode::Char('g')) => app.cursor = 0,
        (_, KeyCode::End | KeyCode::Char('G')) => {
            app.cursor = app.store.visible_items().len().saturating_sub(1);
        }

        // Controls
        (KeyModifiers::NONE, KeyCode::Char('a') | KeyCode::Char('i')) => focus_add_form(app),
        (_, KeyCode::Char(' ') | KeyCode::Char('x')) => toggle_checkbox(app),
        (_, KeyCode::Enter | KeyCode::Char('e')) => edit_row(app),
        (_, KeyCode::Char('d') | KeyCode::Delete) => toggle_removed(app),
        (_, KeyCode::Char('P')) => purge(app),
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: i32) {
    let len = app.store.visible_items().len();
    if len == 0 {
        return;
    }
    let next = (app.cursor as i64 + delta as i64).clamp(0, len as i64 - 1);
    app.cursor = next as usize;
}

fn focus_add_form(app: &mut App) {
    if app.view().add_form_shown() {
        app.start_input();
    } else {
        app.flash(format!(
            "No add form in the {} view",
            app.store.filter().label()
        ));
    }
}

fn toggle_checkbox(app: &mut App) {
    let Some(row) = app.cursor_row() else {
        return;
    };
    if !row.checkbox_enabled {
        app.flash("Restore the item before checking it");
        return;
    }
    app.store
        .update_field(row.id, TodoUpdate::Completed(!row.checked));
    app.clamp_cursor();
}

fn edit_row(app: &mut App) {
    let Some(row) = app.cursor_row() else {
        return;
    };
    if !row.text_editable {
        app.flash("Completed and trashed items are read-only");
        return;
    }
    app.start_editing(row.id);
}

fn toggle_removed(app: &mut App) {
    let Some(row) = app.cursor_row() else {
        return;
    };
    app.store
        .update_field(row.id, TodoUpdate::Removed(row.toggle.target_removed()));
    app.flash(match row.toggle {
        ToggleAction::Delete => "Moved to trash",
        ToggleAction::Restore => "Restored",
    });
    app.clamp_cursor();
}

fn purge(app: &mut App) {
    match app.view().header {
        Header::PurgeButton { enabled: true } => {
            let n = app.store.purge_removed();
            app.flash(format!("Emptied trash ({} removed for good)", n));
            app.clamp_cursor();
        }
        Header::PurgeButton { enabled: false } => app.flash("Trash is already empty"),
        _ => app.flash("Switch to Trash (4) to empty it"),
    }
}
