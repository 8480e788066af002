use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode::{
    next_grapheme_boundary, prev_grapheme_boundary, word_boundary_left, word_boundary_right,
};

/// Result of feeding a key to a single-line text field
#[derive(Debug, PartialEq, Eq)]
enum LineEdit {
    /// Text changed; holds the new value
    Changed(String),
    /// Only the cursor moved
    Moved,
    /// Key isn't a text-editing key
    Unhandled,
}

/// Keys in the add form
pub(super) fn handle_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if let Some(id) = app.store.submit() {
                log::info!("added {}", id);
                app.cursor = 0;
                app.scroll_offset = 0;
            }
            app.edit_cursor = 0;
        }
        KeyCode::Esc => app.mode = Mode::Navigate,
        _ => apply_to_field(app, key),
    }
}

/// Keys while editing an item's text
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.stop_editing(),
        _ => apply_to_field(app, key),
    }
}

fn apply_to_field(app: &mut App, key: KeyEvent) {
    let text = app.edit_text().to_string();
    let mut cursor = app.edit_cursor.min(text.len());
    if let LineEdit::Changed(new_text) = edit_line(&text, &mut cursor, key) {
        app.set_edit_text(new_text);
    }
    app.edit_cursor = cursor;
}

/// Apply one key to `text` with the cursor at byte offset `cursor`
fn edit_line(text: &str, cursor: &mut usize, key: KeyEvent) -> LineEdit {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('a') if ctrl => {
            *cursor = 0;
            LineEdit::Moved
        }
        KeyCode::Char('e') if ctrl => {
            *cursor = text.len();
            LineEdit::Moved
        }
        // Kill to start of line
        KeyCode::Char('u') if ctrl => {
            let new_text = text[*cursor..].to_string();
            *cursor = 0;
            LineEdit::Changed(new_text)
        }
        KeyCode::Char('w') if ctrl => delete_word_left(text, cursor),
        KeyCode::Backspace if alt || ctrl => delete_word_left(text, cursor),
        KeyCode::Char(c) if !ctrl && !alt => {
            let mut new_text = text.to_string();
            new_text.insert(*cursor, c);
            *cursor += c.len_utf8();
            LineEdit::Changed(new_text)
        }
        KeyCode::Backspace => match prev_grapheme_boundary(text, *cursor) {
            Some(start) => {
                let new_text = format!("{}{}", &text[..start], &text[*cursor..]);
                *cursor = start;
                LineEdit::Changed(new_text)
            }
            None => LineEdit::Moved,
        },
        KeyCode::Delete => match next_grapheme_boundary(text, *cursor) {
            Some(end) => LineEdit::Changed(format!("{}{}", &text[..*cursor], &text[end..])),
            None => LineEdit::Moved,
        },
        KeyCode::Left if alt || ctrl => {
            *cursor = word_boundary_left(text, *cursor);
            LineEdit::Moved
        }
        KeyCode::Right if alt || ctrl => {
            *cursor = word_boundary_right(text, *cursor);
            LineEdit::Moved
        }
        KeyCode::Left => {
            *cursor = prev_grapheme_boundary(text, *cursor).unwrap_or(0);
            LineEdit::Moved
        }
        KeyCode::Right => {
            *cursor = next_grapheme_boundary(text, *cursor).unwrap_or(text.len());
            LineEdit::Moved
        }
        KeyCode::Home => {
            *cursor = 0;
            LineEdit::Moved
        }
        KeyCode::End => {
            *cursor = text.len();
            LineEdit::Moved
        }
        _ => LineEdit::Unhandled,
    }
}

fn delete_word_left(text: &str, cursor: &mut usize) -> LineEdit {
    let start = word_boundary_left(text, *cursor);
    if start == *cursor {
        return LineEdit::Moved;
    }
    let new_text = format!("{}{}", &text[..start], &text[*cursor..]);
    *cursor = start;
    LineEdit::Changed(new_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::tests::{press, type_str};
    use crate::tui::render::test_helpers::app_with_items;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn insert_and_delete_graphemes() {
        let mut cursor = 0;
        assert_eq!(
            edit_line("", &mut cursor, key(KeyCode::Char('é'))),
            LineEdit::Changed("é".into())
        );
        assert_eq!(cursor, 2);

        let mut cursor = 5; // after the emoji
        assert_eq!(
            edit_line("a🎉b", &mut cursor, key(KeyCode::Backspace)),
            LineEdit::Changed("ab".into())
        );
        assert_eq!(cursor, 1);

        let mut cursor = 0;
        assert_eq!(
            edit_line("ab", &mut cursor, key(KeyCode::Delete)),
            LineEdit::Changed("b".into())
        );
        assert_eq!(
            edit_line("", &mut cursor, key(KeyCode::Backspace)),
            LineEdit::Moved
        );
    }

    #[test]
    fn cursor_motion() {
        let text = "buy some milk";
        let mut cursor = text.len();
        edit_line(text, &mut cursor, KeyEvent::new(KeyCode::Left, KeyModifiers::ALT));
        assert_eq!(cursor, 9);
        edit_line(text, &mut cursor, key(KeyCode::Left));
        assert_eq!(cursor, 8);
        edit_line(text, &mut cursor, ctrl('a'));
        assert_eq!(cursor, 0);
        edit_line(text, &mut cursor, key(KeyCode::End));
        assert_eq!(cursor, text.len());
        assert_eq!(
            edit_line(text, &mut cursor, key(KeyCode::F(2))),
            LineEdit::Unhandled
        );
    }

    #[test]
    fn kill_commands() {
        let mut cursor = 8;
        assert_eq!(
            edit_line("buy some milk", &mut cursor, ctrl('w')),
            LineEdit::Changed("buy  milk".into())
        );
        assert_eq!(cursor, 4);
        assert_eq!(
            edit_line("buy  milk", &mut cursor, ctrl('u')),
            LineEdit::Changed(" milk".into())
        );
        assert_eq!(cursor, 0);
    }

    #[test]
    fn enter_submits_and_keeps_input_mode() {
        let mut app = app_with_items(&[("old", false, false)]);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "new");
        assert_eq!(app.store.pending_input(), "new");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Input);
        assert_eq!(app.store.pending_input(), "");
        assert_eq!(app.store.items()[0].text, "new");
        assert_eq!(app.cursor, 0);

        // empty submit does nothing
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.len(), 2);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn edit_mode_updates_item_live() {
        let mut app = app_with_items(&[("milk", false, false)]);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Edit);
        press(&mut app, KeyCode::Home);
        type_str(&mut app, "oat ");
        assert_eq!(app.store.items()[0].text, "oat milk");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.edit_target, None);
    }
}
