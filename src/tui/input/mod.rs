mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use edit::{handle_edit, handle_input};
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay swallows the next key
    if app.show_help {
        app.show_help = false;
        return;
    }

    let key = normalize_key(key);
    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Input => handle_input(app, key),
        Mode::Edit => handle_edit(app, key),
    }
}

/// Kitty-protocol terminals report `Shift+p` as `Char('p')` with SHIFT;
/// fold that into `Char('P')` so bindings match either way.
fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FilterMode;
    use crate::tui::render::test_helpers::app_with_items;

    pub(super) fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    pub(super) fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut app = app_with_items(&[]);
        app.start_input();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn help_overlay_swallows_one_key() {
        let mut app = app_with_items(&[]);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('4'));
        assert!(!app.show_help);
        assert_eq!(app.store.filter(), FilterMode::All);
    }

    #[test]
    fn shifted_lowercase_is_normalized() {
        let key = normalize_key(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::SHIFT));
        assert_eq!(key.code, KeyCode::Char('P'));
        let key = normalize_key(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE));
        assert_eq!(key.code, KeyCode::Char('p'));
    }

    #[test]
    fn milk_scenario_by_keyboard() {
        let mut app = app_with_items(&[]);
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "buy milk");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.pending_input(), "");

        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.view().rows.len(), 1);
        press(&mut app, KeyCode::Char('3'));
        assert!(app.view().rows.is_empty());

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('d'));
        assert!(app.view().rows.is_empty());
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.view().rows.len(), 1);

        press(&mut app, KeyCode::Char('P'));
        assert!(app.store.is_empty());
    }
}
