use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{FilterMode, TodoId, TodoUpdate, UiConfig};
use crate::ops::projection::{RowControls, ViewModel, project};
use crate::ops::store::TodoStore;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving around, pressing controls
    Navigate,
    /// Typing into the add form
    Input,
    /// Typing into an item's text field
    Edit,
}

/// Main application state
pub struct App {
    pub store: TodoStore,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Help overlay visible
    pub show_help: bool,
    /// Cursor index into the visible rows
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    /// Byte offset of the text cursor in Input/Edit mode
    pub edit_cursor: usize,
    /// Item whose text is being edited (Edit mode)
    pub edit_target: Option<TodoId>,
    /// One-shot message for the status row, cleared on the next key
    pub status_message: Option<String>,
}

impl App {
    pub fn new(store: TodoStore, ui: &UiConfig) -> Self {
        App {
            store,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(ui),
            show_key_hints: ui.show_key_hints,
            show_help: false,
            cursor: 0,
            scroll_offset: 0,
            edit_cursor: 0,
            edit_target: None,
            status_message: None,
        }
    }

    /// Current projection of the store
    pub fn view(&self) -> ViewModel {
        project(&self.store)
    }

    /// Controls of the row under the cursor
    pub fn cursor_row(&self) -> Option<RowControls> {
        self.view().rows.get(self.cursor).cloned()
    }

    /// Keep the cursor inside the visible rows
    pub fn clamp_cursor(&mut self) {
        let len = self.store.visible_items().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Switch views. Leaves Input/Edit mode if the field is gone.
    pub fn set_filter(&mut self, mode: FilterMode) {
        if mode == self.store.filter() {
            return;
        }
        self.store.set_filter(mode);
        self.cursor = 0;
        self.scroll_offset = 0;
        if self.mode == Mode::Input && !self.view().add_form_shown() {
            self.mode = Mode::Navigate;
        }
        if self.mode == Mode::Edit {
            self.stop_editing();
        }
        log::debug!("filter -> {}", mode);
    }

    /// The text the edit cursor points into
    pub fn edit_text(&self) -> &str {
        match (self.mode, self.edit_target) {
            (Mode::Edit, Some(id)) => self.store.get(id).map_or("", |t| t.text.as_str()),
            _ => self.store.pending_input(),
        }
    }

    /// Write the field being typed into back to the store
    pub fn set_edit_text(&mut self, text: String) {
        match (self.mode, self.edit_target) {
            (Mode::Edit, Some(id)) => {
                self.store.update_field(id, TodoUpdate::Text(text));
            }
            _ => self.store.set_pending_input(text),
        }
    }

    pub fn start_input(&mut self) {
        self.mode = Mode::Input;
        self.edit_cursor = self.store.pending_input().len();
    }

    pub fn start_editing(&mut self, id: TodoId) {
        self.mode = Mode::Edit;
        self.edit_target = Some(id);
        self.edit_cursor = self.store.get(id).map_or(0, |t| t.text.len());
    }

    pub fn stop_editing(&mut self) {
        self.mode = Mode::Navigate;
        self.edit_target = None;
        self.edit_cursor = 0;
    }

    pub fn flash(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}

/// Run the TUI application
pub fn run(mut app: App) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    log::info!("tui started (filter {})", app.store.filter());
    let result = run_event_loop(&mut terminal, &mut app);
    log::info!("tui exiting with {} items", app.store.len());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::app_with_items;

    #[test]
    fn set_filter_resets_cursor_and_leaves_input() {
        let mut app = app_with_items(&[("a", false, false), ("b", false, false)]);
        app.cursor = 1;
        app.start_input();
        app.set_filter(FilterMode::Active);
        // add form still shown in Active
        assert_eq!(app.mode, Mode::Input);
        assert_eq!(app.cursor, 0);

        app.set_filter(FilterMode::Completed);
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn edit_text_routes_to_item_or_input() {
        let mut app = app_with_items(&[("a", false, false)]);
        app.start_input();
        app.set_edit_text("draft".into());
        assert_eq!(app.store.pending_input(), "draft");

        let id = app.store.items()[0].id;
        app.start_editing(id);
        assert_eq!(app.edit_text(), "a");
        assert_eq!(app.edit_cursor, 1);
        app.set_edit_text("ab".into());
        assert_eq!(app.store.get(id).unwrap().text, "ab");
        // input buffer untouched
        assert_eq!(app.store.pending_input(), "draft");
    }

    #[test]
    fn clamp_cursor_after_shrink() {
        let mut app = app_with_items(&[("a", false, false), ("b", false, false)]);
        app.cursor = 1;
        let id = app.cursor_row().unwrap().id;
        app.store.update_field(id, TodoUpdate::Removed(true));
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);
    }
}
