use std::sync::Arc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{TodoUpdate, UiConfig};
use crate::ops::store::{FixedClock, TodoStore};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// A store on a frozen clock so ids are predictable.
pub fn test_store() -> TodoStore {
    TodoStore::with_clock(Arc::new(FixedClock(1_700_000_000_000)))
}

/// Build an App from `(text, completed, removed)` tuples, listed top to bottom.
pub fn app_with_items(items: &[(&str, bool, bool)]) -> App {
    let mut store = test_store();
    // New items go on top, so add in reverse
    for (text, _, _) in items.iter().rev() {
        store.set_pending_input(*text);
        store.submit();
    }
    let ids: Vec<_> = store.items().iter().map(|t| t.id).collect();
    for (id, (_, completed, removed)) in ids.into_iter().zip(items) {
        if *completed {
            store.update_field(id, TodoUpdate::Completed(true));
        }
        if *removed {
            store.update_field(id, TodoUpdate::Removed(true));
        }
    }
    App::new(store, &UiConfig::default())
}
