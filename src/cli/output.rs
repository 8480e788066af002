use serde::Serialize;

use crate::model::{FilterMode, TodoId, TodoItem};
use crate::ops::store::TodoStore;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TodoJson {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    pub removed: bool,
}

#[derive(Serialize)]
pub struct ViewJson {
    pub filter: FilterMode,
    pub pending_input: String,
    /// All items in the store, not just the visible ones
    pub total: usize,
    pub items: Vec<TodoJson>,
}

pub fn todo_to_json(item: &TodoItem) -> TodoJson {
    TodoJson {
        id: item.id,
        text: item.text.clone(),
        completed: item.completed,
        removed: item.removed,
    }
}

pub fn view_to_json(store: &TodoStore) -> ViewJson {
    ViewJson {
        filter: store.filter(),
        pending_input: store.pending_input().to_string(),
        total: store.len(),
        items: store.visible_items().into_iter().map(todo_to_json).collect(),
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// One visible row: ` 1. [x] text`, with ` (trash)` for removed items
pub fn format_row(index: usize, item: &TodoJson) -> String {
    let checkbox = if item.completed { "[x]" } else { "[ ]" };
    let mut line = format!("{:>2}. {} {}", index + 1, checkbox, item.text);
    if item.removed {
        line.push_str(" (trash)");
    }
    line
}

/// A view snapshot as plain text lines
pub fn format_view(view: &ViewJson) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.items.len() + 2);
    lines.push(format!(
        "filter: {} ({} of {})",
        view.filter,
        view.items.len(),
        view.total
    ));
    lines.extend(
        view.items
            .iter()
            .enumerate()
            .map(|(i, item)| format_row(i, item)),
    );
    if !view.pending_input.is_empty() {
        lines.push(format!("input: {}", view.pending_input));
    }
    lines
}
