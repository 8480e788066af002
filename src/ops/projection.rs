use crate::model::todo::{FilterMode, TodoId, TodoItem};
use crate::ops::store::TodoStore;

/// The control above the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    /// Text field plus "Add" button
    AddForm { input: String },
    /// "Empty trash" button
    PurgeButton { enabled: bool },
    /// Nothing (the Completed view)
    Hidden,
}

/// What the per-row delete/restore button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Delete,
    Restore,
}

impl ToggleAction {
    pub fn label(self) -> &'static str {
        match self {
            ToggleAction::Delete => "Delete",
            ToggleAction::Restore => "Restore",
        }
    }

    /// Value the `removed` field takes when pressed
    pub fn target_removed(self) -> bool {
        matches!(self, ToggleAction::Delete)
    }
}

/// Controls for one visible item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowControls {
    pub id: TodoId,
    pub text: String,
    pub checked: bool,
    pub removed: bool,
    pub checkbox_enabled: bool,
    pub text_editable: bool,
    pub toggle: ToggleAction,
}

impl RowControls {
    pub fn for_item(item: &TodoItem) -> Self {
        RowControls {
            id: item.id,
            text: item.text.clone(),
            checked: item.completed,
            removed: item.removed,
            checkbox_enabled: !item.removed,
            text_editable: !item.completed && !item.removed,
            toggle: if item.removed {
                ToggleAction::Restore
            } else {
                ToggleAction::Delete
            },
        }
    }
}

/// Everything the screen shows, derived from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub filter: FilterMode,
    pub header: Header,
    pub rows: Vec<RowControls>,
}

impl ViewModel {
    pub fn add_form_shown(&self) -> bool {
        matches!(self.header, Header::AddForm { .. })
    }

    /// Purge button present and clickable
    pub fn purge_enabled(&self) -> bool {
        matches!(self.header, Header::PurgeButton { enabled: true })
    }

    pub fn row(&self, index: usize) -> Option<&RowControls> {
        self.rows.get(index)
    }
}

/// Which header control a filter shows
pub fn header_for(store: &TodoStore) -> Header {
    match store.filter() {
        FilterMode::Removed => Header::PurgeButton {
            enabled: store.removed_count() > 0,
        },
        FilterMode::Completed => Header::Hidden,
        FilterMode::All | FilterMode::Active => Header::AddForm {
            input: store.pending_input().to_string(),
        },
    }
}

/// Derive the full view from the store
pub fn project(store: &TodoStore) -> ViewModel {
    ViewModel {
        filter: store.filter(),
        header: header_for(store),
        rows: store
            .visible_items()
            .into_iter()
            .map(RowControls::for_item)
            .collect(),
    }
}
