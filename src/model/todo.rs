use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a todo item: the creation timestamp in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub i64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single entry in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Assigned once at creation
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    /// Soft-delete marker ("in the trash")
    pub removed: bool,
}

impl TodoItem {
    /// Create a fresh, active item
    pub fn new(id: TodoId, text: String) -> Self {
        TodoItem {
            id,
            text,
            completed: false,
            removed: false,
        }
    }

    /// Return a copy of this item with one field replaced
    pub fn with_update(&self, update: &TodoUpdate) -> TodoItem {
        let mut item = self.clone();
        match update {
            TodoUpdate::Text(text) => item.text = text.clone(),
            TodoUpdate::Completed(completed) => item.completed = *completed,
            TodoUpdate::Removed(removed) => item.removed = *removed,
        }
        item
    }
}

/// The mutable fields of a [`TodoItem`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoField {
    Text,
    Completed,
    Removed,
}

/// A field together with its new value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoUpdate {
    Text(String),
    Completed(bool),
    Removed(bool),
}

impl TodoUpdate {
    pub fn field(&self) -> TodoField {
        match self {
            TodoUpdate::Text(_) => TodoField::Text,
            TodoUpdate::Completed(_) => TodoField::Completed,
            TodoUpdate::Removed(_) => TodoField::Removed,
        }
    }
}

/// Which subset of the list is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Completed,
    Active,
    Removed,
}

impl FilterMode {
    /// Display order in the filter bar
    pub const ALL: [FilterMode; 4] = [
        FilterMode::All,
        FilterMode::Completed,
        FilterMode::Active,
        FilterMode::Removed,
    ];

    /// Whether an item belongs to this view
    pub fn matches(self, item: &TodoItem) -> bool {
        match self {
            FilterMode::All => !item.removed,
            FilterMode::Completed => item.completed && !item.removed,
            FilterMode::Active => !item.completed && !item.removed,
            FilterMode::Removed => item.removed,
        }
    }

    /// Lowercase name, as accepted by `FromStr`
    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Completed => "completed",
            FilterMode::Active => "active",
            FilterMode::Removed => "removed",
        }
    }

    /// Label shown in the filter bar
    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Completed => "Completed",
            FilterMode::Active => "Active",
            FilterMode::Removed => "Trash",
        }
    }

    fn index(self) -> usize {
        match self {
            FilterMode::All => 0,
            FilterMode::Completed => 1,
            FilterMode::Active => 2,
            FilterMode::Removed => 3,
        }
    }

    /// Next mode in bar order, wrapping around
    pub fn next(self) -> FilterMode {
        FilterMode::ALL[(self.index() + 1) % FilterMode::ALL.len()]
    }

    /// Previous mode in bar order, wrapping around
    pub fn prev(self) -> FilterMode {
        let n = FilterMode::ALL.len();
        FilterMode::ALL[(self.index() + n - 1) % n]
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter '{0}' (expected all, completed, active or removed)")]
pub struct ParseFilterError(pub String);

impl FromStr for FilterMode {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "completed" | "checked" => Ok(FilterMode::Completed),
            "active" | "unchecked" => Ok(FilterMode::Active),
            "removed" | "trash" => Ok(FilterMode::Removed),
            _ => Err(ParseFilterError(s.to_string())),
        }
    }
}
