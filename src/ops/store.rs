use std::fmt;
use std::sync::Arc;

use chrono::Utc;

use crate::model::todo::{FilterMode, TodoId, TodoItem, TodoUpdate};

/// Source of creation timestamps for new items
pub trait Clock: Send + Sync {
    /// Current time in milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// The whole list state: items, current filter and the pending input.
///
/// Every change to the items builds a new list and swaps it in; a snapshot
/// obtained from [`TodoStore::items`] never changes afterwards.
pub struct TodoStore {
    items: Arc<[TodoItem]>,
    filter: FilterMode,
    pending_input: String,
    last_id: Option<TodoId>,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoStore")
            .field("items", &self.items)
            .field("filter", &self.filter)
            .field("pending_input", &self.pending_input)
            .field("last_id", &self.last_id)
            .finish_non_exhaustive()
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    /// Empty store on the wall clock, showing everything
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        TodoStore {
            items: Arc::from(Vec::new()),
            filter: FilterMode::default(),
            pending_input: String::new(),
            last_id: None,
            clock,
        }
    }

    // --- reads ---

    /// Snapshot of the full list, newest first
    pub fn items(&self) -> Arc<[TodoItem]> {
        Arc::clone(&self.items)
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|t| t.id == id)
    }

    /// Number of items in the trash
    pub fn removed_count(&self) -> usize {
        self.items.iter().filter(|t| t.removed).count()
    }

    /// Number of items a given filter would show
    pub fn count(&self, mode: FilterMode) -> usize {
        self.items.iter().filter(|t| mode.matches(t)).count()
    }

    /// Items shown under the current filter, in list order
    pub fn visible_items(&self) -> Vec<&TodoItem> {
        visible(&self.items, self.filter).collect()
    }

    // --- writes ---

    /// Replace the pending input buffer
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Turn the pending input into a new item at the top of the list.
    ///
    /// Does nothing and returns `None` when the buffer is empty.
    pub fn submit(&mut self) -> Option<TodoId> {
        if self.pending_input.is_empty() {
            return None;
        }
        let id = self.next_id();
        let text = std::mem::take(&mut self.pending_input);
        let item = TodoItem::new(id, text);

        self.items = std::iter::once(item)
            .chain(self.items.iter().cloned())
            .collect();
        log::debug!("submit: created {} ({} items)", id, self.items.len());
        Some(id)
    }

    /// Set one field of the item with `id`.
    ///
    /// Returns `false` (leaving the list untouched) when no item matches.
    pub fn update_field(&mut self, id: TodoId, update: TodoUpdate) -> bool {
        if !self.items.iter().any(|t| t.id == id) {
            log::debug!("update_field: no item {}", id);
            return false;
        }
        self.items = self
            .items
            .iter()
            .map(|t| {
                if t.id == id {
                    t.with_update(&update)
                } else {
                    t.clone()
                }
            })
            .collect();
        log::debug!("update_field: {} {:?}", id, update.field());
        true
    }

    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter = mode;
    }

    /// Drop every item in the trash for good. Returns how many were dropped.
    pub fn purge_removed(&mut self) -> usize {
        let removed = self.removed_count();
        if removed == 0 {
            return 0;
        }
        self.items = self.items.iter().filter(|t| !t.removed).cloned().collect();
        log::debug!("purge_removed: dropped {}", removed);
        removed
    }

    /// Timestamp id, bumped past the previous one if the clock hasn't moved
    fn next_id(&mut self) -> TodoId {
        let now = self.clock.now_millis();
        let id = match self.last_id {
            Some(last) if now <= last.0 => TodoId(last.0 + 1),
            _ => TodoId(now),
        };
        self.last_id = Some(id);
        id
    }
}

/// Items of `items` that `mode` shows, in order
pub fn visible(items: &[TodoItem], mode: FilterMode) -> impl Iterator<Item = &TodoItem> {
    items.iter().filter(move |t| mode.matches(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store_at(millis: i64) -> TodoStore {
        TodoStore::with_clock(Arc::new(FixedClock(millis)))
    }

    fn add(store: &mut TodoStore, text: &str) -> TodoId {
        store.set_pending_input(text);
        store.submit().unwrap()
    }

    fn texts(items: &[&TodoItem]) -> Vec<String> {
        items.iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn submit_prepends_and_clears_input() {
        let mut store = store_at(1_000);
        add(&mut store, "first");
        store.set_pending_input("second");
        let id = store.submit().unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.items()[0].text, "second");
        assert_eq!(store.items()[0].id, id);
        assert_eq!(store.items()[1].text, "first");
        assert_eq!(store.pending_input(), "");
        let items = store.items();
        let first = &items[0];
        assert!(!first.completed);
        assert!(!first.removed);
    }

    #[test]
    fn submit_empty_is_noop() {
        let mut store = store_at(1_000);
        add(&mut store, "keep");
        let before = store.items();

        assert_eq!(store.submit(), None);
        assert!(Arc::ptr_eq(&before, &store.items()));
        assert_eq!(store.pending_input(), "");
    }

    #[test]
    fn whitespace_input_is_still_submitted() {
        let mut store = store_at(1_000);
        store.set_pending_input("  ");
        assert!(store.submit().is_some());
        assert_eq!(store.items()[0].text, "  ");
    }

    #[test]
    fn ids_use_clock_and_stay_increasing() {
        let mut store = store_at(5_000);
        let a = add(&mut store, "a");
        let b = add(&mut store, "b");
        let c = add(&mut store, "c");
        assert_eq!(a, TodoId(5_000));
        assert_eq!(b, TodoId(5_001));
        assert_eq!(c, TodoId(5_002));
    }

    #[test]
    fn update_field_sets_value_and_keeps_order() {
        let mut store = store_at(1);
        let a = add(&mut store, "a");
        let b = add(&mut store, "b");

        assert!(store.update_field(a, TodoUpdate::Completed(true)));
        assert!(store.update_field(a, TodoUpdate::Text("a2".into())));
        assert!(store.update_field(b, TodoUpdate::Removed(true)));

        assert_eq!(store.len(), 2);
        assert_eq!(store.items()[0].id, b);
        assert_eq!(store.items()[1].id, a);
        assert_eq!(store.get(a).unwrap().text, "a2");
        assert!(store.get(a).unwrap().completed);
        assert!(store.get(b).unwrap().removed);
        assert!(!store.get(b).unwrap().completed);
    }

    #[test]
    fn update_unknown_id_leaves_list_identical() {
        let mut store = store_at(1);
        add(&mut store, "a");
        let before = store.items();

        assert!(!store.update_field(TodoId(999), TodoUpdate::Completed(true)));
        assert!(Arc::ptr_eq(&before, &store.items()));
    }

    #[test]
    fn update_replaces_list_but_not_old_snapshot() {
        let mut store = store_at(1);
        let a = add(&mut store, "a");
        let snapshot = store.items();

        store.update_field(a, TodoUpdate::Completed(true));
        assert!(!snapshot[0].completed);
        assert!(store.items()[0].completed);
    }

    #[test]
    fn purge_is_idempotent() {
        let mut store = store_at(1);
        let a = add(&mut store, "a");
        add(&mut store, "b");
        let c = add(&mut store, "c");
        store.update_field(a, TodoUpdate::Removed(true));
        store.update_field(c, TodoUpdate::Removed(true));

        assert_eq!(store.purge_removed(), 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].text, "b");

        let after_first = store.items();
        assert_eq!(store.purge_removed(), 0);
        assert!(Arc::ptr_eq(&after_first, &store.items()));
    }

    #[test]
    fn visible_items_follow_filter() {
        let mut store = store_at(1);
        let a = add(&mut store, "a");
        let b = add(&mut store, "b");
        add(&mut store, "c");
        store.update_field(a, TodoUpdate::Completed(true));
        store.update_field(b, TodoUpdate::Removed(true));

        assert_eq!(texts(&store.visible_items()), vec!["c", "a"]);
        store.set_filter(FilterMode::Completed);
        assert_eq!(texts(&store.visible_items()), vec!["a"]);
        store.set_filter(FilterMode::Active);
        assert_eq!(texts(&store.visible_items()), vec!["c"]);
        store.set_filter(FilterMode::Removed);
        assert_eq!(texts(&store.visible_items()), vec!["b"]);

        assert_eq!(store.count(FilterMode::All), 2);
        assert_eq!(store.removed_count(), 1);
    }

    #[test]
    fn all_and_removed_partition_the_list() {
        let mut store = store_at(1);
        for (i, text) in ["a", "b", "c", "d"].iter().enumerate() {
            let id = add(&mut store, text);
            if i % 2 == 0 {
                store.update_field(id, TodoUpdate::Removed(true));
            }
        }
        let items = store.items();
        let mut ids: Vec<TodoId> = visible(&items, FilterMode::All)
            .chain(visible(&items, FilterMode::Removed))
            .map(|t| t.id)
            .collect();
        ids.sort();
        let mut all: Vec<TodoId> = items.iter().map(|t| t.id).collect();
        all.sort();
        assert_eq!(ids, all);
    }

    #[test]
    fn milk_scenario() {
        let mut store = store_at(1_700_000_000_000);
        store.set_pending_input("buy milk");
        let id = store.submit().unwrap();
        assert_eq!(
            store.items().to_vec(),
            vec![TodoItem::new(id, "buy milk".into())]
        );

        store.update_field(id, TodoUpdate::Completed(true));
        store.set_filter(FilterMode::Completed);
        assert_eq!(store.visible_items().len(), 1);
        store.set_filter(FilterMode::Active);
        assert!(store.visible_items().is_empty());

        store.update_field(id, TodoUpdate::Removed(true));
        for mode in [FilterMode::All, FilterMode::Completed, FilterMode::Active] {
            store.set_filter(mode);
            assert!(store.visible_items().is_empty(), "{:?}", mode);
        }
        store.set_filter(FilterMode::Removed);
        assert_eq!(store.visible_items().len(), 1);

        store.purge_removed();
        assert!(store.is_empty());
    }
}
