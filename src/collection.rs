//! The in-memory task collection and its synchronization with the store.

use crate::store::{Store, StoreError};
use crate::types::TaskRecord;
use tracing::debug;

/// Ordered task list plus the active search filter.
///
/// Insertion order is display order. Every mutation is written through
/// to the [`Store`] before it returns, so the in-memory list and the
/// persisted copy always agree between operations.
pub struct TaskCollection {
    tasks: Vec<TaskRecord>,
    /// Active search query; `None` means no filter (show everything).
    query: Option<String>,
    store: Store,
}

impl TaskCollection {
    /// Load the saved list from the store.
    pub fn load(store: Store) -> Self {
        let tasks = store.load();
        debug!(count = tasks.len(), "loaded saved tasks");
        Self {
            tasks,
            query: None,
            store,
        }
    }

    /// Append a new unchecked task.
    ///
    /// The title is stored untrimmed, exactly as given. A title that is
    /// empty after trimming is a no-op; enforcing that precondition is
    /// the caller's job, this is just the backstop.
    pub fn add(&mut self, title: &str) -> Result<(), StoreError> {
        if title.trim().is_empty() {
            return Ok(());
        }
        self.tasks.push(TaskRecord::new(title));
        self.persist()
    }

    /// Delete the task with the given id. Idempotent: an unknown id
    /// leaves the collection (and the store) untouched.
    pub fn remove(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// Flip the checked flag on the matching task, replacing the record.
    /// No-op when the id is absent.
    pub fn toggle_checked(&mut self, id: &str) -> Result<(), StoreError> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(());
        };
        *task = TaskRecord {
            is_checked: !task.is_checked,
            ..task.clone()
        };
        self.persist()
    }

    /// Empty the collection unconditionally. Also drops any active
    /// filter so the rendered state cannot show a stale "no match"
    /// message over an empty list.
    pub fn clear_all(&mut self) -> Result<(), StoreError> {
        self.tasks.clear();
        self.query = None;
        self.persist()
    }

    /// Activate case-insensitive substring filtering on titles.
    ///
    /// Only the query is stored; the filtered view is derived on demand
    /// from the live collection, so it can never go stale. An empty
    /// query here means "match all tasks" -- the controller maps empty
    /// search input to [`reset_filter`](Self::reset_filter) instead.
    pub fn filter_by_substring(&mut self, query: &str) {
        self.query = Some(query.to_string());
    }

    /// Return to the unfiltered state.
    pub fn reset_filter(&mut self) {
        self.query = None;
    }

    /// The full collection, in insertion order.
    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    /// The active search query, if filtering is on.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// The currently visible tasks: the filtered view when a query is
    /// set, the full collection otherwise.
    pub fn active_view(&self) -> Vec<&TaskRecord> {
        match &self.query {
            Some(query) => {
                let needle = query.to_lowercase();
                self.tasks
                    .iter()
                    .filter(|task| task.title.to_lowercase().contains(&needle))
                    .collect()
            }
            None => self.tasks.iter().collect(),
        }
    }

    /// Full (unfiltered) collection size.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Read back what the store currently holds (for tests asserting
    /// the memory/disk agreement invariant).
    pub fn persisted(&self) -> Vec<TaskRecord> {
        self.store.load()
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.store.save(&self.tasks)
    }
}
