//! Event handling: binds user actions to collection operations.
//!
//! Single-threaded and event-driven. One action is handled fully,
//! including persistence, before the next; the only time-based element
//! is the fixed-delay removal schedule driven by [`Controller::tick`].

use crate::collection::TaskCollection;
use crate::store::StoreError;
use crate::view::ViewModel;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Delay between a delete click and the actual removal, matching the
/// fade-out shown by the rendered surface.
pub const DELETE_DELAY: Duration = Duration::from_millis(400);

/// Which text field currently has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    NewTask,
    Search,
}

/// Owns the collection plus the transient interaction state: the two
/// input buffers, the focused field, and removals waiting on their
/// deadline.
pub struct Controller {
    collection: TaskCollection,
    new_task_input: String,
    search_input: String,
    focus: Focus,
    /// Items in the `disappearing` state, keyed by id, with the instant
    /// their removal falls due. Cancellable until then.
    pending_removals: HashMap<String, Instant>,
}

impl Controller {
    pub fn new(collection: TaskCollection) -> Self {
        Self {
            collection,
            new_task_input: String::new(),
            search_input: String::new(),
            focus: Focus::NewTask,
            pending_removals: HashMap::new(),
        }
    }

    // ---- text input -----------------------------------------------------

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn new_task_input(&self) -> &str {
        &self.new_task_input
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Type a character into the focused field. Search reacts on every
    /// keystroke; there is no separate submit step for filtering.
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            Focus::NewTask => self.new_task_input.push(c),
            Focus::Search => {
                self.search_input.push(c);
                self.apply_search();
            }
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Focus::NewTask => {
                self.new_task_input.pop();
            }
            Focus::Search => {
                self.search_input.pop();
                self.apply_search();
            }
        }
    }

    /// Non-empty trimmed input activates filtering with that value as
    /// the query; empty input deactivates filtering entirely, which is
    /// not the same thing as a filter matching everything.
    fn apply_search(&mut self) {
        let value = self.search_input.trim();
        if value.is_empty() {
            self.collection.reset_filter();
        } else {
            let query = value.to_string();
            self.collection.filter_by_substring(&query);
        }
    }

    // ---- form submission ------------------------------------------------

    /// Submit the new-task form. Whitespace-only input is silently
    /// ignored; otherwise the untrimmed text is added, any active filter
    /// is reset, the input is cleared, and focus stays on the field.
    pub fn submit_new_task(&mut self) {
        if self.new_task_input.trim().is_empty() {
            return;
        }
        let title = std::mem::take(&mut self.new_task_input);
        let result = self.collection.add(&title);
        self.persist(result);
        self.collection.reset_filter();
        self.search_input.clear();
        self.focus = Focus::NewTask;
    }

    /// Submitting the search form does nothing; it exists only so the
    /// event is swallowed instead of leaving the widget.
    pub fn submit_search(&mut self) {}

    // ---- item actions ---------------------------------------------------

    pub fn toggle_item(&mut self, id: &str) {
        let result = self.collection.toggle_checked(id);
        self.persist(result);
    }

    /// Delete-all clears the collection regardless of any active
    /// filter, and resets the filter state with it so no stale query
    /// survives over an empty list.
    pub fn delete_all(&mut self) {
        let result = self.collection.clear_all();
        self.persist(result);
        self.search_input.clear();
        self.pending_removals.clear();
    }

    /// Start the fade-out for an item and schedule its removal after
    /// [`DELETE_DELAY`]. A click on an item already disappearing is a
    /// no-op; the original deadline stands.
    pub fn request_delete(&mut self, id: &str, now: Instant) {
        self.pending_removals
            .entry(id.to_string())
            .or_insert_with(|| {
                debug!(id, "scheduled removal");
                now + DELETE_DELAY
            });
    }

    /// Abort a scheduled removal, returning the item to its normal
    /// rendered state. True if something was pending.
    pub fn cancel_removal(&mut self, id: &str) -> bool {
        self.pending_removals.remove(id).is_some()
    }

    /// Perform removals whose deadline has passed. Called by the event
    /// loop on every poll timeout as well as after each input event.
    pub fn tick(&mut self, now: Instant) {
        let due: Vec<String> = self
            .pending_removals
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, _)| id.clone())
            .collect();

        for id in due {
            self.pending_removals.remove(&id);
            let result = self.collection.remove(&id);
            self.persist(result);
        }
    }

    /// Earliest pending deadline, for sizing the event-loop poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_removals.values().min().copied()
    }

    // ---- view -----------------------------------------------------------

    pub fn view(&self) -> ViewModel {
        let disappearing = self.pending_removals.keys().cloned().collect();
        ViewModel::derive(&self.collection, &disappearing)
    }

    pub fn collection(&self) -> &TaskCollection {
        &self.collection
    }

    /// Persistence is assumed to succeed; a failure is logged and the
    /// session keeps running on the in-memory state.
    fn persist(&self, result: Result<(), StoreError>) {
        if let Err(err) = result {
            error!(%err, "failed to persist tasks");
        }
    }
}
