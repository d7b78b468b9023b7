//! Pure state-to-view-model derivation.
//!
//! Nothing here touches a terminal; the TUI layer materializes the
//! [`ViewModel`] and tests exercise it directly.

use crate::collection::TaskCollection;
use std::collections::HashSet;

/// One renderable list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: String,
    pub title: String,
    pub checked: bool,
    /// A removal is scheduled for this item; render it fading out.
    pub disappearing: bool,
}

/// Which empty-state text to show, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyMessage {
    /// A filter is active and matched nothing.
    NoMatch,
    /// The collection itself is empty.
    NoItems,
}

impl EmptyMessage {
    pub fn text(self) -> &'static str {
        match self {
            EmptyMessage::NoMatch => "Tasks not found",
            EmptyMessage::NoItems => "There are no tasks yet",
        }
    }
}

/// Everything the rendered surface needs, derived from current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    /// Entries for the currently active view (filtered if a query is set).
    pub items: Vec<ItemView>,
    /// Full collection size, not the filtered count.
    pub total: usize,
    /// Show the delete-all affordance iff any task exists.
    pub show_delete_all: bool,
    pub empty_message: Option<EmptyMessage>,
}

impl ViewModel {
    /// Derive the view from the collection plus the set of item ids with
    /// a removal in flight.
    pub fn derive(collection: &TaskCollection, disappearing: &HashSet<String>) -> Self {
        let visible = collection.active_view();

        let items: Vec<ItemView> = visible
            .iter()
            .map(|task| ItemView {
                id: task.id.clone(),
                title: task.title.clone(),
                checked: task.is_checked,
                disappearing: disappearing.contains(&task.id),
            })
            .collect();

        // Precedence: a filter that matched nothing wins over the plain
        // empty-collection message.
        let empty_message = if collection.query().is_some() && items.is_empty() {
            Some(EmptyMessage::NoMatch)
        } else if collection.is_empty() {
            Some(EmptyMessage::NoItems)
        } else {
            None
        };

        Self {
            items,
            total: collection.len(),
            show_delete_all: !collection.is_empty(),
            empty_message,
        }
    }
}
