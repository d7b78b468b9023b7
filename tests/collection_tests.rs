//! Integration tests for the task collection.
//!
//! These verify the core list operations and the invariant that the
//! in-memory collection and the persisted value agree after every
//! mutation, using an in-memory store.

use checklist::collection::TaskCollection;
use checklist::store::Store;

/// Helper to create a collection over a fresh in-memory store.
fn setup() -> TaskCollection {
    let store = Store::open_in_memory().expect("Failed to create in-memory store");
    TaskCollection::load(store)
}

/// Assert the memory/store agreement invariant.
fn assert_in_sync(collection: &TaskCollection) {
    assert_eq!(collection.persisted(), collection.tasks().to_vec());
}

mod add_tests {
    use super::*;

    #[test]
    fn add_appends_unchecked_record_with_untrimmed_title() {
        let mut collection = setup();

        collection.add("  Write report ").expect("add");

        assert_eq!(collection.len(), 1);
        let task = &collection.tasks()[0];
        assert_eq!(task.title, "  Write report ");
        assert!(!task.is_checked);
        assert!(!task.id.is_empty());
        assert_in_sync(&collection);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut collection = setup();

        collection.add("first").expect("add");
        collection.add("second").expect("add");
        collection.add("third").expect("add");

        let titles: Vec<&str> = collection.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
        assert_in_sync(&collection);
    }

    #[test]
    fn add_empty_or_whitespace_title_is_a_no_op() {
        let mut collection = setup();

        collection.add("").expect("add");
        collection.add("   ").expect("add");

        assert_eq!(collection.len(), 0);
        assert_in_sync(&collection);
    }

    #[test]
    fn added_tasks_have_unique_ids() {
        let mut collection = setup();

        collection.add("a").expect("add");
        collection.add("a").expect("add");

        assert_ne!(collection.tasks()[0].id, collection.tasks()[1].id);
    }
}

mod remove_tests {
    use super::*;

    #[test]
    fn remove_deletes_only_the_matching_record() {
        let mut collection = setup();
        collection.add("keep").expect("add");
        collection.add("drop").expect("add");
        let drop_id = collection.tasks()[1].id.clone();

        collection.remove(&drop_id).expect("remove");

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.tasks()[0].title, "keep");
        assert_in_sync(&collection);
    }

    #[test]
    fn remove_unknown_id_leaves_collection_unchanged() {
        let mut collection = setup();
        collection.add("only").expect("add");
        let before = collection.tasks().to_vec();

        collection.remove("no-such-id").expect("remove");

        assert_eq!(collection.tasks(), before.as_slice());
        assert_in_sync(&collection);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut collection = setup();
        collection.add("once").expect("add");
        let id = collection.tasks()[0].id.clone();

        collection.remove(&id).expect("remove");
        collection.remove(&id).expect("remove again");

        assert_eq!(collection.len(), 0);
        assert_in_sync(&collection);
    }
}

mod toggle_tests {
    use super::*;

    #[test]
    fn toggle_flips_only_the_checked_flag() {
        let mut collection = setup();
        collection.add("task").expect("add");
        let id = collection.tasks()[0].id.clone();

        collection.toggle_checked(&id).expect("toggle");

        let task = &collection.tasks()[0];
        assert!(task.is_checked);
        assert_eq!(task.id, id);
        assert_eq!(task.title, "task");
        assert_in_sync(&collection);
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let mut collection = setup();
        collection.add("task").expect("add");
        let before = collection.tasks().to_vec();
        let id = before[0].id.clone();

        collection.toggle_checked(&id).expect("toggle");
        collection.toggle_checked(&id).expect("toggle back");

        assert_eq!(collection.tasks(), before.as_slice());
        assert_in_sync(&collection);
    }

    #[test]
    fn toggle_unknown_id_is_a_no_op() {
        let mut collection = setup();
        collection.add("task").expect("add");
        let before = collection.tasks().to_vec();

        collection.toggle_checked("missing").expect("toggle");

        assert_eq!(collection.tasks(), before.as_slice());
        assert_in_sync(&collection);
    }
}

mod clear_tests {
    use super::*;

    #[test]
    fn clear_all_empties_the_collection_and_the_store() {
        let mut collection = setup();
        collection.add("one").expect("add");
        collection.add("two").expect("add");

        collection.clear_all().expect("clear");

        assert!(collection.is_empty());
        assert_in_sync(&collection);
    }

    #[test]
    fn clear_all_resets_an_active_filter() {
        let mut collection = setup();
        collection.add("Milk").expect("add");
        collection.filter_by_substring("mil");

        collection.clear_all().expect("clear");

        assert!(collection.query().is_none());
        assert!(collection.active_view().is_empty());
    }
}

mod filter_tests {
    use super::*;

    #[test]
    fn filter_matches_substring_case_insensitively() {
        let mut collection = setup();
        collection.add("Buy milk").expect("add");
        collection.add("Call mom").expect("add");

        collection.filter_by_substring("MILK");

        let visible: Vec<&str> = collection
            .active_view()
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(visible, vec!["Buy milk"]);
    }

    #[test]
    fn reset_filter_restores_the_full_collection() {
        let mut collection = setup();
        collection.add("Buy milk").expect("add");
        collection.add("Call mom").expect("add");
        collection.filter_by_substring("milk");

        collection.reset_filter();

        assert!(collection.query().is_none());
        assert_eq!(collection.active_view().len(), 2);
    }

    #[test]
    fn filtered_view_tracks_live_mutations() {
        let mut collection = setup();
        collection.add("Buy milk").expect("add");
        collection.filter_by_substring("milk");
        collection.add("More milk").expect("add");

        // The view is recomputed from the live collection, never a
        // stale snapshot.
        assert_eq!(collection.active_view().len(), 2);

        let id = collection.tasks()[0].id.clone();
        collection.remove(&id).expect("remove");
        assert_eq!(collection.active_view().len(), 1);
    }

    #[test]
    fn filtering_does_not_touch_the_persisted_value() {
        let mut collection = setup();
        collection.add("Buy milk").expect("add");
        let persisted_before = collection.persisted();

        collection.filter_by_substring("xyz");
        collection.reset_filter();

        assert_eq!(collection.persisted(), persisted_before);
    }
}
