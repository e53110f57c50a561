//! OrderManager facade tests
//!
//! Basic add/remove/update/move behaviour, including the no-op handling of
//! missing keys and out-of-range indexes.

use serde_json::json;
use sticky_order::persistence::InMemory;

use crate::helpers::*;

#[test]
fn test_add_and_remove_item() {
    let storage = InMemory::new();
    let mut manager = open(&storage);

    let first = manager.ordered_items();
    assert!(first.is_empty());

    manager.add_item(item("blah", "foo", 0.0, "foo")).unwrap();
    let second = manager.ordered_items();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0], item("blah", "foo", 0.0, "foo"));

    // Earlier snapshot is untouched
    assert!(first.is_empty());

    assert!(manager.remove_item("blah", "bar").is_none());
    assert_eq!(manager.ordered_items().len(), 1);
    let removed = manager.remove_item("blah", "foo").unwrap();
    assert_eq!(removed.value(), &json!({"v": "foo"}));
    assert!(manager.ordered_items().is_empty());

    assert_eq!(second.len(), 1);
}

#[test]
fn test_readding_identical_item_is_idempotent() {
    let storage = InMemory::new();
    let mut manager = open(&storage);
    manager.add_item(item("g", "a", 0.0, "A")).unwrap();
    manager.add_item(item("g", "b", 1.0, "B")).unwrap();
    let before = manager.ordered_items();
    let stored_before = storage.raw();

    manager.add_item(item("g", "a", 0.0, "A")).unwrap();

    assert_eq!(manager.ordered_items(), before);
    assert_eq!(storage.raw(), stored_before);
}

#[test]
fn test_readd_with_same_hint_updates_value_only() {
    let storage = InMemory::new();
    let mut manager = open(&storage);
    add_numbers(&mut manager);

    manager.add_item(item("numbers", "two", 2.0, "TWO")).unwrap();

    assert_eq!(ids(&manager), vec!["one", "two", "three"]);
    assert_eq!(
        manager.get_item("numbers", "two").unwrap().value(),
        &json!({"v": "TWO"})
    );
}

#[test]
fn test_remove_item_by_index() {
    let storage = InMemory::new();
    let mut manager = open(&storage);
    add_numbers(&mut manager);

    let removed = manager.remove_item_by_index(1).unwrap();
    assert_eq!(removed.id(), "two");
    assert_eq!(ids(&manager), vec!["one", "three"]);
}

#[test]
fn test_remove_item_by_index_out_of_range_is_noop() {
    let storage = InMemory::new();
    let mut manager = open(&storage);
    add_numbers(&mut manager);
    let writes = storage.write_count();

    assert!(manager.remove_item_by_index(3).is_none());
    assert!(manager.remove_item_by_index(usize::MAX).is_none());

    assert_eq!(ids(&manager), vec!["one", "two", "three"]);
    assert_eq!(storage.write_count(), writes);
}

#[test]
fn test_update_item_value() {
    let storage = InMemory::new();
    let mut manager = open(&storage);
    add_numbers(&mut manager);

    assert!(manager.update_item_value("numbers", "one", json!({"v": "uno"})));
    let updated = manager.get_item("numbers", "one").unwrap();
    assert_eq!(updated.value(), &json!({"v": "uno"}));
    assert_eq!(updated.order_hint(), 1.0);
    assert_eq!(ids(&manager), vec!["one", "two", "three"]);

    // persisted
    let reopened = open(&storage);
    assert_eq!(
        reopened.get_item("numbers", "one").unwrap().value(),
        &json!({"v": "uno"})
    );
}

#[test]
fn test_update_item_value_by_index() {
    let storage = InMemory::new();
    let mut manager = open(&storage);
    add_numbers(&mut manager);

    assert!(manager.update_item_value_by_index(2, json!("three!")));
    assert_eq!(manager.ordered_items()[2].value(), &json!("three!"));
}

#[test]
fn test_update_missing_is_noop() {
    let storage = InMemory::new();
    let mut manager = open(&storage);
    add_numbers(&mut manager);
    manager.remove_item("numbers", "two");
    let writes = storage.write_count();

    assert!(!manager.update_item_value("numbers", "four", json!(4)));
    // removed items cannot be updated either
    assert!(!manager.update_item_value("numbers", "two", json!(2)));
    assert!(!manager.update_item_value_by_index(2, json!(3)));

    assert_eq!(storage.write_count(), writes);
    assert!(manager.get_item("numbers", "two").is_none());
}

#[test]
fn test_move_item_across_reopens() {
    let storage = InMemory::new();

    {
        let mut manager = open(&storage);
        add_numbers(&mut manager);
        assert_eq!(ids(&manager), vec!["one", "two", "three"]);
        assert!(manager.move_item(1, 0));
        assert_eq!(ids(&manager), vec!["two", "one", "three"]);
    }
    {
        let mut manager = open(&storage);
        add_numbers(&mut manager);
        assert_eq!(ids(&manager), vec!["two", "one", "three"]);
        assert!(manager.move_item(1, 0));
        assert_eq!(ids(&manager), vec!["one", "two", "three"]);
    }
    {
        let mut manager = open(&storage);
        add_numbers(&mut manager);
        assert_eq!(ids(&manager), vec!["one", "two", "three"]);
        assert!(manager.move_item(0, 1));
        assert_eq!(ids(&manager), vec!["two", "one", "three"]);
    }
    {
        let mut manager = open(&storage);
        add_numbers(&mut manager);
        assert_eq!(ids(&manager), vec!["two", "one", "three"]);
        assert!(manager.move_item(2, 1));
        assert_eq!(ids(&manager), vec!["two", "three", "one"]);
    }
    {
        let mut manager = open(&storage);
        add_numbers(&mut manager);
        assert_eq!(ids(&manager), vec!["two", "three", "one"]);
        assert!(manager.move_item(0, 2));
        assert_eq!(ids(&manager), vec!["three", "one", "two"]);
    }
}

#[test]
fn test_move_item_out_of_range_is_noop() {
    let storage = InMemory::new();
    let mut manager = open(&storage);
    add_numbers(&mut manager);
    let writes = storage.write_count();

    assert!(!manager.move_item(3, 0));
    assert!(!manager.move_item(0, 3));
    assert!(manager.move_item(1, 1));

    assert_eq!(ids(&manager), vec!["one", "two", "three"]);
    assert_eq!(storage.write_count(), writes);
}

#[test]
fn test_move_skips_over_tombstones() {
    let storage = InMemory::new();
    let mut manager = open(&storage);
    add_numbers(&mut manager);
    manager.add_item(item("numbers", "four", 4.0, "four")).unwrap();
    manager.remove_item("numbers", "two");
    assert_eq!(ids(&manager), vec!["one", "three", "four"]);

    assert!(manager.move_item(0, 2));
    assert_eq!(ids(&manager), vec!["three", "four", "one"]);
    assert!(manager.move_item(2, 1));
    assert_eq!(ids(&manager), vec!["three", "one", "four"]);
}

#[test]
fn test_index_of_and_contains() {
    let storage = InMemory::new();
    let mut manager = open(&storage);
    add_numbers(&mut manager);
    manager.remove_item("numbers", "one");

    assert!(!manager.contains("numbers", "one"));
    assert!(manager.contains("numbers", "two"));
    assert_eq!(manager.index_of("numbers", "three"), Some(1));
    assert_eq!(manager.index_of("numbers", "one"), None);
    assert_eq!(manager.len(), 2);
}
