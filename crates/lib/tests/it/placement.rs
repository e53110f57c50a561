//! Placement tests
//!
//! Hints order items inside a group; the order between groups is drawn once
//! and then replayed by every manager sharing the same storage.

use std::collections::HashSet;

use sticky_order::{OrderManager, ScriptedRandom, persistence::InMemory};

use crate::helpers::*;

#[test]
fn test_order_hint_within_group_is_respected() {
    let storage = InMemory::new();
    let mut manager = open(&storage);
    manager.add_item(item("planets", "mercury", -1.0, "Mercury")).unwrap();
    manager.add_item(item("planets", "earth", 1.0, "Earth")).unwrap();
    manager.add_item(item("planets", "venus", 0.0, "Venus")).unwrap();
    manager.add_item(item("planets", "mars", 1.1, "Mars")).unwrap();

    assert_eq!(ids(&manager), vec!["mercury", "venus", "earth", "mars"]);
}

#[test]
fn test_equal_hints_keep_insertion_order() {
    let storage = InMemory::new();
    let mut manager = open(&storage);
    for id in ["first", "second", "third"] {
        manager.add_item(item("g", id, 5.0, id)).unwrap();
    }
    manager.add_item(item("g", "before", 4.0, "before")).unwrap();

    assert_eq!(ids(&manager), vec!["before", "first", "second", "third"]);
}

#[test]
fn test_hints_compare_numerically() {
    let storage = InMemory::new();
    let mut manager = open(&storage);
    manager.add_item(item("g", "ten", 10.0, "10")).unwrap();
    manager.add_item(item("g", "nine", 9.0, "9")).unwrap();
    manager.add_item(item("g", "hundred", 100.0, "100")).unwrap();

    assert_eq!(ids(&manager), vec!["nine", "ten", "hundred"]);
}

#[test]
fn test_cross_group_order_persists_regardless_of_insertion_order() {
    for seed in 0..10 {
        let storage = InMemory::new();

        let mut first = open_seeded(&storage, seed);
        first.add_item(item("planets", "mercury", -1.0, "Mercury")).unwrap();
        first.add_item(item("letters", "a", 0.0, &format!("A {seed}"))).unwrap();

        let mut second = open_seeded(&storage, seed + 1000);
        second.add_item(item("letters", "a", 0.0, &format!("A {seed}"))).unwrap();
        second.add_item(item("planets", "mercury", -1.0, "Mercury")).unwrap();

        assert_eq!(second.ordered_items(), first.ordered_items());
        assert_eq!(first.index_of("letters", "a"), second.index_of("letters", "a"));
    }
}

#[test]
fn test_new_group_boundary_is_random_not_hint_driven() {
    let orders: HashSet<Vec<String>> = [0, 1]
        .into_iter()
        .map(|pick| {
            let storage = InMemory::new();
            let mut manager = OrderManager::builder(storage)
                .random(ScriptedRandom::new([pick]))
                .build()
                .unwrap();
            manager.add_item(item("planets", "mercury", -1.0, "Mercury")).unwrap();
            manager.add_item(item("letters", "a", 100.0, "A")).unwrap();
            ids(&manager)
        })
        .collect();

    let expected: HashSet<Vec<String>> = [
        vec!["a".to_string(), "mercury".to_string()],
        vec!["mercury".to_string(), "a".to_string()],
    ]
    .into_iter()
    .collect();
    assert_eq!(orders, expected);
}

#[test]
fn test_hints_respected_within_groups_but_not_across() {
    for seed in 0..10 {
        let storage = InMemory::new();

        let runs: Vec<_> = (0..2)
            .map(|run| {
                let mut manager = open_seeded(&storage, seed * 10 + run);
                manager.add_item(item("numbers", "two", 12.0, "Two")).unwrap();
                manager.add_item(item("letters", "b", 1.0, "B")).unwrap();
                manager.add_item(item("planets", "mercury", -1.0, "Mercury")).unwrap();
                manager.add_item(item("planets", "venus", 0.0, "Venus")).unwrap();
                manager.add_item(item("letters", "a", 0.0, "A")).unwrap();
                manager.add_item(item("numbers", "zero", 10.0, "Zero")).unwrap();
                manager.add_item(item("numbers", "one", 11.0, "One")).unwrap();
                manager
            })
            .collect();

        assert_eq!(runs[1].ordered_items(), runs[0].ordered_items());

        let manager = &runs[0];
        assert_eq!(index(manager, "mercury"), index(manager, "venus") - 1);
        assert_eq!(index(manager, "a"), index(manager, "b") - 1);
        assert_eq!(index(manager, "zero"), index(manager, "one") - 1);
        assert_eq!(index(manager, "one"), index(manager, "two") - 1);
    }
}

#[test]
fn test_changed_hint_repositions_within_group_only() {
    for seed in 0..10 {
        let storage = InMemory::new();

        let runs: Vec<_> = [true, false]
            .into_iter()
            .map(|pluto_before_neptune| {
                let mut manager = open_seeded(&storage, seed);
                manager.add_item(item("letters", "b", 1.0, "B")).unwrap();
                manager.add_item(item("planets", "neptune", 8.0, "Neptune")).unwrap();
                let pluto_hint = if pluto_before_neptune { 7.9 } else { 9.0 };
                manager.add_item(item("planets", "pluto", pluto_hint, "Pluto")).unwrap();
                manager.add_item(item("letters", "a", 0.0, "A")).unwrap();

                assert_eq!(index(&manager, "a"), index(&manager, "b") - 1);
                if pluto_before_neptune {
                    assert_eq!(index(&manager, "pluto"), index(&manager, "neptune") - 1);
                } else {
                    assert_eq!(index(&manager, "neptune"), index(&manager, "pluto") - 1);
                }
                manager
            })
            .collect();

        let (before, after) = (&runs[0], &runs[1]);
        assert_eq!(index(before, "a"), index(after, "a"));
        assert_eq!(index(before, "b"), index(after, "b"));
        assert_eq!(index(before, "neptune"), index(after, "pluto"));
        assert_eq!(index(before, "pluto"), index(after, "neptune"));
    }
}

#[test]
fn test_move_survives_readd_with_same_hint() {
    let storage = InMemory::new();
    let mut manager = open(&storage);
    manager.add_item(item("g", "low", 0.0, "low")).unwrap();
    manager.add_item(item("g", "high", 10.0, "high")).unwrap();
    assert!(manager.move_item(0, 1));

    manager.add_item(item("g", "low", 0.0, "low")).unwrap();
    manager.add_item(item("g", "high", 10.0, "high")).unwrap();
    assert_eq!(ids(&manager), vec!["high", "low"]);

    // a different hint is a real change and is placed by hint again
    manager.add_item(item("g", "low", -1.0, "low")).unwrap();
    assert_eq!(ids(&manager), vec!["low", "high"]);
}

#[test]
fn test_third_group_lands_on_a_block_boundary() {
    for pick in 0..3 {
        let storage = InMemory::new();
        let mut manager = OrderManager::builder(storage)
            .random(ScriptedRandom::new([0, pick]))
            .build()
            .unwrap();
        manager.add_item(item("x", "x1", 0.0, "x1")).unwrap();
        manager.add_item(item("x", "x2", 1.0, "x2")).unwrap();
        manager.add_item(item("y", "y1", 0.0, "y1")).unwrap();
        manager.add_item(item("z", "z1", 0.0, "z1")).unwrap();

        // y went in front of x; z never splits a block
        let order = ids(&manager);
        let expected: Vec<&str> = match pick {
            0 => vec!["z1", "y1", "x1", "x2"],
            1 => vec!["y1", "z1", "x1", "x2"],
            _ => vec!["y1", "x1", "x2", "z1"],
        };
        assert_eq!(order, expected);
    }
}

#[test]
fn test_new_group_after_cross_group_move_lands_between_runs() {
    for pick in 0..4 {
        let storage = InMemory::new();
        let mut manager = OrderManager::builder(storage)
            .random(ScriptedRandom::new([1, pick]))
            .build()
            .unwrap();
        manager.add_item(item("a", "a1", 0.0, "a1")).unwrap();
        manager.add_item(item("b", "b1", 0.0, "b1")).unwrap();
        manager.add_item(item("a", "a2", 1.0, "a2")).unwrap();
        assert_eq!(ids(&manager), vec!["a1", "a2", "b1"]);

        // splits a into two runs around b
        assert!(manager.move_item(0, 2));
        assert_eq!(ids(&manager), vec!["a2", "b1", "a1"]);

        manager.add_item(item("c", "c1", 0.0, "c1")).unwrap();
        let expected: Vec<&str> = match pick {
            0 => vec!["c1", "a2", "b1", "a1"],
            1 => vec!["a2", "c1", "b1", "a1"],
            2 => vec!["a2", "b1", "c1", "a1"],
            _ => vec!["a2", "b1", "a1", "c1"],
        };
        assert_eq!(ids(&manager), expected);
    }
}
