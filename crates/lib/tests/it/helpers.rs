use serde_json::json;
use sticky_order::{Item, OrderManager, SeededRandom, persistence::InMemory};

// ==========================
// CORE TEST FACTORIES
// ==========================

/// Creates an item whose value is `{"v": <value>}`.
pub fn item(group_id: &str, id: &str, order_hint: f64, value: &str) -> Item {
    Item::new(group_id, id, order_hint, json!({ "v": value }))
}

/// Opens a manager over `storage` with the default random source.
pub fn open(storage: &InMemory) -> OrderManager {
    OrderManager::open(storage.clone()).expect("Failed to open manager")
}

/// Opens a manager over `storage` with a seeded random source.
pub fn open_seeded(storage: &InMemory, seed: u64) -> OrderManager {
    OrderManager::builder(storage.clone())
        .random(SeededRandom::new(seed))
        .build()
        .expect("Failed to open manager")
}

/// Ids of the visible order.
pub fn ids(manager: &OrderManager) -> Vec<String> {
    manager
        .ordered_items()
        .ids()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Position of `id` in the visible order, panicking if it is missing.
pub fn index(manager: &OrderManager, id: &str) -> usize {
    manager
        .ordered_items()
        .iter()
        .position(|i| i.id() == id)
        .unwrap_or_else(|| panic!("item {id} not found"))
}

/// Adds `one`, `two`, `three` with hints 1, 2, 3 to the `numbers` group.
pub fn add_numbers(manager: &mut OrderManager) {
    for (id, hint) in [("one", 1.0), ("two", 2.0), ("three", 3.0)] {
        manager
            .add_item(item("numbers", id, hint, id))
            .expect("Failed to add item");
    }
}
