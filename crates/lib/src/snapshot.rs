//! Immutable views of the visible order.

use std::ops::Deref;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::item::Item;
use crate::state::Record;

/// The visible order at one point in time.
///
/// A snapshot is immutable: it derefs to `[Item]`, never to `&mut [Item]`, and
/// items only expose their fields by shared reference. Clones share storage.
/// Later mutations of the manager build a new snapshot and leave every
/// previously returned one untouched.
///
/// ```
/// use serde_json::json;
/// use sticky_order::{Item, OrderManager, persistence::InMemory};
///
/// let mut manager = OrderManager::open(InMemory::new())?;
/// manager.add_item(Item::new("g", "a", 0.0, json!(1)))?;
/// let before = manager.ordered_items();
///
/// manager.remove_item("g", "a");
/// assert_eq!(before.len(), 1);
/// assert!(manager.ordered_items().is_empty());
/// # Ok::<(), sticky_order::Error>(())
/// ```
///
/// Writing into a snapshot does not compile:
///
/// ```compile_fail
/// use serde_json::json;
/// use sticky_order::{Item, OrderManager, persistence::InMemory};
///
/// let mut manager = OrderManager::open(InMemory::new()).unwrap();
/// manager.add_item(Item::new("g", "a", 0.0, json!(1))).unwrap();
/// let snapshot = manager.ordered_items();
/// snapshot[0] = Item::new("g", "b", 0.0, json!(2));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    items: Arc<[Item]>,
}

impl Snapshot {
    pub(crate) fn capture<'a>(records: impl Iterator<Item = &'a Record>) -> Self {
        Self {
            items: records.map(Record::to_item).collect(),
        }
    }

    /// The item ids in order.
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(Item::id).collect()
    }

    /// `(group_id, id)` pairs in order.
    pub fn keys(&self) -> Vec<(&str, &str)> {
        self.items.iter().map(|i| (i.group_id(), i.id())).collect()
    }

    /// Index of the item with this key, if present.
    pub fn index_of(&self, group_id: &str, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.has_key(group_id, id))
    }

    /// Copies the items out into a vector the caller may modify freely.
    pub fn to_vec(&self) -> Vec<Item> {
        self.items.to_vec()
    }
}

impl Deref for Snapshot {
    type Target = [Item];

    fn deref(&self) -> &[Item] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Serialize for Snapshot {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.items.iter())
    }
}
