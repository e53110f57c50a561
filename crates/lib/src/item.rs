//! Caller-facing items.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::frozen::Frozen;

/// An item in the ordered collection.
///
/// `(group_id, id)` is the unique key. The order hint only orders items that
/// share a group; nothing about it influences where a group sits relative to
/// other groups.
///
/// The value is frozen on construction: an `Item` owns its payload and only
/// hands out shared references to it.
///
/// ```
/// use serde_json::json;
/// use sticky_order::Item;
///
/// let item = Item::new("planets", "earth", 1.0, json!({"v": "Earth"}));
/// assert_eq!(item.group_id(), "planets");
/// assert_eq!(item.value()["v"], "Earth");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    group_id: String,
    id: String,
    order_hint: f64,
    value: Frozen<Value>,
}

impl Item {
    /// Creates an item, freezing `value`.
    pub fn new(
        group_id: impl Into<String>,
        id: impl Into<String>,
        order_hint: f64,
        value: Value,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            id: id.into(),
            order_hint,
            value: Frozen::new(value),
        }
    }

    pub(crate) fn from_parts(
        group_id: String,
        id: String,
        order_hint: f64,
        value: Frozen<Value>,
    ) -> Self {
        Self {
            group_id,
            id,
            order_hint,
            value,
        }
    }

    /// The group this item belongs to.
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// The item id, unique within its group.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The numeric hint ordering this item inside its group.
    pub fn order_hint(&self) -> f64 {
        self.order_hint
    }

    /// The item's value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The item's value as a shareable frozen handle.
    pub fn frozen_value(&self) -> &Frozen<Value> {
        &self.value
    }

    /// Returns a copy of this item with a different value.
    pub fn with_value(&self, value: Value) -> Self {
        Self {
            value: Frozen::new(value),
            ..self.clone()
        }
    }

    /// Returns true if this item has the given key.
    pub fn has_key(&self, group_id: &str, id: &str) -> bool {
        self.group_id == group_id && self.id == id
    }

    pub(crate) fn into_parts(self) -> (String, String, f64, Frozen<Value>) {
        (self.group_id, self.id, self.order_hint, self.value)
    }
}
