//! Immutable shared values.
//!
//! [`Frozen`] is the single freeze capability used wherever a value crosses
//! the manager boundary: caller values are frozen when they are captured by
//! `add_item`/`update_item_value`, and snapshots hand out the same frozen
//! values. A `Frozen<T>` owns its `T` outright and never exposes `&mut T`, so
//! nothing reachable from it can change after it is created, however deeply
//! nested the payload is.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A deeply immutable, cheaply clonable value.
///
/// Clones share the same allocation. Since there is no mutable access, sharing
/// is invisible to callers: two clones always compare equal and stay equal.
///
/// ```
/// use serde_json::json;
/// use sticky_order::Frozen;
///
/// let mut source = json!({"nested": {"n": 1}});
/// let frozen = Frozen::new(source.clone());
///
/// source["nested"]["n"] = json!(2);
/// assert_eq!(frozen["nested"]["n"], json!(1));
/// ```
///
/// Mutation through a frozen value does not compile:
///
/// ```compile_fail
/// use serde_json::json;
/// use sticky_order::Frozen;
///
/// let frozen = Frozen::new(json!({"n": 1}));
/// frozen["n"] = json!(2);
/// ```
pub struct Frozen<T>(Arc<T>);

impl<T> Frozen<T> {
    /// Freezes `value`, taking ownership so that no outside handle to it remains.
    pub fn new(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Returns a mutable copy of the frozen value.
    pub fn thaw(&self) -> T
    where
        T: Clone,
    {
        T::clone(&self.0)
    }

    /// Returns true if both handles point at the same frozen allocation.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }
}

impl Frozen<serde_json::Value> {
    /// Returns true if the frozen JSON value is `null`.
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }
}

impl<T> Clone for Frozen<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Deref for Frozen<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for Frozen<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Frozen<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Default> Default for Frozen<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: PartialEq> PartialEq for Frozen<T> {
    fn eq(&self, other: &Self) -> bool {
        Frozen::ptr_eq(self, other) || *self.0 == *other.0
    }
}

impl<T: Eq> Eq for Frozen<T> {}

impl<T: fmt::Debug> fmt::Debug for Frozen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: fmt::Display> fmt::Display for Frozen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: Serialize> Serialize for Frozen<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Frozen<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Frozen::new)
    }
}
