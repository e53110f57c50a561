//! Persisted records and the state written through a [`Persistence`](crate::Persistence) adapter.
//!
//! The persisted state is a flat, positional sequence: the index of a record
//! in [`PersistedState::records`] *is* its order. Loading never re-sorts.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::STATE_VERSION;
use crate::frozen::Frozen;
use crate::item::Item;
use crate::persistence::PersistenceError;

/// One persisted entry, live or removed.
///
/// Besides the item fields, a record carries a sequence marker (`seq`), a
/// creation counter used for tie-breaking and culling priority, and a
/// `removed` flag. Removed records are tombstones: they keep their position
/// and remembered hint so the group's placement stays stable, but drop their
/// value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    group_id: String,
    id: String,
    order_hint: f64,
    seq: u64,
    #[serde(default, skip_serializing_if = "Frozen::is_null")]
    value: Frozen<Value>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    removed: bool,
}

impl Record {
    /// Creates a live record.
    pub fn live(
        group_id: impl Into<String>,
        id: impl Into<String>,
        order_hint: f64,
        seq: u64,
        value: Frozen<Value>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            id: id.into(),
            order_hint,
            seq,
            value,
            removed: false,
        }
    }

    /// Creates a tombstone.
    pub fn tombstone(
        group_id: impl Into<String>,
        id: impl Into<String>,
        order_hint: f64,
        seq: u64,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            id: id.into(),
            order_hint,
            seq,
            value: Frozen::default(),
            removed: true,
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The hint this record was last placed with.
    pub fn order_hint(&self) -> f64 {
        self.order_hint
    }

    /// The sequence marker. Lower is older.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn is_tombstone(&self) -> bool {
        self.removed
    }

    pub fn is_live(&self) -> bool {
        !self.removed
    }

    /// Returns true if this record has the given key.
    pub fn has_key(&self, group_id: &str, id: &str) -> bool {
        self.group_id == group_id && self.id == id
    }

    /// Projects a live record to the public item shape.
    pub fn to_item(&self) -> Item {
        Item::from_parts(
            self.group_id.clone(),
            self.id.clone(),
            self.order_hint,
            self.value.clone(),
        )
    }

    pub(crate) fn set_value(&mut self, value: Frozen<Value>) {
        self.value = value;
    }

    /// Turns a live record into a tombstone, returning the value it held.
    pub(crate) fn bury(&mut self) -> Frozen<Value> {
        self.removed = true;
        std::mem::take(&mut self.value)
    }

    /// Brings a tombstone back to life with a new value and sequence marker.
    pub(crate) fn revive(&mut self, value: Frozen<Value>, seq: u64) {
        self.removed = false;
        self.value = value;
        self.seq = seq;
    }
}

fn default_version() -> u32 {
    STATE_VERSION
}

/// The complete state stored under one persistence key.
///
/// ```
/// use sticky_order::PersistedState;
///
/// let state: PersistedState = serde_json::from_str(
///     r#"{"nextSeq": 3, "records": [
///         {"groupId": "g", "id": "a", "orderHint": 0, "seq": 1, "value": {"v": 1}},
///         {"groupId": "g", "id": "b", "orderHint": 1, "seq": 2, "removed": true}
///     ]}"#,
/// )?;
/// assert_eq!(state.live_count(), 1);
/// assert_eq!(state.tombstone_count(), 1);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    next_seq: u64,
    #[serde(default)]
    records: Vec<Record>,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            next_seq: 0,
            records: Vec::new(),
        }
    }
}

impl PersistedState {
    /// Creates a state from records in positional order.
    pub fn new(next_seq: u64, records: Vec<Record>) -> Self {
        Self {
            version: STATE_VERSION,
            next_seq,
            records,
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// The sequence marker the next created entry will receive.
    pub fn next_seq(&self) -> u64 {
        self.next_seq
    }

    /// All records, live and tombstoned, in positional order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Total number of records, counting tombstones.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn live_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_live()).count()
    }

    pub fn tombstone_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_tombstone()).count()
    }

    /// The live records projected to items, in order.
    pub fn items(&self) -> Vec<Item> {
        self.records
            .iter()
            .filter(|r| r.is_live())
            .map(Record::to_item)
            .collect()
    }

    /// Fails if the state was written by a newer format version.
    ///
    /// Older and equal versions are accepted as they are.
    pub fn check_version(&self) -> Result<(), PersistenceError> {
        if self.version > STATE_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: self.version,
                supported: STATE_VERSION,
            });
        }
        Ok(())
    }

    /// Repairs state that was written by hand or by an older writer.
    ///
    /// Duplicate keys keep their first occurrence. `next_seq` is raised past the
    /// highest stored marker so new entries always sort as newer. Positional
    /// order is otherwise left exactly as stored.
    pub fn sanitize(mut self) -> Self {
        let mut seen = HashSet::new();
        let before = self.records.len();
        self.records
            .retain(|r| seen.insert((r.group_id.clone(), r.id.clone())));
        if self.records.len() != before {
            tracing::warn!(
                dropped = before - self.records.len(),
                "Dropped duplicate records from persisted order state"
            );
        }

        if let Some(max_seq) = self.records.iter().map(|r| r.seq).max() {
            self.next_seq = self.next_seq.max(max_seq.saturating_add(1));
        }
        self
    }

    pub(crate) fn into_parts(self) -> (u64, Vec<Record>) {
        (self.next_seq, self.records)
    }
}
