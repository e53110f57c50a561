//! The order manager facade.
//!
//! [`OrderManager`] owns the entry store and the snapshot cache, and runs every
//! mutation through the same pipeline: place, cull, persist, invalidate.
//! Persistence failures are logged and otherwise ignored; the in-memory order
//! stays authoritative for the rest of the session.

use std::cell::OnceCell;
use std::fmt;

use serde_json::Value;
use tracing::{debug, info, trace, warn};

use crate::Result;
use crate::config::OrderManagerConfig;
use crate::cull::CullPolicy;
use crate::frozen::Frozen;
use crate::item::Item;
use crate::persistence::Persistence;
use crate::placement::{self, Placement};
use crate::random::RandomSource;
use crate::snapshot::Snapshot;
use crate::state::{PersistedState, Record};
use crate::store::EntryStore;

mod builder;
mod errors;

pub use builder::OrderManagerBuilder;
pub use errors::OrderError;

/// Counts describing the manager's current records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderStats {
    /// Visible items.
    pub live: usize,
    /// Retained tombstones of removed items.
    pub tombstones: usize,
    /// The cull budget.
    pub max_limit: usize,
}

/// A user-reorderable, persisted collection of items.
///
/// Items are ordered by their hint inside a group. Where a group sits relative
/// to other groups is decided at random the first time the group is seen and
/// then stored, so every manager opened over the same storage replays the same
/// order instead of rolling again.
///
/// All operations are synchronous and run to completion. Operations on a
/// missing key or an out-of-range index do nothing and report that through
/// their return value.
///
/// ```
/// use serde_json::json;
/// use sticky_order::{Item, OrderManager, persistence::InMemory};
///
/// let mut manager = OrderManager::open(InMemory::new())?;
/// for (id, hint) in [("one", 1.0), ("two", 2.0), ("three", 3.0)] {
///     manager.add_item(Item::new("numbers", id, hint, json!({"v": id})))?;
/// }
/// assert_eq!(manager.ordered_items().ids(), vec!["one", "two", "three"]);
///
/// manager.move_item(1, 0);
/// assert_eq!(manager.ordered_items().ids(), vec!["two", "one", "three"]);
/// # Ok::<(), sticky_order::Error>(())
/// ```
pub struct OrderManager {
    persistence: Box<dyn Persistence>,
    config: OrderManagerConfig,
    cull: CullPolicy,
    random: Box<dyn RandomSource>,
    store: EntryStore,
    snapshot: OnceCell<Snapshot>,
}

impl OrderManager {
    /// Opens a manager over `persistence` with the default configuration.
    ///
    /// Fails only if stored state exists but cannot be read.
    pub fn open(persistence: impl Persistence + 'static) -> Result<Self> {
        Self::builder(persistence).build()
    }

    /// Starts building a manager over `persistence`.
    pub fn builder<P: Persistence + 'static>(persistence: P) -> OrderManagerBuilder<P> {
        OrderManagerBuilder::new(persistence)
    }

    pub(crate) fn from_parts(
        persistence: Box<dyn Persistence>,
        config: OrderManagerConfig,
        random: Box<dyn RandomSource>,
    ) -> Result<Self> {
        let store = Self::load(persistence.as_ref())?;
        Ok(Self {
            persistence,
            config,
            cull: CullPolicy::new(config.max_limit),
            random,
            store,
            snapshot: OnceCell::new(),
        })
    }

    fn load(persistence: &dyn Persistence) -> Result<EntryStore> {
        let state = persistence.get()?.unwrap_or_default();
        state.check_version()?;
        info!(
            records = state.len(),
            live = state.live_count(),
            "Loaded order state"
        );
        Ok(EntryStore::from_state(state))
    }

    /// The configuration this manager was built with.
    pub fn config(&self) -> &OrderManagerConfig {
        &self.config
    }

    /// Number of visible items.
    pub fn len(&self) -> usize {
        self.store.live_len()
    }

    /// Returns true if no item is visible.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live and tombstone counts alongside the configured `max_limit`.
    ///
    /// Counts reflect memory, which can hold more live items than the last
    /// persisted payload.
    pub fn stats(&self) -> OrderStats {
        OrderStats {
            live: self.store.live_len(),
            tombstones: self.store.tombstone_len(),
            max_limit: self.config.max_limit,
        }
    }

    /// Returns true if a visible item has this key.
    pub fn contains(&self, group_id: &str, id: &str) -> bool {
        self.store.live_position_of(group_id, id).is_some()
    }

    /// Returns the visible item with this key.
    pub fn get_item(&self, group_id: &str, id: &str) -> Option<Item> {
        self.store
            .live_position_of(group_id, id)
            .map(|position| self.store.record(position).to_item())
    }

    /// Returns the index of the item with this key in the visible order.
    pub fn index_of(&self, group_id: &str, id: &str) -> Option<usize> {
        self.store
            .live_position_of(group_id, id)
            .map(|position| self.store.live_index(position))
    }

    /// Returns the visible order.
    ///
    /// The snapshot is cached until the next mutation, so repeated calls are
    /// cheap and return equal snapshots.
    pub fn ordered_items(&self) -> Snapshot {
        self.snapshot
            .get_or_init(|| {
                trace!(live = self.store.live_len(), "Rebuilding order snapshot");
                Snapshot::capture(self.store.live())
            })
            .clone()
    }

    /// The state the next write would persist, after culling.
    pub fn persisted_state(&self) -> PersistedState {
        let plan = self.cull.plan(self.store.records());
        self.store.to_state(&plan)
    }

    /// Adds an item, or updates the item with the same key.
    ///
    /// - A new key is placed inside its group by hint, or, if its group has
    ///   never been seen, at a random boundary between existing groups.
    /// - An existing key with the same hint as last time only gets the new
    ///   value; its position is left alone, including any position set by
    ///   [`move_item`](Self::move_item).
    /// - An existing key with a different hint is moved within its group.
    /// - A removed key is revived in place if the hint matches its tombstone.
    ///
    /// Returns an error only for a non-finite hint.
    pub fn add_item(&mut self, item: Item) -> Result<()> {
        let hint = item.order_hint();
        if !hint.is_finite() {
            return Err(OrderError::InvalidOrderHint {
                group_id: item.group_id().to_string(),
                id: item.id().to_string(),
                hint,
            }
            .into());
        }

        let (group_id, id, hint, value) = item.into_parts();
        match self.store.position(&group_id, &id) {
            None => self.insert_new(group_id, id, hint, value),
            Some(position) => {
                let record = self.store.record(position);
                let same_hint = record.order_hint() == hint;
                let tombstone = record.is_tombstone();
                match (same_hint, tombstone) {
                    (true, false) => self.store.record_mut(position).set_value(value),
                    (true, true) => {
                        let seq = self.store.take_seq();
                        self.store.record_mut(position).revive(value, seq);
                        debug!(
                            group_id = %group_id,
                            id = %id,
                            position,
                            "Revived removed item in place"
                        );
                    }
                    (false, _) => self.reposition(position, group_id, id, hint, value),
                }
            }
        }

        self.commit();
        Ok(())
    }

    fn insert_new(&mut self, group_id: String, id: String, hint: f64, value: Frozen<Value>) {
        let placement = placement::place(
            self.store.records(),
            &group_id,
            hint,
            self.random.as_mut(),
        );
        match placement {
            Placement::InGroup { index } => {
                debug!(
                    group_id = %group_id,
                    id = %id,
                    hint,
                    index,
                    "Placed item in existing group"
                );
            }
            Placement::NewBlock {
                index,
                choice,
                boundaries,
            } => {
                debug!(
                    group_id = %group_id,
                    id = %id,
                    index,
                    choice,
                    boundaries,
                    "Placed first item of new group"
                );
            }
        }

        let seq = self.store.take_seq();
        self.store
            .insert(placement.index(), Record::live(group_id, id, hint, seq, value));
    }

    fn reposition(
        &mut self,
        position: usize,
        group_id: String,
        id: String,
        hint: f64,
        value: Frozen<Value>,
    ) {
        let previous = self.store.remove(position);
        // A group with no other members keeps its block where it was.
        let index =
            placement::slot_in_group(self.store.records(), &group_id, hint).unwrap_or(position);
        debug!(
            group_id = %group_id,
            id = %id,
            from_hint = previous.order_hint(),
            to_hint = hint,
            position,
            index,
            "Repositioned item after hint change"
        );

        let seq = self.store.take_seq();
        self.store
            .insert(index, Record::live(group_id, id, hint, seq, value));
    }

    /// Removes the item with this key, returning it.
    ///
    /// A missing key is a no-op and returns `None`.
    pub fn remove_item(&mut self, group_id: &str, id: &str) -> Option<Item> {
        let position = self.store.live_position_of(group_id, id)?;
        Some(self.remove_at(position))
    }

    /// Removes the item at `index` in the visible order, returning it.
    ///
    /// An out-of-range index is a no-op and returns `None`.
    pub fn remove_item_by_index(&mut self, index: usize) -> Option<Item> {
        let Some(position) = self.store.live_position(index) else {
            debug!(index, len = self.len(), "Ignoring remove of out-of-range index");
            return None;
        };
        Some(self.remove_at(position))
    }

    fn remove_at(&mut self, position: usize) -> Item {
        let record = self.store.record_mut(position);
        let item = record.to_item();
        record.bury();
        debug!(group_id = item.group_id(), id = item.id(), "Removed item");
        self.commit();
        item
    }

    /// Replaces the value of the item with this key.
    ///
    /// The position and remembered hint are untouched. Returns `false` if the
    /// key is missing.
    pub fn update_item_value(&mut self, group_id: &str, id: &str, value: Value) -> bool {
        match self.store.live_position_of(group_id, id) {
            Some(position) => self.update_at(position, value),
            None => false,
        }
    }

    /// Replaces the value of the item at `index` in the visible order.
    ///
    /// Returns `false` if the index is out of range.
    pub fn update_item_value_by_index(&mut self, index: usize, value: Value) -> bool {
        match self.store.live_position(index) {
            Some(position) => self.update_at(position, value),
            None => false,
        }
    }

    fn update_at(&mut self, position: usize, value: Value) -> bool {
        self.store.record_mut(position).set_value(Frozen::new(value));
        self.commit();
        true
    }

    /// Moves the item at `from` so that it ends up at `to`.
    ///
    /// `to` is an index into the order *after* the item has been taken out, as
    /// with removing from one index of a vector and inserting at another. The
    /// item's remembered hint is unchanged, so re-adding it with the same hint
    /// keeps the moved position.
    ///
    /// Returns `false`, doing nothing, if either index is out of range.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        let len = self.len();
        if from >= len || to >= len {
            debug!(from, to, len, "Ignoring move with out-of-range index");
            return false;
        }
        if from == to {
            return true;
        }

        let Some(source) = self.store.live_position(from) else {
            return false;
        };
        let record = self.store.remove(source);
        let Some(target) = self.store.live_insertion_point(to) else {
            self.store.insert(source, record);
            return false;
        };
        debug!(
            group_id = record.group_id(),
            id = record.id(),
            from,
            to,
            "Moved item"
        );
        self.store.insert(target, record);

        self.commit();
        true
    }

    /// Discards the in-memory order and reads it again from persistence.
    ///
    /// The stored sequence is taken exactly as it is: nothing is re-sorted and
    /// no group is placed again. If the stored state cannot be read the error
    /// is returned and the current order is kept.
    pub fn reload(&mut self) -> Result<()> {
        let store = Self::load(self.persistence.as_ref())?;
        self.store = store;
        self.snapshot = OnceCell::new();
        Ok(())
    }

    /// Culls, persists and invalidates the snapshot. Runs after every mutation.
    fn commit(&mut self) {
        let plan = self.cull.plan(self.store.records());
        if !plan.is_empty() {
            let evicted = self.store.evict(&plan);
            trace!(evicted, "Culled tombstones");
            if !plan.omitted.is_empty() {
                warn!(
                    max_limit = self.config.max_limit,
                    live = self.store.live_len(),
                    omitted = plan.omitted.len(),
                    "Live items exceed the record budget; the oldest will not be persisted"
                );
            }
        }

        let state = self.store.to_state(&plan);
        if let Err(err) = self.persistence.set(&state) {
            warn!(error = %err, "Failed to persist order state; keeping in-memory order");
        }

        self.snapshot = OnceCell::new();
    }
}

impl fmt::Debug for OrderManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderManager")
            .field("config", &self.config)
            .field("random", &self.random)
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}
