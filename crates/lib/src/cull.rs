//! Bounding the persisted record count.
//!
//! Every record carries a sequence marker, so the records form a log ordered
//! by age. Culling picks an eviction boundary in that log: every tombstone at
//! or below [`CullPlan::tombstone_boundary`] is discarded. Only when no
//! tombstones are left are the oldest live entries left out of the persisted
//! payload, listed in [`CullPlan::omitted`].
//!
//! A live entry is never left out if it is the last surviving record of its
//! group. The group's block therefore stays in the payload, and a later
//! session that re-adds the omitted entries places them by hint inside that
//! block again; what is lost is their individual position history. If every
//! remaining record is the last of its group, the payload is allowed to exceed
//! `max_limit`.
//!
//! Live entries left out this way are still in memory for the current session.

use std::collections::{BTreeSet, HashMap};

use crate::state::Record;

/// Keeps the number of persisted records within `max_limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CullPolicy {
    max_limit: usize,
}

/// The outcome of a cull: which records to evict, and which live entries to
/// leave out of the payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CullPlan {
    /// Tombstones with `seq <= tombstone_boundary` are evicted.
    pub tombstone_boundary: Option<u64>,
    /// Sequence markers of live entries left out of the payload.
    pub omitted: BTreeSet<u64>,
}

impl CullPolicy {
    pub fn new(max_limit: usize) -> Self {
        Self { max_limit }
    }

    pub fn max_limit(&self) -> usize {
        self.max_limit
    }

    /// Computes which records to discard so at most `max_limit` remain.
    ///
    /// Oldest tombstones go first. Live entries are only touched once every
    /// tombstone is gone, oldest first, skipping any entry that is the last
    /// record of its group.
    pub fn plan<'a>(&self, records: impl IntoIterator<Item = &'a Record>) -> CullPlan {
        let mut tombstones = Vec::new();
        let mut live = Vec::new();
        for record in records {
            if record.is_tombstone() {
                tombstones.push(record.seq());
            } else {
                live.push((record.seq(), record.group_id()));
            }
        }

        let total = tombstones.len() + live.len();
        if total <= self.max_limit {
            return CullPlan::default();
        }
        let mut excess = total - self.max_limit;

        tombstones.sort_unstable();
        let evicted = excess.min(tombstones.len());
        let tombstone_boundary = evicted.checked_sub(1).map(|last| tombstones[last]);
        excess -= evicted;

        let mut omitted = BTreeSet::new();
        if excess > 0 {
            // Survivors per group; every tombstone is gone at this point.
            let mut survivors: HashMap<&str, usize> = HashMap::new();
            for &(_, group_id) in &live {
                *survivors.entry(group_id).or_default() += 1;
            }

            live.sort_unstable_by_key(|&(seq, _)| seq);
            for (seq, group_id) in live {
                if excess == 0 {
                    break;
                }
                let Some(count) = survivors.get_mut(group_id) else {
                    continue;
                };
                if *count > 1 {
                    *count -= 1;
                    omitted.insert(seq);
                    excess -= 1;
                }
            }
        }

        CullPlan {
            tombstone_boundary,
            omitted,
        }
    }
}

impl CullPlan {
    /// True if nothing needs to be culled.
    pub fn is_empty(&self) -> bool {
        self.tombstone_boundary.is_none() && self.omitted.is_empty()
    }

    /// True if `record` is a tombstone that should be discarded.
    pub fn evicts(&self, record: &Record) -> bool {
        record.is_tombstone()
            && self
                .tombstone_boundary
                .is_some_and(|boundary| record.seq() <= boundary)
    }

    /// True if `record` is a live entry that should not be persisted.
    pub fn omits(&self, record: &Record) -> bool {
        record.is_live() && self.omitted.contains(&record.seq())
    }

    /// True if `record` survives into the persisted payload.
    pub fn keeps(&self, record: &Record) -> bool {
        !self.evicts(record) && !self.omits(record)
    }
}
