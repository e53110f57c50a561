//! In-memory entry store: the positional record sequence plus the sequence counter.

use crate::cull::CullPlan;
use crate::state::{PersistedState, Record};

#[derive(Debug, Clone, Default)]
pub(crate) struct EntryStore {
    records: Vec<Record>,
    next_seq: u64,
}

impl EntryStore {
    pub(crate) fn from_state(state: PersistedState) -> Self {
        let (next_seq, records) = state.sanitize().into_parts();
        Self { records, next_seq }
    }

    pub(crate) fn records(&self) -> &[Record] {
        &self.records
    }

    pub(crate) fn record(&self, position: usize) -> &Record {
        &self.records[position]
    }

    pub(crate) fn record_mut(&mut self, position: usize) -> &mut Record {
        &mut self.records[position]
    }

    pub(crate) fn live(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|r| r.is_live())
    }

    pub(crate) fn live_len(&self) -> usize {
        self.live().count()
    }

    pub(crate) fn tombstone_len(&self) -> usize {
        self.records.len() - self.live_len()
    }

    /// Position of the record with this key, live or tombstoned.
    pub(crate) fn position(&self, group_id: &str, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.has_key(group_id, id))
    }

    /// Position of the record with this key, only if it is live.
    pub(crate) fn live_position_of(&self, group_id: &str, id: &str) -> Option<usize> {
        self.position(group_id, id)
            .filter(|&position| self.records[position].is_live())
    }

    /// Position in the record sequence of the `index`th live record.
    pub(crate) fn live_position(&self, index: usize) -> Option<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_live())
            .nth(index)
            .map(|(position, _)| position)
    }

    /// Index among live records of the record at `position`.
    pub(crate) fn live_index(&self, position: usize) -> usize {
        self.records[..position].iter().filter(|r| r.is_live()).count()
    }

    /// Position to insert at so the new record becomes live index `index`.
    ///
    /// `index` may equal the live count, meaning "after the last live record".
    pub(crate) fn live_insertion_point(&self, index: usize) -> Option<usize> {
        if let Some(position) = self.live_position(index) {
            return Some(position);
        }
        match index.checked_sub(1) {
            Some(previous) => self.live_position(previous).map(|position| position + 1),
            None => Some(self.records.len()),
        }
    }

    /// Hands out the next sequence marker.
    pub(crate) fn take_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    pub(crate) fn insert(&mut self, position: usize, record: Record) {
        self.records.insert(position, record);
    }

    pub(crate) fn remove(&mut self, position: usize) -> Record {
        self.records.remove(position)
    }

    /// Drops the tombstones selected by `plan`, returning how many went.
    pub(crate) fn evict(&mut self, plan: &CullPlan) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !plan.evicts(r));
        before - self.records.len()
    }

    /// The state to persist under `plan`.
    pub(crate) fn to_state(&self, plan: &CullPlan) -> PersistedState {
        let records = self
            .records
            .iter()
            .filter(|r| plan.keeps(r))
            .cloned()
            .collect();
        PersistedState::new(self.next_seq, records)
    }
}
