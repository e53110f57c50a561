use std::sync::{Arc, PoisonError, RwLock};

use super::{Persistence, PersistenceError, decode, encode};
use crate::state::PersistedState;

/// An in-process storage slot holding serialized state.
///
/// Clones share the same slot, so several managers opened on clones of one
/// `InMemory` behave like several tabs sharing one storage key. The slot holds
/// the JSON text, exactly as a string-valued key-value store would.
///
/// Writes can be made to fail (`set_failing`) or to be silently dropped
/// (`set_read_only`) to exercise the manager's tolerance of broken storage.
#[derive(Debug, Clone, Default)]
pub struct InMemory {
    slot: Arc<RwLock<Slot>>,
}

#[derive(Debug, Default)]
struct Slot {
    raw: Option<String>,
    read_only: bool,
    failing: bool,
    writes: usize,
}

impl InMemory {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored JSON text, if any.
    pub fn raw(&self) -> Option<String> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .raw
            .clone()
    }

    /// Overwrites the stored JSON text directly, bypassing any manager.
    pub fn write_raw(&self, raw: Option<String>) {
        self.slot
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .raw = raw;
    }

    /// Silently drop every write while `read_only` is set.
    pub fn set_read_only(&self, read_only: bool) {
        self.slot
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .read_only = read_only;
    }

    /// Reject every write with an error while `failing` is set.
    pub fn set_failing(&self, failing: bool) {
        self.slot
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .failing = failing;
    }

    /// Number of writes that reached the slot.
    pub fn write_count(&self) -> usize {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .writes
    }
}

impl Persistence for InMemory {
    fn get(&self) -> Result<Option<PersistedState>, PersistenceError> {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        slot.raw.as_deref().map(decode).transpose()
    }

    fn set(&self, state: &PersistedState) -> Result<(), PersistenceError> {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        if slot.failing {
            return Err(PersistenceError::WriteRejected {
                reason: "in-memory slot is set to fail".to_string(),
            });
        }
        if slot.read_only {
            return Ok(());
        }
        slot.raw = Some(encode(state)?);
        slot.writes += 1;
        Ok(())
    }
}
