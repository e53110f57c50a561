//! Persistence adapters for sticky-order
//!
//! This module provides the [`Persistence`] trait, the storage surface an
//! [`OrderManager`](crate::OrderManager) reads from on open/reload and writes
//! to after every mutation, along with a few implementations:
//!
//! - [`InMemory`]: a shared in-process slot, handy for tests and for
//!   simulating several managers (tabs, processes) over one storage key.
//! - [`JsonFile`]: one JSON file per storage key.
//! - [`Callbacks`]: a caller-supplied `get`/`set` closure pair.

use crate::state::PersistedState;

mod callbacks;
mod errors;
mod in_memory;
mod json_file;

pub use callbacks::Callbacks;
pub use errors::PersistenceError;
pub use in_memory::InMemory;
pub use json_file::JsonFile;

/// Storage surface holding a single [`PersistedState`].
///
/// ## Contract
///
/// - `get` returns the last successfully stored state, or `Ok(None)` if nothing
///   has been stored yet. A missing key is never an error.
/// - `set` may fail, either by returning an error or by silently dropping the
///   write. The manager tolerates both: its in-memory order stays authoritative
///   for the rest of the session.
pub trait Persistence: Send {
    /// Reads the stored state, if any.
    fn get(&self) -> Result<Option<PersistedState>, PersistenceError>;

    /// Replaces the stored state.
    fn set(&self, state: &PersistedState) -> Result<(), PersistenceError>;
}

impl<P: Persistence + Sync> Persistence for std::sync::Arc<P> {
    fn get(&self) -> Result<Option<PersistedState>, PersistenceError> {
        (**self).get()
    }

    fn set(&self, state: &PersistedState) -> Result<(), PersistenceError> {
        (**self).set(state)
    }
}

pub(crate) fn encode(state: &PersistedState) -> Result<String, PersistenceError> {
    serde_json::to_string(state).map_err(|source| PersistenceError::SerializationFailed { source })
}

pub(crate) fn decode(text: &str) -> Result<PersistedState, PersistenceError> {
    serde_json::from_str(text).map_err(|source| PersistenceError::DeserializationFailed { source })
}
