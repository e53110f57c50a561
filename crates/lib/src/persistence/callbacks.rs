use std::fmt;

use super::{Persistence, PersistenceError};
use crate::state::PersistedState;

/// Adapter over a caller-supplied `get`/`set` pair.
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use sticky_order::{OrderManager, PersistedState, persistence::Callbacks};
///
/// let stored: Arc<Mutex<Option<String>>> = Arc::default();
/// let (reader, writer) = (stored.clone(), stored.clone());
///
/// let persistence = Callbacks::new(
///     move || {
///         let raw = reader.lock().unwrap().clone();
///         Ok(raw.map(|text| serde_json::from_str::<PersistedState>(&text).unwrap()))
///     },
///     move |state: &PersistedState| {
///         *writer.lock().unwrap() = Some(serde_json::to_string(state).unwrap());
///         Ok(())
///     },
/// );
/// let manager = OrderManager::open(persistence)?;
/// assert!(manager.is_empty());
/// # Ok::<(), sticky_order::Error>(())
/// ```
pub struct Callbacks<G, S> {
    get: G,
    set: S,
}

impl<G, S> Callbacks<G, S>
where
    G: Fn() -> Result<Option<PersistedState>, PersistenceError> + Send,
    S: Fn(&PersistedState) -> Result<(), PersistenceError> + Send,
{
    pub fn new(get: G, set: S) -> Self {
        Self { get, set }
    }
}

impl<G, S> Persistence for Callbacks<G, S>
where
    G: Fn() -> Result<Option<PersistedState>, PersistenceError> + Send,
    S: Fn(&PersistedState) -> Result<(), PersistenceError> + Send,
{
    fn get(&self) -> Result<Option<PersistedState>, PersistenceError> {
        (self.get)()
    }

    fn set(&self, state: &PersistedState) -> Result<(), PersistenceError> {
        (self.set)(state)
    }
}

impl<G, S> fmt::Debug for Callbacks<G, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks").finish_non_exhaustive()
    }
}
