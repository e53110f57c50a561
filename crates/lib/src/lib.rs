//!
//! sticky-order: a user-reorderable collection of items whose order survives restarts.
//! This library provides the ordering engine and the pluggable persistence surface it writes through.
//!
//! ## Core Concepts
//!
//! sticky-order is built around several key concepts:
//!
//! * **Items (`item::Item`)**: The caller-facing unit, keyed by `(group_id, id)` and carrying a JSON value and a numeric order hint.
//! * **Groups**: Caller-defined partitions. Hints order items inside a group; the order *between* groups is chosen once at random and then remembered.
//! * **Records (`state::Record`)**: The persisted form of an entry, including its sequence marker and, after removal, its tombstone.
//! * **Persistence (`persistence::Persistence`)**: A pluggable `get`/`set` storage surface holding one `PersistedState`.
//! * **OrderManager (`manager::OrderManager`)**: The facade combining placement, culling, snapshots and persistence.
//! * **Snapshots (`snapshot::Snapshot`)**: Immutable, cheaply clonable views of the visible order.
//!
//! ```
//! use serde_json::json;
//! use sticky_order::{Item, OrderManager, persistence::InMemory};
//!
//! let storage = InMemory::new();
//! let mut manager = OrderManager::open(storage.clone())?;
//! manager.add_item(Item::new("planets", "earth", 1.0, json!({"v": "Earth"})))?;
//! manager.add_item(Item::new("planets", "venus", 0.0, json!({"v": "Venus"})))?;
//!
//! assert_eq!(manager.ordered_items().ids(), vec!["venus", "earth"]);
//!
//! // A second manager over the same storage replays the stored order.
//! let other = OrderManager::open(storage)?;
//! assert_eq!(other.ordered_items(), manager.ordered_items());
//! # Ok::<(), sticky_order::Error>(())
//! ```

pub mod config;
pub mod constants;
pub mod cull;
pub mod frozen;
pub mod item;
pub mod manager;
pub mod persistence;
pub mod placement;
pub mod random;
pub mod snapshot;
pub mod state;
mod store;

pub use config::OrderManagerConfig;
pub use frozen::Frozen;
pub use item::Item;
pub use manager::{OrderManager, OrderManagerBuilder, OrderStats};
pub use persistence::Persistence;
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use snapshot::Snapshot;
pub use state::{PersistedState, Record};

/// Result type used throughout the sticky-order library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the sticky-order library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured persistence errors from the persistence module
    #[error(transparent)]
    Persistence(persistence::PersistenceError),

    /// Structured ordering errors from the manager module
    #[error(transparent)]
    Order(manager::OrderError),

    /// Structured configuration errors from the config module
    #[error(transparent)]
    Config(config::ConfigError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Persistence(_) => "persistence",
            Error::Order(_) => "manager",
            Error::Config(_) => "config",
        }
    }

    /// Check if this error is persistence-related.
    pub fn is_persistence_error(&self) -> bool {
        matches!(self, Error::Persistence(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Persistence(err) => err.is_io_error(),
            _ => false,
        }
    }

    /// Check if this error is a serialization or deserialization failure.
    pub fn is_serialization_error(&self) -> bool {
        match self {
            Error::Persistence(err) => err.is_serialization_error(),
            _ => false,
        }
    }

    /// Check if this error is validation-related.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Order(err) => err.is_validation_error(),
            Error::Config(_) => true,
            _ => false,
        }
    }
}
