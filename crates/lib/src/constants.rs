//! Constants used throughout the sticky-order library.
//!
//! This module provides central definitions for defaults and field names
//! shared between the manager, the persisted state and the adapters.

/// Default record budget for the cull policy.
///
/// Counts live entries and retained tombstones together. A tombstone without
/// a value serializes to roughly 80 bytes, so the default keeps a payload of
/// short ids comfortably under 20 KB.
pub const DEFAULT_MAX_LIMIT: usize = 200;

/// Default file name used by the CLI for its JSON store.
pub const DEFAULT_STORE_FILE: &str = "sticky-order.json";

/// Version tag written into every persisted state.
pub const STATE_VERSION: u32 = 1;
