//! Subcommand implementations.

pub mod items;
pub mod store;
