//! CLI argument definitions for the sticky-order binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use sticky_order::constants::DEFAULT_STORE_FILE;

/// Sticky user-reorderable item lists
#[derive(Parser, Debug)]
#[command(name = "sticky-order")]
#[command(about = "Keep a user-reorderable list of grouped items in a JSON file")]
#[command(version)]
pub struct Cli {
    /// JSON file holding the persisted order
    #[arg(long, global = true, default_value = DEFAULT_STORE_FILE, env = "STICKY_ORDER_STORE")]
    pub store: PathBuf,

    /// Maximum number of records (live and removed) kept in the store
    #[arg(long, global = true, env = "STICKY_ORDER_MAX_LIMIT")]
    pub max_limit: Option<usize>,

    /// Seed for placing new groups, for reproducible runs
    #[arg(long, global = true, env = "STICKY_ORDER_SEED")]
    pub seed: Option<u64>,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the current order
    List,
    /// Add an item, or update the item with the same group and id
    Add(AddArgs),
    /// Remove an item by key or by index
    Remove(RemoveArgs),
    /// Replace the value of an item by key or by index
    Update(UpdateArgs),
    /// Move the item at one index to another
    Move(MoveArgs),
    /// Re-read the store and print what it holds
    Reload,
    /// Show live and removed record counts
    Stats,
}

/// Arguments for the add command
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Group the item belongs to
    #[arg(long)]
    pub group: String,

    /// Item id, unique within its group
    #[arg(long)]
    pub id: String,

    /// Ordering hint within the group (lower sorts first)
    #[arg(long, allow_hyphen_values = true)]
    pub hint: f64,

    /// Item value as JSON
    #[arg(long, default_value = "null", value_parser = parse_json)]
    pub value: Value,
}

/// Selects an item either by key or by its index in the current order
#[derive(Args, Debug)]
pub struct ItemSelector {
    /// Group of the item
    #[arg(long, requires = "id", conflicts_with = "index")]
    pub group: Option<String>,

    /// Id of the item
    #[arg(long, requires = "group")]
    pub id: Option<String>,

    /// Index of the item in the current order
    #[arg(long, required_unless_present = "group")]
    pub index: Option<usize>,
}

/// Arguments for the remove command
#[derive(Args, Debug)]
pub struct RemoveArgs {
    #[command(flatten)]
    pub item: ItemSelector,
}

/// Arguments for the update command
#[derive(Args, Debug)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub item: ItemSelector,

    /// New item value as JSON
    #[arg(long, value_parser = parse_json)]
    pub value: Value,
}

/// Arguments for the move command
#[derive(Args, Debug)]
pub struct MoveArgs {
    /// Current index of the item
    pub from: usize,

    /// Index the item should end up at
    pub to: usize,
}

fn parse_json(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid JSON value: {e}"))
}
