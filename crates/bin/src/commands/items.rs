//! Item commands - list, add, remove, update and move.
//!
//! A missing key or an out-of-range index is not an error: the command prints
//! a notice on stderr, leaves the store alone, and still prints the order.

use sticky_order::{Item, OrderManager};

use crate::cli::{AddArgs, ItemSelector, MoveArgs, RemoveArgs, UpdateArgs};
use crate::output::{OutputFormat, print_items};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Run the list command
pub fn list(manager: &OrderManager, format: OutputFormat) -> CommandResult {
    print_items(&manager.ordered_items(), format)
}

/// Run the add command
pub fn add(manager: &mut OrderManager, args: AddArgs, format: OutputFormat) -> CommandResult {
    let item = Item::new(args.group, args.id, args.hint, args.value);
    let key = describe(item.group_id(), item.id());
    manager.add_item(item)?;

    if format == OutputFormat::Human {
        println!("Added {key}");
    }
    print_items(&manager.ordered_items(), format)
}

/// Run the remove command
pub fn remove(manager: &mut OrderManager, args: RemoveArgs, format: OutputFormat) -> CommandResult {
    let removed = match selector_key(&args.item) {
        Some((group, id)) => manager.remove_item(group, id),
        None => args.item.index.and_then(|index| manager.remove_item_by_index(index)),
    };
    match removed {
        Some(removed) if format == OutputFormat::Human => {
            println!("Removed {}", describe(removed.group_id(), removed.id()));
        }
        Some(_) => {}
        None => eprintln!("No item matches {}; nothing removed", describe_selector(&args.item)),
    }
    print_items(&manager.ordered_items(), format)
}

/// Run the update command
pub fn update(manager: &mut OrderManager, args: UpdateArgs, format: OutputFormat) -> CommandResult {
    let updated = match selector_key(&args.item) {
        Some((group, id)) => manager.update_item_value(group, id, args.value),
        None => match args.item.index {
            Some(index) => manager.update_item_value_by_index(index, args.value),
            None => false,
        },
    };
    if !updated {
        eprintln!("No item matches {}; nothing updated", describe_selector(&args.item));
    } else if format == OutputFormat::Human {
        println!("Updated {}", describe_selector(&args.item));
    }
    print_items(&manager.ordered_items(), format)
}

/// Run the move command
pub fn move_item(manager: &mut OrderManager, args: &MoveArgs, format: OutputFormat) -> CommandResult {
    if !manager.move_item(args.from, args.to) {
        eprintln!(
            "Cannot move {} to {}: the order has {} items; nothing moved",
            args.from,
            args.to,
            manager.len()
        );
    } else if format == OutputFormat::Human {
        println!("Moved item {} to {}", args.from, args.to);
    }
    print_items(&manager.ordered_items(), format)
}

fn selector_key(selector: &ItemSelector) -> Option<(&str, &str)> {
    match (selector.group.as_deref(), selector.id.as_deref()) {
        (Some(group), Some(id)) => Some((group, id)),
        _ => None,
    }
}

fn describe(group_id: &str, id: &str) -> String {
    format!("{group_id}/{id}")
}

fn describe_selector(selector: &ItemSelector) -> String {
    match (selector_key(selector), selector.index) {
        (Some((group, id)), _) => describe(group, id),
        (None, Some(index)) => format!("index {index}"),
        (None, None) => "nothing".to_string(),
    }
}
