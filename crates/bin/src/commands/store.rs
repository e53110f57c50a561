//! Store commands - reload and stats.

use sticky_order::OrderManager;

use crate::output::{OutputFormat, print_items};

/// Run the reload command
pub fn reload(
    manager: &mut OrderManager,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    manager.reload()?;
    print_items(&manager.ordered_items(), format)
}

/// Run the stats command
pub fn stats(
    manager: &OrderManager,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let stats = manager.stats();
    let persisted = manager.persisted_state();

    match format {
        OutputFormat::Human => {
            println!("Live items:  {}", stats.live);
            println!("Removed:     {}", stats.tombstones);
            println!("Persisted:   {}", persisted.len());
            println!("Max limit:   {}", stats.max_limit);
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "live": stats.live,
                "tombstones": stats.tombstones,
                "persisted": persisted.len(),
                "max_limit": stats.max_limit,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
