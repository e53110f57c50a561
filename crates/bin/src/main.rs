use clap::Parser;
use sticky_order::{OrderManager, SeededRandom, persistence::JsonFile};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use output::OutputFormat;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so JSON output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sticky_order=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    let mut manager = open_manager(&cli)?;
    tracing::debug!(store = %cli.store.display(), ?manager, "Opened order store");

    match cli.command {
        Commands::List => commands::items::list(&manager, format),
        Commands::Add(args) => commands::items::add(&mut manager, args, format),
        Commands::Remove(args) => commands::items::remove(&mut manager, args, format),
        Commands::Update(args) => commands::items::update(&mut manager, args, format),
        Commands::Move(args) => commands::items::move_item(&mut manager, &args, format),
        Commands::Reload => commands::store::reload(&mut manager, format),
        Commands::Stats => commands::store::stats(&manager, format),
    }
}

/// Opens the manager over the configured JSON file.
fn open_manager(cli: &Cli) -> sticky_order::Result<OrderManager> {
    let mut builder = OrderManager::builder(JsonFile::new(&cli.store));
    if let Some(max_limit) = cli.max_limit {
        builder = builder.max_limit(max_limit);
    }
    if let Some(seed) = cli.seed {
        builder = builder.random(SeededRandom::new(seed));
    }
    builder.build()
}
