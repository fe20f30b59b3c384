use clap::Parser;
use treesync::config::{Cli, Config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Convert CLI args to Config - this validates immediately
    let config = Config::try_from(cli)?;

    println!("treesync v{}", treesync::VERSION);
    println!("  Source: {}", config.source.display());
    println!("  Target: {}", config.target.display());
    println!("  Delete missing: {}", config.delete_missing);
    println!("  Traversal: {:?}", config.traversal);

    treesync::commands::sync::run(config)?;

    Ok(())
}
