mod cli;
mod commands;
mod fetch_ui;
mod output;

use clap::Parser;
use deliciousrs::{config, error::Result};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Initialize logger
    let default_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if args.version {
        println!("deliciousrs {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let cfg = if let Some(config_path) = &args.config {
        config::Config::load_from_path(config_path)?
    } else {
        config::Config::load()
    }
    .with_env_overrides();

    cli::handle_args(args, &cfg)
}
