//! fdscout CLI - approximate functional dependency discovery.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(cli.log_directive()))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    debug!(?cli, "parsed arguments");

    if let Err(e) = commands::discover::run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
