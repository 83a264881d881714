//! Coarsen CLI - column generalization for tabular data.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "coarsen=debug" } else { "coarsen=warn" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_target(false)
        .init();

    if let Err(e) = commands::run::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
