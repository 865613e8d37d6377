//! CLI entry point for the shoreline terrain generator

use clap::Parser;
use shoreline::io::cli::{Cli, Session};
use tracing_subscriber::EnvFilter;

fn main() -> shoreline::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);
    Session::new(cli).run()
}

// RUST_LOG takes precedence over the quiet flag
fn init_tracing(quiet: bool) {
    let default_directive = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
