use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};
use fontpack_cli::cli::Cli;

fn main() -> Result<()> {
    // Request URLs are logged at info level; surface them by default.
    Builder::from_env(Env::default().default_filter_or("info")).init();
    Cli::parse().run()
}
