//! swiftpm-settings-acknowledgements
//!
//! Generates an iOS `Settings.bundle` with an Acknowledgements page listing the
//! license of every Swift Package Manager dependency of an Xcode project.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod bundle;
mod cli;
mod commands;
mod common;
mod error;
mod github;
mod localization;
mod manifest;
mod operations;
mod resolver;
mod source;
#[cfg(test)]
mod test_fixtures;

use cli::Cli;

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = commands::generate::run(&cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
