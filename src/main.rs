// src/main.rs

use anyhow::Result;
use clap::Parser;
use dircollect::cli::Cli;
use dircollect::config::ConfigBuilder;
use dircollect::errors::Error;
use dircollect::run;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging. RUST_LOG takes precedence over the default directive.
    let default_directive = if cfg!(debug_assertions) {
        "dircollect=debug"
    } else {
        "dircollect=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();

    log::debug!("Starting dircollect v{}...", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = ConfigBuilder::from_cli(cli).build()?;
    log::debug!("Configuration built successfully: {:?}", config);

    if let Err(e) = run(&config) {
        match e {
            Error::NoFilesFound => {
                eprintln!("dircollect: No files found matching the specified criteria.");
            }
            _ => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
