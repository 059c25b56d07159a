//! CLI entrypoint for itinera
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use itinera_application::CatalogService;
use itinera_infrastructure::{ConfigLoader, JsonFileStore};
use itinera_presentation::{Cli, MenuRepl};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting itinera");

    let config = ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow!("could not load configuration: {e}"))?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // CLI flag beats config file beats the per-user default
    let data_path = cli
        .data
        .or(config.store.path)
        .or_else(JsonFileStore::default_path)
        .unwrap_or_else(|| PathBuf::from("catalog.json"));
    info!(path = %data_path.display(), "using catalog store");

    // === Dependency Injection ===
    let store = Arc::new(JsonFileStore::new(data_path));
    let service = CatalogService::load(store)
        .context("failed to load the catalog store; fix or remove the file and retry")?;

    MenuRepl::new(service).run()?;

    Ok(())
}
