//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for itinera
#[derive(Parser, Debug)]
#[command(name = "itinera")]
#[command(author, version, about = "Build an attraction catalog and match it to group preferences")]
#[command(long_about = r#"
Itinera keeps a catalog of attractions, each tagged with a location, an
activity type, and yes/no traits, and builds filtered itineraries from a
group's answers to the matching yes/no questions.

Launches an interactive menu. All state lives in a single JSON file,
rewritten after every successful change.

Configuration files are loaded from (in priority order):
1. --config <path>   Explicit config file
2. ./itinera.toml    Project-level config
3. ~/.config/itinera/config.toml   Global config

Example:
  itinera
  itinera --data ./demo-catalog.json -vv
"#)]
pub struct Cli {
    /// Path to the catalog data file (overrides config)
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Explicit config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
