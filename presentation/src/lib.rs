//! Presentation layer for itinera
//!
//! The thin interaction shell around the engine: clap argument definitions,
//! the interactive menu loop that collects free-text and yes/no answers,
//! and the console renderer for itinerary results.

pub mod cli;
pub mod menu;
pub mod output;

pub use cli::commands::Cli;
pub use menu::repl::MenuRepl;
pub use output::console::ItineraryFormatter;
