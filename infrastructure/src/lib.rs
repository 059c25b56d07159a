//! Infrastructure layer for itinera
//!
//! Adapters for the application layer's ports: the JSON file catalog store
//! and TOML configuration loading.

pub mod config;
pub mod store;

pub use config::{ConfigLoader, FileConfig};
pub use store::json_file::JsonFileStore;
