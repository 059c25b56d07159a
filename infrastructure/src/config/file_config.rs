//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Catalog store settings
    pub store: FileStoreConfig,
    /// Console output settings
    pub output: FileOutputConfig,
}

/// `[store]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// Path to the catalog data file; defaults to the per-user data dir
    pub path: Option<PathBuf>,
}

/// `[output]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Colored console output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.store.path.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn sections_parse() {
        let config: FileConfig = toml::from_str(
            r#"
            [store]
            path = "/tmp/catalog.json"

            [output]
            color = false
            "#,
        )
        .unwrap();
        assert_eq!(config.store.path, Some(PathBuf::from("/tmp/catalog.json")));
        assert!(!config.output.color);
    }
}
