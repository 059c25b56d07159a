//! File-backed catalog store
//!
//! One JSON document holds the whole catalog. Loads tolerate a missing
//! file (fresh install) but fail fast on anything unreadable; saves
//! overwrite the full document in place, matching the engine's
//! write-through model.

use crate::store::document::CatalogDocument;
use itinera_application::{CatalogStore, StoreError};
use itinera_domain::Catalog;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Catalog store over a single JSON file
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Default per-user data file: `<data dir>/itinera/catalog.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("itinera").join("catalog.json"))
    }
}

impl CatalogStore for JsonFileStore {
    fn load(&self) -> Result<Catalog, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no catalog file yet, starting empty");
            return Ok(Catalog::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        let document: CatalogDocument = serde_json::from_str(&raw)
            .map_err(|e| StoreError::Malformed(format!("{}: {e}", self.path.display())))?;
        document.into_catalog()
    }

    fn save(&self, catalog: &Catalog) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let document = CatalogDocument::from_catalog(catalog);
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| StoreError::Malformed(e.to_string()))?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "catalog written");
        Ok(())
    }
}
