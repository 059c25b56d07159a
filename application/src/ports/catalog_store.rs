//! Port for catalog persistence.
//!
//! Defines the [`CatalogStore`] trait for loading and saving the entire
//! catalog state. The engine follows a write-through model: every
//! successful mutation is followed by a full-state `save`, with no
//! batching and no partial writes. Implementations live in the
//! infrastructure layer.

use itinera_domain::Catalog;
use std::sync::Mutex;
use thiserror::Error;

/// Errors a store implementation can surface
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("catalog store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog store is malformed: {0}")]
    Malformed(String),
}

/// Port for loading and saving the whole catalog
pub trait CatalogStore: Send + Sync {
    /// Load the persisted catalog, or an empty one if nothing was saved yet
    fn load(&self) -> Result<Catalog, StoreError>;

    /// Overwrite the persisted state with `catalog`
    fn save(&self, catalog: &Catalog) -> Result<(), StoreError>;
}

/// In-memory store for tests and ephemeral sessions
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<Option<Catalog>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently saved catalog, if any
    pub fn saved(&self) -> Option<Catalog> {
        self.state.lock().ok().and_then(|guard| guard.clone())
    }
}

impl CatalogStore for InMemoryStore {
    fn load(&self) -> Result<Catalog, StoreError> {
        Ok(self.saved().unwrap_or_default())
    }

    fn save(&self, catalog: &Catalog) -> Result<(), StoreError> {
        if let Ok(mut guard) = self.state.lock() {
            *guard = Some(catalog.clone());
        }
        Ok(())
    }
}
