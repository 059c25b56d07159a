//! Application layer for itinera
//!
//! Use cases sit between the domain engine and the outer layers: the
//! [`CatalogService`] owns the catalog, applies mutations, and writes the
//! whole state through to a [`CatalogStore`] after every successful change.
//! Ports define the contracts infrastructure adapters implement.

pub mod ports;
pub mod use_cases;

pub use ports::catalog_store::{CatalogStore, InMemoryStore, StoreError};
pub use use_cases::catalog_service::{CatalogService, NewAttraction, NewQuestionPair, ServiceError};
