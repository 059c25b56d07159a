//! Catalog curation and itinerary planning use cases
//!
//! [`CatalogService`] is the single entry point the interaction layer talks
//! to. It owns the in-memory [`Catalog`], forwards mutations to the engine,
//! and persists the whole state after each successful change.

use crate::ports::catalog_store::{CatalogStore, StoreError};
use itinera_domain::{AnswerCode, Catalog, CatalogError, Itinerary};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors surfaced to the interaction layer
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Validation failure from the engine; re-prompt and retry
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Persistence failure; the in-memory mutation stands and the caller
    /// may retry the save by repeating the operation
    #[error("could not persist the catalog: {0}")]
    Store(#[from] StoreError),
}

/// A new attraction and its answers, as collected by the prompts
#[derive(Debug, Clone)]
pub struct NewAttraction {
    pub name: String,
    pub activity_type: String,
    pub location: String,
    /// One bit per current attraction-question, keyed by question text
    pub answers: HashMap<String, bool>,
}

/// A new question pair and the answers backfilled for every attraction
#[derive(Debug, Clone)]
pub struct NewQuestionPair {
    pub attraction_question: String,
    pub group_question: String,
    /// One bit per existing attraction, keyed by attraction name
    pub answers: HashMap<String, bool>,
}

/// Use case object owning the catalog and its write-through store
pub struct CatalogService<S: CatalogStore> {
    catalog: Catalog,
    store: Arc<S>,
}

impl<S: CatalogStore> CatalogService<S> {
    /// Load the persisted state (or start empty) and wrap it
    pub fn load(store: Arc<S>) -> Result<Self, StoreError> {
        let catalog = store.load()?;
        info!(
            attractions = catalog.attractions().len(),
            questions = catalog.attraction_questions().len(),
            "catalog loaded"
        );
        Ok(Self { catalog, store })
    }

    /// Wrap an already-constructed catalog (tests, imports)
    pub fn new(catalog: Catalog, store: Arc<S>) -> Self {
        Self { catalog, store }
    }

    /// Read access for prompts and rendering
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Add a location label, returning its stored form
    pub fn add_location(&mut self, label: &str) -> Result<String, ServiceError> {
        let stored = self.catalog.add_location(label)?;
        info!(location = %stored, "location added");
        self.persist()?;
        Ok(stored)
    }

    /// Remove a location no attraction references, returning its stored form
    pub fn remove_location(&mut self, label: &str) -> Result<String, ServiceError> {
        let removed = self.catalog.remove_location(label)?;
        info!(location = %removed, "location removed");
        self.persist()?;
        Ok(removed)
    }

    /// Add an activity-type label, returning its stored form
    pub fn add_activity_type(&mut self, label: &str) -> Result<String, ServiceError> {
        let stored = self.catalog.add_activity_type(label)?;
        info!(activity_type = %stored, "activity type added");
        self.persist()?;
        Ok(stored)
    }

    /// Register an attraction with its labels and per-question answers
    pub fn add_attraction(&mut self, input: NewAttraction) -> Result<(), ServiceError> {
        self.catalog.add_attraction(
            &input.name,
            &input.activity_type,
            &input.location,
            &input.answers,
        )?;
        info!(attraction = %input.name, "attraction added");
        self.persist()?;
        Ok(())
    }

    /// Append a question pair, backfilling every attraction's code
    pub fn add_question(&mut self, input: NewQuestionPair) -> Result<(), ServiceError> {
        self.catalog.add_question(
            &input.attraction_question,
            &input.group_question,
            &input.answers,
        )?;
        info!(question = %input.attraction_question, "question pair added");
        self.persist()?;
        Ok(())
    }

    /// Match the group's answers against the catalog (read-only, no save)
    pub fn build_itinerary(&self, group_code: &AnswerCode) -> Result<Itinerary, ServiceError> {
        let itinerary = self.catalog.build_itinerary(group_code)?;
        debug!(
            code = %group_code,
            matches = itinerary.match_count(),
            "itinerary built"
        );
        Ok(itinerary)
    }

    fn persist(&self) -> Result<(), StoreError> {
        debug!("writing catalog state through to the store");
        self.store.save(&self.catalog)
    }
}
