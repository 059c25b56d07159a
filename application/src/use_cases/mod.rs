//! Use cases orchestrating the catalog engine and its store

pub mod catalog_service;
