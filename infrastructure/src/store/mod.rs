//! Catalog persistence adapters

pub mod document;
pub mod json_file;
