//! Error types for the catalog.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while loading a catalog or mutating a selection.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Unknown technology: {0}")]
    UnknownTechnology(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("{technology} is incompatible with the current selection ({conflicts})")]
    Incompatible { technology: String, conflicts: String },

    #[error("Invalid share link: {0}")]
    InvalidShareLink(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
