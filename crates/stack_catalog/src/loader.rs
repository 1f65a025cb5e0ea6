//! Catalog loading functionality.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};

/// The catalog shipped with the crate.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.yaml");

/// Catalog loader.
///
/// Without a path the built-in catalog is used; with a path the file must
/// exist and follow the same schema.
#[derive(Debug, Clone, Default)]
pub struct CatalogLoader {
    catalog_path: Option<PathBuf>,
}

impl CatalogLoader {
    /// Create a loader for the built-in catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader reading from a catalog file.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: Some(path.into()),
        }
    }

    /// Load and validate the catalog.
    pub fn load(&self) -> CatalogResult<Catalog> {
        match &self.catalog_path {
            Some(path) => Self::load_file(path),
            None => Self::builtin(),
        }
    }

    /// Parse the built-in catalog.
    pub fn builtin() -> CatalogResult<Catalog> {
        debug!("Loading built-in catalog");
        Catalog::from_yaml_str(BUILTIN_CATALOG)
    }

    fn load_file(path: &Path) -> CatalogResult<Catalog> {
        if !path.exists() {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let catalog = Catalog::from_yaml_str(&content)?;
        info!(
            "Loaded catalog from {:?} ({} categories, {} presets)",
            path,
            catalog.categories.len(),
            catalog.presets.len()
        );
        Ok(catalog)
    }
}
