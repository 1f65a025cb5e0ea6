//! # stack_catalog
//!
//! Technology catalog and selections for Stack Builder.
//!
//! This crate owns the static input of the command planner:
//!
//! - **Catalog**: categories, technologies and presets, loaded from YAML
//! - **Selection**: the set of chosen technology tokens, with validated
//!   toggle/select operations enforcing single-select and incompatibility
//!   rules, and random stacks that respect them
//! - **Share links**: encoding a selection as URL query parameters and the
//!   lenient decoding of crafted or stale links
//!
//! ## Example
//!
//! ```rust
//! use stack_catalog::{CatalogLoader, Selection, ShareLink, DEFAULT_BASE_URL};
//!
//! let catalog = CatalogLoader::builtin().unwrap();
//! let mut selection = Selection::new();
//! catalog.toggle(&mut selection, "nextjs").unwrap();
//! catalog.toggle(&mut selection, "typescript").unwrap();
//!
//! let url = ShareLink::new(&catalog).encode(&selection, DEFAULT_BASE_URL).unwrap();
//! assert_eq!(ShareLink::new(&catalog).decode(&url).unwrap(), selection);
//! ```

pub mod catalog;
pub mod error;
pub mod loader;
pub mod selection;
pub mod share;

pub use catalog::{Catalog, Category, Preset, Technology};
pub use error::{CatalogError, CatalogResult};
pub use loader::CatalogLoader;
pub use selection::{is_inert, split_tokens, Selection, NONE_PREFIX};
pub use share::{ShareLink, DEFAULT_BASE_URL, PRESET_PARAM};
