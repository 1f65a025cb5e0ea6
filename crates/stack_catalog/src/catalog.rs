//! Catalog definitions.
//!
//! The catalog is data-driven: categories, technologies and presets are
//! described in YAML rather than hardcoded, and every lookup the CLI and the
//! share-link codec need goes through [`Catalog`].

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::selection::{is_inert, Selection};

/// A selectable technology.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Technology {
    /// Unique token, e.g. "nextjs"
    pub id: String,
    /// Display name
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Tokens that cannot coexist with this one
    #[serde(default)]
    pub incompatible_with: Vec<String>,
}

impl Technology {
    /// Whether this is the "none" choice of its category.
    pub fn is_none_choice(&self) -> bool {
        is_inert(&self.id)
    }
}

/// A named grouping of technologies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Query parameter name used in share links
    pub share_key: String,
    /// At most one member may be selected at a time
    #[serde(default)]
    pub single_select: bool,
    #[serde(default)]
    pub technologies: Vec<Technology>,
}

impl Category {
    /// Check if a token belongs to this category.
    pub fn contains(&self, id: &str) -> bool {
        self.technologies.iter().any(|t| t.id == id)
    }

    /// Selected members of this category in catalog order, excluding "none" choices.
    pub fn selected<'a>(&'a self, selection: &Selection) -> Vec<&'a Technology> {
        self.technologies
            .iter()
            .filter(|t| selection.has(&t.id) && !t.is_none_choice())
            .collect()
    }
}

/// A named, fixed selection used as a one-shot initializer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub selections: Vec<String>,
}

impl Preset {
    /// URL-friendly form of the display name ("SaaS Starter" -> "saas-starter").
    pub fn slug(&self) -> String {
        self.name.to_lowercase().replace(' ', "-")
    }

    /// Build the selection this preset stands for.
    pub fn selection(&self) -> Selection {
        self.selections.iter().cloned().collect()
    }
}

/// The technology catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
    #[serde(default)]
    pub presets: Vec<Preset>,
}

impl Catalog {
    /// Parse and validate a catalog from YAML.
    pub fn from_yaml_str(content: &str) -> CatalogResult<Self> {
        let catalog: Catalog = serde_yaml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check structural invariants: unique ids and share keys, known preset tokens.
    pub fn validate(&self) -> CatalogResult<()> {
        let mut category_ids = HashSet::new();
        let mut share_keys = HashSet::new();
        let mut technology_ids = HashSet::new();

        for category in &self.categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(CatalogError::InvalidCatalog(format!(
                    "duplicate category id '{}'",
                    category.id
                )));
            }
            if share_keys.contains(category.share_key.as_str()) || category.share_key == "preset" {
                return Err(CatalogError::InvalidCatalog(format!(
                    "share key '{}' of category '{}' is not unique",
                    category.share_key, category.id
                )));
            }
            share_keys.insert(category.share_key.as_str());

            for tech in &category.technologies {
                if !technology_ids.insert(tech.id.as_str()) {
                    return Err(CatalogError::InvalidCatalog(format!(
                        "duplicate technology id '{}'",
                        tech.id
                    )));
                }
            }
        }

        let mut preset_ids = HashSet::new();
        for preset in &self.presets {
            if !preset_ids.insert(preset.id.as_str()) {
                return Err(CatalogError::InvalidCatalog(format!(
                    "duplicate preset id '{}'",
                    preset.id
                )));
            }
            if let Some(unknown) = preset
                .selections
                .iter()
                .find(|t| !technology_ids.contains(t.as_str()))
            {
                return Err(CatalogError::InvalidCatalog(format!(
                    "preset '{}' references unknown technology '{}'",
                    preset.id, unknown
                )));
            }
        }

        Ok(())
    }

    /// Get a category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Get a category by its share-link key.
    pub fn category_by_share_key(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.share_key == key)
    }

    /// Get a technology by id.
    pub fn technology(&self, id: &str) -> Option<&Technology> {
        self.categories
            .iter()
            .flat_map(|c| c.technologies.iter())
            .find(|t| t.id == id)
    }

    /// Check if a technology exists.
    pub fn contains(&self, id: &str) -> bool {
        self.technology(id).is_some()
    }

    /// Find a preset by id or by its slugified name.
    pub fn preset(&self, key: &str) -> Option<&Preset> {
        self.presets
            .iter()
            .find(|p| p.id == key)
            .or_else(|| self.presets.iter().find(|p| p.slug() == key))
    }

    /// Load a preset wholesale. The result replaces, never merges with, the current selection.
    pub fn apply_preset(&self, key: &str) -> CatalogResult<Selection> {
        self.preset(key)
            .map(Preset::selection)
            .ok_or_else(|| CatalogError::UnknownPreset(key.to_string()))
    }

    /// Selected tokens that block `tech` from being selected.
    ///
    /// Incompatibility is checked in both directions: a conflict is reported
    /// whether `tech` lists the selected token or the selected token lists `tech`.
    pub fn conflicts(&self, tech: &Technology, selection: &Selection) -> Vec<String> {
        let mut conflicts: Vec<String> = tech
            .incompatible_with
            .iter()
            .filter(|id| selection.has(id))
            .cloned()
            .collect();

        for other in self.selected_technologies(selection) {
            if other.incompatible_with.contains(&tech.id) && !conflicts.contains(&other.id) {
                conflicts.push(other.id.clone());
            }
        }
        conflicts
    }

    /// Toggle a technology on or off.
    ///
    /// Incompatible technologies are rejected. For single-select categories
    /// every other member is cleared first, so selecting a sibling swaps
    /// the choice and toggling the current one leaves the category empty.
    pub fn toggle(&self, selection: &mut Selection, tech_id: &str) -> CatalogResult<()> {
        let (category, tech) = self.lookup(tech_id)?;
        let was_selected = selection.has(tech_id);
        if !was_selected {
            self.ensure_compatible(tech, selection)?;
        }

        if category.single_select {
            for member in &category.technologies {
                selection.remove(&member.id);
            }
        }

        if was_selected {
            selection.remove(tech_id);
        } else {
            selection.insert(tech_id);
        }

        debug!("Toggled {} (now selected: {})", tech_id, !was_selected);
        Ok(())
    }

    /// Select a technology, replacing a sibling in single-select categories.
    /// Selecting an already-selected technology is a no-op.
    pub fn select(&self, selection: &mut Selection, tech_id: &str) -> CatalogResult<()> {
        if selection.has(tech_id) {
            return Ok(());
        }
        self.toggle(selection, tech_id)
    }

    /// Pick a random stack.
    ///
    /// One technology per single-select category and one or two per
    /// multi-select category. "None" choices are never picked and a pick
    /// never conflicts with an earlier one.
    pub fn random_selection<R: Rng + ?Sized>(&self, rng: &mut R) -> Selection {
        let mut selection = Selection::new();

        for category in &self.categories {
            let wanted = if category.single_select {
                1
            } else {
                rng.random_range(1..=2)
            };

            for _ in 0..wanted {
                let candidates: Vec<&Technology> = category
                    .technologies
                    .iter()
                    .filter(|t| !t.is_none_choice() && !selection.has(&t.id))
                    .filter(|t| self.conflicts(t, &selection).is_empty())
                    .collect();
                if candidates.is_empty() {
                    break;
                }
                let pick = candidates[rng.random_range(0..candidates.len())];
                selection.insert(pick.id.as_str());
            }
        }

        debug!("Random selection: {}", selection);
        selection
    }

    /// Selected technologies in catalog order, excluding "none" choices.
    pub fn selected_technologies(&self, selection: &Selection) -> Vec<&Technology> {
        self.categories
            .iter()
            .flat_map(|c| c.selected(selection))
            .collect()
    }

    /// Tokens of the selection that the catalog does not know.
    pub fn unknown_tokens<'a>(&self, selection: &'a Selection) -> Vec<&'a str> {
        selection.iter().filter(|t| !self.contains(t)).collect()
    }

    fn lookup(&self, tech_id: &str) -> CatalogResult<(&Category, &Technology)> {
        self.categories
            .iter()
            .find_map(|c| c.technologies.iter().find(|t| t.id == tech_id).map(|t| (c, t)))
            .ok_or_else(|| CatalogError::UnknownTechnology(tech_id.to_string()))
    }

    fn ensure_compatible(&self, tech: &Technology, selection: &Selection) -> CatalogResult<()> {
        let conflicts = self.conflicts(tech, selection);
        if conflicts.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Incompatible {
                technology: tech.id.clone(),
                conflicts: conflicts.join(", "),
            })
        }
    }
}
