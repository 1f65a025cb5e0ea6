//! Share-link encoding and decoding.
//!
//! A share link carries one query parameter per category, keyed by the
//! category's short `share_key`, whose value is the comma-separated list of
//! selected tokens. A `preset` parameter takes precedence over everything
//! else.

use tracing::{debug, warn};
use url::Url;

use crate::catalog::Catalog;
use crate::error::CatalogResult;
use crate::selection::{split_tokens, Selection};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/builder";

/// Query parameter naming a preset.
pub const PRESET_PARAM: &str = "preset";

/// Share-link codec bound to a catalog.
#[derive(Debug, Clone, Copy)]
pub struct ShareLink<'a> {
    catalog: &'a Catalog,
}

impl<'a> ShareLink<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Query parameters for a selection, in catalog order.
    pub fn params(&self, selection: &Selection) -> Vec<(String, String)> {
        self.catalog
            .categories
            .iter()
            .filter_map(|category| {
                let ids: Vec<&str> = category
                    .selected(selection)
                    .iter()
                    .map(|t| t.id.as_str())
                    .collect();
                if ids.is_empty() {
                    None
                } else {
                    Some((category.share_key.clone(), ids.join(",")))
                }
            })
            .collect()
    }

    /// Build a share URL. An empty selection yields the bare base URL.
    pub fn encode(&self, selection: &Selection, base_url: &str) -> CatalogResult<String> {
        let mut url = Url::parse(base_url)?;
        let params = self.params(selection);

        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            for (key, value) in &params {
                pairs.append_pair(key, value);
            }
        }

        Ok(url.to_string())
    }

    /// Decode a share URL or a bare query string into a selection.
    ///
    /// Decoding is lenient: whitespace is trimmed, empty and unknown tokens
    /// are dropped, and single-select or incompatibility rules are not
    /// enforced.
    pub fn decode(&self, input: &str) -> CatalogResult<Selection> {
        let pairs = Self::query_pairs(input)?;

        if let Some((_, preset)) = pairs
            .iter()
            .find(|(k, v)| k == PRESET_PARAM && !v.trim().is_empty())
        {
            return Ok(match self.catalog.preset(preset) {
                Some(preset) => preset.selection(),
                None => {
                    warn!("Share link references unknown preset '{}'", preset);
                    Selection::new()
                }
            });
        }

        let mut selection = Selection::new();
        for (key, value) in &pairs {
            if key == PRESET_PARAM {
                continue;
            }
            if self.catalog.category_by_share_key(key).is_none() {
                debug!("Ignoring unknown share-link parameter '{}'", key);
                continue;
            }

            for token in split_tokens(value) {
                if self.catalog.contains(token) {
                    selection.insert(token);
                } else {
                    debug!("Dropping unknown token '{}' from share link", token);
                }
            }
        }

        Ok(selection)
    }

    fn query_pairs(input: &str) -> CatalogResult<Vec<(String, String)>> {
        let input = input.trim();
        let pairs = if input.contains("://") {
            let url = Url::parse(input)?;
            url.query_pairs().into_owned().collect()
        } else {
            let query = input.strip_prefix('?').unwrap_or(input);
            url::form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect()
        };
        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::CatalogLoader;

    #[test]
    fn test_encode_groups_by_category() {
        let catalog = CatalogLoader::builtin().unwrap();
        let selection: Selection = ["typescript", "nextjs", "biome", "no-orm"].into_iter().collect();
        let url = ShareLink::new(&catalog)
            .encode(&selection, DEFAULT_BASE_URL)
            .unwrap();
        assert_eq!(url, "http://localhost:3000/builder?fe=nextjs&tl=typescript%2Cbiome");
    }

    #[test]
    fn test_encode_empty_selection() {
        let catalog = CatalogLoader::builtin().unwrap();
        let url = ShareLink::new(&catalog)
            .encode(&Selection::new(), DEFAULT_BASE_URL)
            .unwrap();
        assert_eq!(url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_decode_trims_and_drops_unknown() {
        let catalog = CatalogLoader::builtin().unwrap();
        let selection = ShareLink::new(&catalog)
            .decode("?fe=nextjs&tl=%20typescript%20,,cobol&zz=hono")
            .unwrap();
        assert_eq!(selection.to_string(), "nextjs,typescript");
    }

    #[test]
    fn test_decode_preset_wins() {
        let catalog = CatalogLoader::builtin().unwrap();
        let selection = ShareLink::new(&catalog)
            .decode("https://example.com/builder?preset=saas&fe=astro")
            .unwrap();
        assert!(selection.has("nextjs"));
        assert!(!selection.has("astro"));
    }

    #[test]
    fn test_decode_unknown_preset_is_empty() {
        let catalog = CatalogLoader::builtin().unwrap();
        let selection = ShareLink::new(&catalog).decode("preset=nope").unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_decode_empty_preset_falls_through() {
        let catalog = CatalogLoader::builtin().unwrap();
        let selection = ShareLink::new(&catalog)
            .decode("?preset=&fe=astro&db=postgresql")
            .unwrap();
        assert_eq!(selection.to_string(), "astro,postgresql");
    }

    #[test]
    fn test_decode_invalid_url() {
        let catalog = CatalogLoader::builtin().unwrap();
        assert!(ShareLink::new(&catalog).decode("http://[::1").is_err());
    }
}
