//! Integration tests for the catalog, selections and share links.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use stack_catalog::{
    CatalogError, CatalogLoader, Selection, ShareLink, DEFAULT_BASE_URL, PRESET_PARAM,
};

#[test]
fn test_builtin_presets_reference_known_tokens() {
    let catalog = CatalogLoader::builtin().unwrap();
    assert!(!catalog.presets.is_empty());

    for preset in &catalog.presets {
        let selection = catalog.apply_preset(&preset.id).unwrap();
        assert!(catalog.unknown_tokens(&selection).is_empty(), "{}", preset.id);
        assert_eq!(catalog.preset(&preset.slug()).unwrap().id, preset.id);
    }
}

#[test]
fn test_builtin_presets_respect_single_select() {
    let catalog = CatalogLoader::builtin().unwrap();

    for preset in &catalog.presets {
        let selection = preset.selection();
        for category in catalog.categories.iter().filter(|c| c.single_select) {
            assert!(
                category.selected(&selection).len() <= 1,
                "preset {} selects several {}",
                preset.id,
                category.id
            );
        }
    }
}

#[test]
fn test_share_keys_are_unique_and_not_reserved() {
    let catalog = CatalogLoader::builtin().unwrap();
    let mut keys: Vec<&str> = catalog.categories.iter().map(|c| c.share_key.as_str()).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), catalog.categories.len());
    assert!(!keys.contains(&PRESET_PARAM));
}

#[test]
fn test_interactive_selection_builds_a_link() {
    let catalog = CatalogLoader::builtin().unwrap();
    let mut selection = Selection::new();
    for token in ["nextjs", "astro", "postgresql", "drizzle", "biome", "prettier"] {
        catalog.toggle(&mut selection, token).unwrap();
    }

    // astro replaced nextjs in the single-select frontend category
    assert!(!selection.has("nextjs"));

    let link = ShareLink::new(&catalog);
    let url = link.encode(&selection, DEFAULT_BASE_URL).unwrap();
    assert_eq!(
        url,
        "http://localhost:3000/builder?fe=astro&db=postgresql&orm=drizzle&tl=biome%2Cprettier"
    );
    assert_eq!(link.decode(&url).unwrap(), selection);
}

#[test]
fn test_incompatible_toggle_leaves_selection_untouched() {
    let catalog = CatalogLoader::builtin().unwrap();
    let mut selection = Selection::new();
    catalog.toggle(&mut selection, "mongodb").unwrap();

    let before = selection.clone();
    let err = catalog.toggle(&mut selection, "drizzle").unwrap_err();
    assert!(matches!(err, CatalogError::Incompatible { .. }));
    assert_eq!(selection, before);
}

#[test]
fn test_builtin_incompatibility_ignores_selection_order() {
    let catalog = CatalogLoader::builtin().unwrap();

    for (first, second) in [
        ("postgresql", "mongoose"),
        ("mongoose", "postgresql"),
        ("turso", "postgresql"),
        ("postgresql", "turso"),
        ("mysql", "neon"),
        ("neon", "mysql"),
    ] {
        let mut selection = Selection::new();
        catalog.select(&mut selection, first).unwrap();
        let err = catalog.select(&mut selection, second).unwrap_err();
        assert!(
            matches!(err, CatalogError::Incompatible { .. }),
            "{first} then {second}"
        );
        assert_eq!(selection.to_string(), first);
    }
}

#[test]
fn test_random_selection_respects_catalog_rules() {
    let catalog = CatalogLoader::builtin().unwrap();

    for seed in 0..200 {
        let selection = catalog.random_selection(&mut StdRng::seed_from_u64(seed));

        assert!(catalog.unknown_tokens(&selection).is_empty());
        assert!(selection.iter().all(|t| !t.starts_with("no-")), "seed {seed}: {selection}");

        for category in &catalog.categories {
            let picked = category.selected(&selection).len();
            if category.single_select {
                assert!(picked <= 1, "seed {seed}: {} has {picked}", category.id);
            } else {
                assert!((1..=2).contains(&picked), "seed {seed}: {} has {picked}", category.id);
            }
        }

        for tech in catalog.selected_technologies(&selection) {
            for other in &tech.incompatible_with {
                assert!(!selection.has(other), "seed {seed}: {} with {other}", tech.id);
            }
        }
    }
}

#[test]
fn test_random_selection_is_reproducible_with_a_seed() {
    let catalog = CatalogLoader::builtin().unwrap();
    let first = catalog.random_selection(&mut StdRng::seed_from_u64(42));
    let second = catalog.random_selection(&mut StdRng::seed_from_u64(42));
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn test_crafted_link_is_decoded_leniently() {
    let catalog = CatalogLoader::builtin().unwrap();
    let selection = ShareLink::new(&catalog)
        .decode("fe=nextjs,astro&orm=drizzle&db=mongodb")
        .unwrap();

    // neither single-select nor incompatibility rules apply on decode
    assert!(selection.has("nextjs") && selection.has("astro"));
    assert!(selection.has("drizzle") && selection.has("mongodb"));
}

fn valid_selection() -> impl Strategy<Value = Selection> {
    let catalog = CatalogLoader::builtin().expect("builtin catalog");
    let tokens: Vec<String> = catalog
        .categories
        .iter()
        .flat_map(|c| c.technologies.iter())
        .filter(|t| !t.is_none_choice())
        .map(|t| t.id.clone())
        .collect();

    proptest::sample::subsequence(tokens, 0..10).prop_map(move |picked| {
        let mut selection = Selection::new();
        for token in picked {
            // incompatible picks are simply skipped
            let _ = catalog.select(&mut selection, &token);
        }
        selection
    })
}

proptest! {
    /// Any selection built through toggles survives a share-link round trip
    #[test]
    fn share_link_roundtrip(selection in valid_selection()) {
        let catalog = CatalogLoader::builtin().expect("builtin catalog");
        let link = ShareLink::new(&catalog);
        let url = link.encode(&selection, DEFAULT_BASE_URL).expect("encode");
        prop_assert_eq!(link.decode(&url).expect("decode"), selection);
    }

    /// Toggling the same token twice is a no-op for multi-select categories
    #[test]
    fn double_toggle_is_identity(selection in valid_selection(), index in 0usize..64) {
        let catalog = CatalogLoader::builtin().expect("builtin catalog");
        let multi: Vec<&str> = catalog
            .categories
            .iter()
            .filter(|c| !c.single_select)
            .flat_map(|c| c.technologies.iter().map(|t| t.id.as_str()))
            .collect();
        let token = multi[index % multi.len()];

        let mut toggled = selection.clone();
        if catalog.toggle(&mut toggled, token).is_ok() {
            catalog.toggle(&mut toggled, token).expect("second toggle");
            prop_assert_eq!(toggled, selection);
        }
    }
}
