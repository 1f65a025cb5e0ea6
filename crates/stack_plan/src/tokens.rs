//! Token groups the resolver reasons about.

use stack_catalog::Selection;

use crate::options::PlanProfile;

/// Web and native frameworks that produce a frontend.
pub const FRONTEND: &[&str] = &[
    "nextjs",
    "nuxt",
    "astro",
    "svelte",
    "solid",
    "tanstack-start",
    "tanstack-router",
    "react-router",
    "expo-bare",
    "expo-uniwind",
    "expo-unistyles",
];

/// Consolidated TanStack option handled by `create-tsrouter-app` (delegated profile only).
pub const TANSTACK_CLI: &str = "tanstack";

/// Standalone backend frameworks.
pub const BACKEND: &[&str] = &["express", "fastify", "hono", "elysia"];

/// Expo (React Native) variants.
pub const EXPO: &[&str] = &["expo-bare", "expo-uniwind", "expo-unistyles"];

/// Client-side routers bootstrapped on a Vite React template.
pub const ROUTERS: &[&str] = &["tanstack-router", "react-router"];

pub const ORMS: &[&str] = &["drizzle", "prisma", "mongoose"];

/// Frameworks whose projects normally carry Tailwind classes.
pub const TAILWIND_FRAMEWORKS: &[&str] = &[
    "nextjs",
    "expo-uniwind",
    "shadcn",
    "tanstack-router",
    "tanstack-start",
    "react-router",
    "astro",
    "svelte",
    "solid",
    "nuxt",
];

/// Frontend-capable tokens for a profile.
pub fn frontend_tokens(profile: PlanProfile) -> Vec<&'static str> {
    let mut tokens = FRONTEND.to_vec();
    if profile == PlanProfile::Delegated {
        tokens.push(TANSTACK_CLI);
    }
    tokens
}

pub fn has_frontend(selection: &Selection, profile: PlanProfile) -> bool {
    selection.has_any(&frontend_tokens(profile))
}

pub fn has_backend(selection: &Selection) -> bool {
    selection.has_any(BACKEND)
}

/// Whether Tailwind is in play, explicitly or through a framework default.
pub fn uses_tailwind(selection: &Selection) -> bool {
    selection.has("tailwindcss") || selection.has_any(TAILWIND_FRAMEWORKS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tanstack_cli_is_frontend_only_when_delegated() {
        let selection: Selection = [TANSTACK_CLI].into_iter().collect();
        assert!(!has_frontend(&selection, PlanProfile::PerStep));
        assert!(has_frontend(&selection, PlanProfile::Delegated));
    }

    #[test]
    fn test_uses_tailwind() {
        let svelte: Selection = ["svelte"].into_iter().collect();
        let hono: Selection = ["hono"].into_iter().collect();
        assert!(uses_tailwind(&svelte));
        assert!(!uses_tailwind(&hono));
    }
}
