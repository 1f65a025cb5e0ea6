//! Project layout classification and the navigation step.

use std::fmt;

use serde::Serialize;
use stack_catalog::Selection;

use crate::bootstrap::Bootstrap;
use crate::context::PlanContext;
use crate::options::PlanProfile;
use crate::step::CommandStep;
use crate::tokens;

/// Shape of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    FrontendOnly,
    BackendOnly,
    /// A frontend app with a `server/` folder for the backend.
    Monorepo,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FrontendOnly => "frontend-only",
            Self::BackendOnly => "backend-only",
            Self::Monorepo => "monorepo",
        }
    }

    pub fn is_monorepo(&self) -> bool {
        matches!(self, Self::Monorepo)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a selection. Selections with neither side count as frontend-only.
pub fn classify_layout(selection: &Selection, profile: PlanProfile) -> Layout {
    let frontend = tokens::has_frontend(selection, profile);
    let backend = tokens::has_backend(selection);

    match (frontend, backend) {
        (true, true) => Layout::Monorepo,
        (false, true) => Layout::BackendOnly,
        _ => Layout::FrontendOnly,
    }
}

/// Leaf folders of a server `src/` directory.
pub fn server_subdirs(selection: &Selection) -> Vec<&'static str> {
    let mut dirs = vec!["routes", "middlewares", "lib"];
    if selection.has("mongoose") {
        dirs.push("models");
    }
    dirs
}

/// `mkdir` of the server leaf folders, run from inside `src/`.
pub fn server_subdirs_command(selection: &Selection) -> String {
    format!("mkdir {}", server_subdirs(selection).join(" "))
}

/// Step following the bootstrap, if any.
///
/// A monorepo gets the server folder structure (which enters and leaves the
/// project directory itself); any other layout gets a plain `cd`. Nothing is
/// emitted when the bootstrap already entered the directory.
pub fn navigation_step(ctx: &PlanContext<'_>, layout: Layout, bootstrap: &Bootstrap) -> Option<CommandStep> {
    if !bootstrap.needs_separate_navigate {
        return None;
    }

    let name = ctx.project_name;
    let step = if layout.is_monorepo() {
        CommandStep::new(
            "Create server folder structure",
            format!(
                "cd {} && {} && cd server/src && {} && cd ../..",
                name,
                ctx.options.shell.mkdir_all(&["server", "src", "controllers"]),
                server_subdirs_command(ctx.selection)
            ),
        )
        .with_description("Create server folder with recommended structure for monorepo setup")
    } else {
        CommandStep::new("Navigate to project", format!("cd {}", name))
            .with_description("Change to project directory")
    };

    Some(step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::select_bootstrap;
    use crate::options::{PlanOptions, ShellFlavor};

    fn selection(tokens: &[&str]) -> Selection {
        tokens.iter().copied().collect()
    }

    #[test]
    fn test_classify() {
        let cases = [
            (vec!["nextjs", "hono"], Layout::Monorepo),
            (vec!["astro", "express"], Layout::Monorepo),
            (vec!["expo-bare", "fastify"], Layout::Monorepo),
            (vec!["elysia"], Layout::BackendOnly),
            (vec!["nuxt"], Layout::FrontendOnly),
            (vec![], Layout::FrontendOnly),
            (vec!["zod", "pnpm"], Layout::FrontendOnly),
        ];
        for (tokens, expected) in cases {
            assert_eq!(
                classify_layout(&selection(&tokens), PlanProfile::PerStep),
                expected,
                "{tokens:?}"
            );
        }
    }

    #[test]
    fn test_tanstack_cli_counts_as_frontend_when_delegated() {
        let sel = selection(&["tanstack", "hono"]);
        assert_eq!(classify_layout(&sel, PlanProfile::PerStep), Layout::BackendOnly);
        assert_eq!(classify_layout(&sel, PlanProfile::Delegated), Layout::Monorepo);
    }

    #[test]
    fn test_server_structure_step() {
        let sel = selection(&["nextjs", "express", "mongoose"]);
        let ctx = PlanContext::new("shop", &sel, PlanOptions::default());
        let bootstrap = select_bootstrap(&ctx);
        let step = navigation_step(&ctx, Layout::Monorepo, &bootstrap).unwrap();
        assert_eq!(step.label, "Create server folder structure");
        assert_eq!(
            step.command,
            "cd shop && mkdir -p server/src/controllers && cd server/src && mkdir routes middlewares lib models && cd ../.."
        );
    }

    #[test]
    fn test_server_structure_windows() {
        let sel = selection(&["react-router", "hono"]);
        let options = PlanOptions::new().shell(ShellFlavor::Windows);
        let ctx = PlanContext::new("shop", &sel, options);
        let bootstrap = select_bootstrap(&ctx);
        let step = navigation_step(&ctx, Layout::Monorepo, &bootstrap).unwrap();
        assert_eq!(
            step.command,
            "cd shop && mkdir server\\src\\controllers && cd server/src && mkdir routes middlewares lib && cd ../.."
        );
    }

    #[test]
    fn test_navigate_step() {
        let sel = selection(&["astro"]);
        let ctx = PlanContext::new("site", &sel, PlanOptions::default());
        let bootstrap = select_bootstrap(&ctx);
        let step = navigation_step(&ctx, Layout::FrontendOnly, &bootstrap).unwrap();
        assert_eq!(step.command, "cd site");
    }

    #[test]
    fn test_no_step_when_bootstrap_enters_directory() {
        let sel = selection(&["express"]);
        let ctx = PlanContext::new("api", &sel, PlanOptions::default());
        let bootstrap = select_bootstrap(&ctx);
        assert!(navigation_step(&ctx, Layout::BackendOnly, &bootstrap).is_none());
    }
}
