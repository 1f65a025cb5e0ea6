//! Recommended directory layout preview.

use std::fmt::Write as _;

use serde::Serialize;
use stack_catalog::Selection;

use crate::context::normalize_project_name;
use crate::layout::{classify_layout, Layout};
use crate::options::PlanProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Folder,
    File,
}

/// One line of the preview tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEntry {
    pub name: String,
    pub kind: EntryKind,
    pub depth: usize,
}

struct TreeBuilder<'a> {
    selection: &'a Selection,
    entries: Vec<TreeEntry>,
}

impl<'a> TreeBuilder<'a> {
    fn new(selection: &'a Selection) -> Self {
        Self {
            selection,
            entries: Vec::new(),
        }
    }

    fn folder(&mut self, depth: usize, name: impl Into<String>) -> &mut Self {
        self.entries.push(TreeEntry {
            name: name.into(),
            kind: EntryKind::Folder,
            depth,
        });
        self
    }

    fn file(&mut self, depth: usize, name: impl Into<String>) -> &mut Self {
        self.entries.push(TreeEntry {
            name: name.into(),
            kind: EntryKind::File,
            depth,
        });
        self
    }

    /// Script file name: `.ts` with TypeScript, `.js` otherwise.
    fn script(&self, stem: &str) -> String {
        let ext = if self.selection.has("typescript") { "ts" } else { "js" };
        format!("{}.{}", stem, ext)
    }

    /// Component file name: `.tsx` with TypeScript, `.jsx` otherwise.
    fn component(&self, stem: &str) -> String {
        let ext = if self.selection.has("typescript") { "tsx" } else { "jsx" };
        format!("{}.{}", stem, ext)
    }

    fn frontend(&mut self, has_frontend: bool) {
        let s = self.selection;
        if s.has("nextjs") {
            let (layout, page) = (self.component("layout"), self.component("page"));
            self.folder(1, "src").folder(2, "app").file(3, layout).file(3, page).file(3, "globals.css");
            if s.has_any(&["trpc", "orpc"]) {
                let route = self.script("route");
                self.folder(3, "api").folder(4, "trpc").folder(5, "[...trpc]").file(6, route);
            }
            let (button, utils) = (self.component("button"), self.script("utils"));
            self.folder(2, "components").folder(3, "ui").file(4, button);
            self.folder(2, "lib").file(3, utils);
        } else if s.has("nuxt") {
            self.folder(1, "pages").file(2, "index.vue");
            self.folder(1, "components");
            self.folder(1, "layouts").file(2, "default.vue");
        } else if s.has("astro") {
            self.folder(1, "src").folder(2, "pages").file(3, "index.astro");
            self.folder(2, "components").folder(2, "layouts");
        } else if has_frontend {
            let (index, app, utils) = (self.component("index"), self.component("App"), self.script("utils"));
            self.folder(1, "src").file(2, index).file(2, app);
            self.folder(2, "components");
            self.folder(2, "lib").file(3, utils);
        }
    }

    /// Server `src/` tree rooted at `depth`.
    fn server(&mut self, depth: usize) {
        let s = self.selection;
        let (index, route) = (self.script("index"), self.script("index.route"));
        self.folder(depth, "src").file(depth + 1, index.clone());
        self.folder(depth + 1, "routes").file(depth + 2, route);

        if s.has_any(&["express", "fastify"]) {
            let controller = self.script("index.controller");
            self.folder(depth + 1, "controllers").file(depth + 2, controller);
        }
        if s.has("mongoose") {
            let model = self.script("index.model");
            self.folder(depth + 1, "models").file(depth + 2, model);
        }

        let utils = self.script("utils");
        self.folder(depth + 1, "middlewares").file(depth + 2, index);
        self.folder(depth + 1, "lib").file(depth + 2, utils);

        if s.has_any(&["trpc", "orpc"]) {
            let (router, context) = (self.script("router"), self.script("context"));
            self.folder(depth + 1, "trpc").file(depth + 2, router).file(depth + 2, context);
        }
    }

    fn database(&mut self) {
        if self.selection.has("drizzle") {
            let (schema, index, config) = (self.script("schema"), self.script("index"), self.script("drizzle.config"));
            self.folder(1, "db").file(2, schema).file(2, index).folder(2, "migrations");
            self.file(1, config);
        } else if self.selection.has("prisma") {
            self.folder(1, "prisma").file(2, "schema.prisma").folder(2, "migrations");
        }
    }

    fn config_files(&mut self) {
        let s = self.selection;
        self.file(1, "package.json").file(1, "tsconfig.json");
        if s.has("biome") {
            self.file(1, "biome.json");
        }
        if s.has("eslint") {
            self.file(1, "eslint.config.js");
        }
        if s.has("prettier") {
            self.file(1, ".prettierrc");
        }
        if s.has("dotenv") {
            self.file(1, ".env").file(1, ".env.example");
        }
        if s.has("git-init") {
            self.file(1, ".gitignore");
        }
    }
}

/// Build the recommended layout for a selection.
pub fn preview_structure(project_name: &str, selection: &Selection, profile: PlanProfile) -> Vec<TreeEntry> {
    let layout = classify_layout(selection, profile);
    let has_frontend = crate::tokens::has_frontend(selection, profile);

    let mut tree = TreeBuilder::new(selection);
    tree.folder(0, normalize_project_name(project_name));
    tree.frontend(has_frontend);

    match layout {
        Layout::BackendOnly => tree.server(1),
        Layout::Monorepo => {
            tree.folder(1, "server");
            tree.server(2);
        }
        Layout::FrontendOnly => {}
    }

    tree.database();
    tree.config_files();
    tree.entries
}

/// Render entries as an indented listing; folders end with `/`.
pub fn render_tree(entries: &[TreeEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let suffix = match entry.kind {
            EntryKind::Folder => "/",
            EntryKind::File => "",
        };
        let _ = writeln!(out, "{}{}{}", "  ".repeat(entry.depth), entry.name, suffix);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[TreeEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    fn preview(tokens: &[&str]) -> Vec<TreeEntry> {
        let selection: Selection = tokens.iter().copied().collect();
        preview_structure("app", &selection, PlanProfile::PerStep)
    }

    #[test]
    fn test_empty_selection() {
        let entries = preview(&[]);
        assert_eq!(names(&entries), vec!["app", "package.json", "tsconfig.json"]);
        assert_eq!(entries[0].kind, EntryKind::Folder);
    }

    #[test]
    fn test_next_with_trpc() {
        let entries = preview(&["nextjs", "typescript", "trpc"]);
        let names = names(&entries);
        assert!(names.contains(&"layout.tsx"));
        assert!(names.contains(&"[...trpc]"));
        let route = entries.iter().find(|e| e.name == "route.ts").unwrap();
        assert_eq!(route.depth, 6);
    }

    #[test]
    fn test_backend_only_javascript() {
        let entries = preview(&["express", "mongoose"]);
        assert_eq!(
            names(&entries)[..12],
            [
                "app",
                "src",
                "index.js",
                "routes",
                "index.route.js",
                "controllers",
                "index.controller.js",
                "models",
                "index.model.js",
                "middlewares",
                "index.js",
                "lib",
            ]
        );
    }

    #[test]
    fn test_monorepo_nests_server() {
        let entries = preview(&["react-router", "hono"]);
        let server = entries.iter().position(|e| e.name == "server").unwrap();
        assert_eq!(entries[server].depth, 1);
        assert_eq!(entries[server + 1].name, "src");
        assert_eq!(entries[server + 1].depth, 2);
        assert!(!names(&entries).contains(&"controllers"));
    }

    #[test]
    fn test_database_and_config_files() {
        let entries = preview(&["drizzle", "biome", "dotenv", "git-init"]);
        let names = names(&entries);
        assert!(names.contains(&"drizzle.config.js"));
        assert!(names.ends_with(&["biome.json", ".env", ".env.example", ".gitignore"]));
    }

    #[test]
    fn test_render() {
        let text = render_tree(&preview(&["nuxt"]));
        assert!(text.starts_with("app/\n  pages/\n    index.vue\n"));
    }
}
