//! Plan context shared by every resolver stage.

use stack_catalog::Selection;

use crate::options::PlanOptions;
use crate::package_manager::PackageManagerProfile;
use crate::tokens;

/// Project name used when none is given.
pub const DEFAULT_PROJECT_NAME: &str = "my-app";

/// Trim a project name, falling back to [`DEFAULT_PROJECT_NAME`] when empty.
pub fn normalize_project_name(name: &str) -> &str {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        DEFAULT_PROJECT_NAME
    } else {
        trimmed
    }
}

/// Inputs of one plan computation.
///
/// Built once per call; the package-manager profile is resolved here and
/// threaded unchanged into every stage.
#[derive(Debug, Clone, Copy)]
pub struct PlanContext<'a> {
    pub project_name: &'a str,
    pub selection: &'a Selection,
    pub pm: PackageManagerProfile,
    pub options: PlanOptions,
}

impl<'a> PlanContext<'a> {
    pub fn new(project_name: &'a str, selection: &'a Selection, options: PlanOptions) -> Self {
        Self {
            project_name: normalize_project_name(project_name),
            selection,
            pm: PackageManagerProfile::resolve(selection),
            options,
        }
    }

    pub fn has(&self, token: &str) -> bool {
        self.selection.has(token)
    }

    pub fn has_any(&self, tokens: &[&str]) -> bool {
        self.selection.has_any(tokens)
    }

    pub fn has_typescript(&self) -> bool {
        self.has("typescript")
    }

    pub fn has_backend(&self) -> bool {
        self.has_any(tokens::BACKEND)
    }

    pub fn has_frontend(&self) -> bool {
        tokens::has_frontend(self.selection, self.options.profile)
    }

    /// React Native targets do not use `@types/node`.
    pub fn is_react_native(&self) -> bool {
        self.has_any(tokens::EXPO)
    }
}
