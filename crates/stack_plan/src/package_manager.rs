//! Package-manager resolution.
//!
//! The profile is computed once per plan and every step that invokes a
//! package manager formats its command from the same profile.

use std::fmt;

use serde::Serialize;
use stack_catalog::Selection;

/// Supported package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Selection tokens in resolution priority. `npm` is the fallback.
    pub const PRIORITY: [(&'static str, PackageManager); 3] = [
        ("bun-pm", PackageManager::Bun),
        ("pnpm", PackageManager::Pnpm),
        ("yarn", PackageManager::Yarn),
    ];

    /// Pick the package manager for a selection.
    ///
    /// The package-manager category is single-select, but a crafted selection
    /// may carry several tokens; the priority order decides.
    pub fn resolve(selection: &Selection) -> Self {
        Self::PRIORITY
            .iter()
            .find(|(token, _)| selection.has(token))
            .map(|(_, pm)| *pm)
            .unwrap_or(PackageManager::Npm)
    }

    /// Binary name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// Full command profile for this package manager.
    pub fn profile(self) -> PackageManagerProfile {
        let (executor, add_command, add_dev_command, init_command) = match self {
            Self::Npm => ("npx", "npm install", "npm install -D", "npm init -y"),
            Self::Pnpm => ("pnpm exec", "pnpm add", "pnpm add -D", "pnpm init"),
            Self::Yarn => ("yarn dlx", "yarn add", "yarn add -D", "yarn init -y"),
            Self::Bun => ("bunx", "bun add", "bun add -d", "bun init"),
        };

        PackageManagerProfile {
            manager: self,
            runner: self.as_str(),
            executor,
            add_command,
            add_dev_command,
            init_command,
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The command verbs derived from the selected package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PackageManagerProfile {
    pub manager: PackageManager,
    /// Package manager binary, e.g. `pnpm`
    pub runner: &'static str,
    /// One-off package execution prefix, e.g. `npx`
    pub executor: &'static str,
    /// Runtime dependency install command
    pub add_command: &'static str,
    /// Development dependency install command
    pub add_dev_command: &'static str,
    /// `package.json` initialization command
    pub init_command: &'static str,
}

impl PackageManagerProfile {
    /// Resolve the profile for a selection.
    pub fn resolve(selection: &Selection) -> Self {
        PackageManager::resolve(selection).profile()
    }

    pub fn is_npm(&self) -> bool {
        self.manager == PackageManager::Npm
    }

    /// `<executor> <args>`
    pub fn exec(&self, args: &str) -> String {
        format!("{} {}", self.executor, args)
    }

    /// `<runner> create <args>`
    pub fn create(&self, args: &str) -> String {
        format!("{} create {}", self.runner, args)
    }

    /// `<add> <packages...>`
    pub fn add(&self, packages: &[&str]) -> String {
        format!("{} {}", self.add_command, packages.join(" "))
    }

    /// `<add-dev> <packages...>`
    pub fn add_dev(&self, packages: &[&str]) -> String {
        format!("{} {}", self.add_dev_command, packages.join(" "))
    }
}

/// Resolve the package-manager profile for a selection.
pub fn resolve_package_manager(selection: &Selection) -> PackageManagerProfile {
    PackageManagerProfile::resolve(selection)
}
