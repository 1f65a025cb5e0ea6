//! # stack_plan
//!
//! Stack configuration resolver and command-plan generator.
//!
//! Given a project name and a [`Selection`](stack_catalog::Selection), this
//! crate produces:
//!
//! - **Plan**: the ordered shell steps that scaffold the project, install its
//!   packages and initialize its tooling
//! - **Single command**: the primary project-creation command alone
//! - **Compatibility warnings**: advisory notes about conflicting choices
//! - **Structure preview**: the recommended directory layout
//!
//! Generation is pure: no commands are executed and nothing is written.
//!
//! ## Example
//!
//! ```rust
//! use stack_catalog::Selection;
//! use stack_plan::{generate_plan, select_single_command, validate};
//!
//! let selection: Selection = ["nextjs", "typescript"].into_iter().collect();
//! let steps = generate_plan("my-app", &selection);
//! assert_eq!(steps[0].command, select_single_command("my-app", &selection));
//! assert!(validate(&selection).is_empty());
//! ```

pub mod bootstrap;
pub mod compat;
pub mod context;
pub mod dependencies;
pub mod layout;
pub mod options;
pub mod package_manager;
pub mod plan;
pub mod step;
pub mod structure;
pub mod tokens;
pub mod tooling;

pub use bootstrap::{select_bootstrap, Bootstrap, Capabilities};
pub use compat::{validate, validate_messages, CompatibilityWarning};
pub use context::{normalize_project_name, PlanContext, DEFAULT_PROJECT_NAME};
pub use dependencies::{aggregate_dependencies, Dependencies};
pub use layout::{classify_layout, Layout};
pub use options::{PlanOptions, PlanProfile, ShellFlavor};
pub use package_manager::{resolve_package_manager, PackageManager, PackageManagerProfile};
pub use plan::{generate_plan, select_single_command, CommandPlan, PlanGenerator};
pub use step::CommandStep;
pub use structure::{preview_structure, render_tree, EntryKind, TreeEntry};
pub use tooling::sequence_init;
