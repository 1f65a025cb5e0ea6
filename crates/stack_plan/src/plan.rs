//! Plan composition.

use serde::Serialize;
use stack_catalog::Selection;
use tracing::{debug, info};

use crate::bootstrap::{self, Bootstrap};
use crate::context::PlanContext;
use crate::dependencies::{self, Dependencies};
use crate::layout::{self, Layout};
use crate::options::PlanOptions;
use crate::package_manager::PackageManager;
use crate::step::CommandStep;
use crate::tooling;

/// A complete command plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandPlan {
    pub project_name: String,
    pub layout: Layout,
    pub package_manager: PackageManager,
    /// Id of the bootstrap strategy used.
    pub bootstrap: &'static str,
    pub steps: Vec<CommandStep>,
    pub dependencies: Dependencies,
}

impl CommandPlan {
    /// The first step, which creates the project.
    pub fn primary_command(&self) -> Option<&str> {
        self.steps.first().map(|s| s.command.as_str())
    }

    /// Steps as a shell script, one command per line under a `# label` comment.
    pub fn to_script(&self) -> String {
        self.steps
            .iter()
            .map(|s| format!("# {}\n{}\n", s.label, s.command))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Plan generator.
///
/// Stateless apart from its options; the same inputs always produce the
/// same plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanGenerator {
    options: PlanOptions,
}

impl PlanGenerator {
    pub fn new(options: PlanOptions) -> Self {
        Self { options }
    }

    /// Generate the full plan for a selection.
    ///
    /// Steps come out as: bootstrap, navigation or server structure,
    /// dependency installs, then tool initialization.
    pub fn generate(&self, project_name: &str, selection: &Selection) -> CommandPlan {
        let ctx = PlanContext::new(project_name, selection, self.options);
        let layout = layout::classify_layout(selection, self.options.profile);

        info!(
            "Generating {} plan for '{}' ({} tokens, {})",
            layout,
            ctx.project_name,
            selection.len(),
            ctx.pm.manager
        );

        let bootstrap: Bootstrap = bootstrap::select_bootstrap(&ctx);
        let navigation = layout::navigation_step(&ctx, layout, &bootstrap);
        let deps = dependencies::aggregate_dependencies(&ctx, &bootstrap.capabilities);
        let init = tooling::sequence_init(&ctx, &bootstrap.capabilities);

        let mut steps = vec![bootstrap.step];
        steps.extend(navigation);
        steps.extend(dependencies::install_steps(&ctx, &deps));
        steps.extend(init);

        debug!("Plan has {} steps", steps.len());

        CommandPlan {
            project_name: ctx.project_name.to_string(),
            layout,
            package_manager: ctx.pm.manager,
            bootstrap: bootstrap.strategy,
            steps,
            dependencies: deps,
        }
    }

    /// Generate only the ordered steps.
    pub fn steps(&self, project_name: &str, selection: &Selection) -> Vec<CommandStep> {
        self.generate(project_name, selection).steps
    }

    /// The primary project-creation command.
    pub fn single_command(&self, project_name: &str, selection: &Selection) -> String {
        let ctx = PlanContext::new(project_name, selection, self.options);
        bootstrap::select_single_command(&ctx)
    }
}

/// Generate the ordered plan with default options.
pub fn generate_plan(project_name: &str, selection: &Selection) -> Vec<CommandStep> {
    PlanGenerator::default().steps(project_name, selection)
}

/// The quick-copy bootstrap command with default options.
pub fn select_single_command(project_name: &str, selection: &Selection) -> String {
    PlanGenerator::default().single_command(project_name, selection)
}
