//! Plan command - Generate the full command plan.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use stack_plan::{validate, CommandPlan, CompatibilityWarning, PlanGenerator};
use tracing::info;

use super::{ProjectArgs, SelectionArgs, Session};

#[derive(Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = PlanFormat::Text)]
    pub format: PlanFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanFormat {
    Text,
    Json,
    /// Shell script with one `# label` comment per step
    Script,
}

#[derive(Serialize)]
struct PlanReport<'a> {
    #[serde(flatten)]
    plan: &'a CommandPlan,
    warnings: &'a [CompatibilityWarning],
}

pub fn execute(args: PlanArgs, session: &Session) -> Result<()> {
    let selection = session.selection(&args.selection)?;
    let name = session.project_name(&args.project)?;
    let generator = PlanGenerator::new(session.plan_options(&args.project));

    let plan = generator.generate(&name, &selection);
    let warnings = validate(&selection);
    info!("Plan '{}' has {} steps", plan.project_name, plan.steps.len());

    match args.format {
        PlanFormat::Json => {
            let report = PlanReport {
                plan: &plan,
                warnings: &warnings,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }
        PlanFormat::Script => print!("{}", plan.to_script()),
        PlanFormat::Text => print_text(&plan),
    }

    for warning in &warnings {
        eprintln!("⚠️  {}", warning);
    }

    Ok(())
}

fn print_text(plan: &CommandPlan) {
    println!(
        "📦 {} ({}, {})",
        plan.project_name, plan.layout, plan.package_manager
    );
    println!();

    for (i, step) in plan.steps.iter().enumerate() {
        println!("{}. {}", i + 1, step.label);
        if let Some(description) = &step.description {
            println!("   {}", description);
        }
        println!("   $ {}", step.command);
        println!();
    }
}
