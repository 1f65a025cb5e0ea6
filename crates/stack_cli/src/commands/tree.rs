//! Tree command - Preview the recommended directory layout.

use anyhow::Result;
use clap::Args;
use stack_plan::{preview_structure, render_tree};

use super::{Format, ProjectArgs, SelectionArgs, Session};

#[derive(Args)]
pub struct TreeArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

pub fn execute(args: TreeArgs, session: &Session) -> Result<()> {
    let selection = session.selection(&args.selection)?;
    let name = session.project_name(&args.project)?;
    let profile = session.plan_options(&args.project).profile;

    let entries = preview_structure(&name, &selection, profile);
    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        Format::Text => print!("{}", render_tree(&entries)),
    }

    Ok(())
}
