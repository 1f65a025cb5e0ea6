//! Command command - Print the single project-creation command.

use anyhow::Result;
use clap::Args;
use stack_plan::PlanGenerator;

use super::{ProjectArgs, SelectionArgs, Session};

#[derive(Args)]
pub struct CommandArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    #[command(flatten)]
    pub project: ProjectArgs,
}

pub fn execute(args: CommandArgs, session: &Session) -> Result<()> {
    let selection = session.selection(&args.selection)?;
    let name = session.project_name(&args.project)?;

    let generator = PlanGenerator::new(session.plan_options(&args.project));
    println!("{}", generator.single_command(&name, &selection));

    Ok(())
}
