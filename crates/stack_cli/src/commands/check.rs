//! Check command - Report compatibility warnings.

use anyhow::Result;
use clap::Args;
use stack_plan::validate;

use super::{Format, SelectionArgs, Session};
use crate::error::CliError;

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Fail when any warning is found
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

pub fn execute(args: CheckArgs, session: &Session) -> Result<()> {
    let selection = session.selection(&args.selection)?;
    let warnings = validate(&selection);

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&warnings)?),
        Format::Text if warnings.is_empty() => println!("✅ No compatibility warnings"),
        Format::Text => {
            println!("⚠️  {} compatibility warning(s):", warnings.len());
            for warning in &warnings {
                println!("   - {} [{}]: {}", warning.name, warning.rule, warning.message);
            }
        }
    }

    if args.strict && !warnings.is_empty() {
        return Err(CliError::WarningsFound(warnings.len()).into());
    }

    Ok(())
}
