//! Presets command - List presets.

use anyhow::Result;
use clap::Args;

use super::{Format, Session};

#[derive(Args)]
pub struct PresetsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

pub fn execute(args: PresetsArgs, session: &Session) -> Result<()> {
    let presets = &session.catalog.presets;

    if args.format == Format::Json {
        println!("{}", serde_json::to_string_pretty(presets)?);
        return Ok(());
    }

    if presets.is_empty() {
        println!("No presets defined");
        return Ok(());
    }

    for preset in presets {
        println!("{} ({})", preset.name, preset.id);
        if !preset.description.is_empty() {
            println!("   {}", preset.description);
        }
        println!("   {}", preset.selection());
    }

    Ok(())
}
