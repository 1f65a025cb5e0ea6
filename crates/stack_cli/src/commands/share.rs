//! Share command - Build a share link for a selection.

use anyhow::Result;
use clap::Args;
use stack_catalog::{ShareLink, DEFAULT_BASE_URL};

use super::{SelectionArgs, Session};

#[derive(Args)]
pub struct ShareArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Builder page URL the link points to
    #[arg(long, env = "STACK_BUILDER_SHARE_URL", value_name = "URL")]
    pub base_url: Option<String>,
}

pub fn execute(args: ShareArgs, session: &Session) -> Result<()> {
    let selection = session.selection(&args.selection)?;
    let base_url = args
        .base_url
        .as_deref()
        .or(session.config.share_base_url.as_deref())
        .unwrap_or(DEFAULT_BASE_URL);

    println!("{}", ShareLink::new(&session.catalog).encode(&selection, base_url)?);
    Ok(())
}
