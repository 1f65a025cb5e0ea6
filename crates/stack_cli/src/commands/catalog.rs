//! Catalog command - List categories and technologies.

use anyhow::Result;
use clap::Args;
use stack_catalog::Category;

use super::{ensure, Format, Session};

#[derive(Args)]
pub struct CatalogArgs {
    /// Only show one category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

pub fn execute(args: CatalogArgs, session: &Session) -> Result<()> {
    let catalog = &session.catalog;
    let categories: Vec<&Category> = match &args.category {
        Some(id) => {
            let category = catalog.category(id);
            ensure(category.is_some(), format!("unknown category '{}'", id))?;
            category.into_iter().collect()
        }
        None => catalog.categories.iter().collect(),
    };

    if args.format == Format::Json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }

    for category in categories {
        let mode = if category.single_select { "single" } else { "multi" };
        println!("{} [{}] ({}-select)", category.name, category.share_key, mode);
        for tech in &category.technologies {
            if tech.description.is_empty() {
                println!("   {:<16} {}", tech.id, tech.name);
            } else {
                println!("   {:<16} {} - {}", tech.id, tech.name, tech.description);
            }
        }
        println!();
    }

    Ok(())
}
