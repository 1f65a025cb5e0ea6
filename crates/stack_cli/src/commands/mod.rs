//! CLI command definitions.
//!
//! Every subcommand reads a selection from the same inputs (`--stack`,
//! `--preset`, `--from-url`, `--random`, or the configured default stack)
//! and renders one view of the resolver output.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;
use stack_catalog::{split_tokens, Catalog, CatalogLoader, Selection, ShareLink};
use stack_plan::{normalize_project_name, PlanOptions, PlanProfile, ShellFlavor};
use tracing::{debug, warn};

use crate::config::CliConfig;
use crate::error::CliError;

pub mod catalog;
pub mod check;
pub mod command;
pub mod plan;
pub mod presets;
pub mod share;
pub mod tree;

/// Stack Builder - plan the commands that scaffold a JavaScript/TypeScript project
#[derive(Parser)]
#[command(name = "stack-builder")]
#[command(version, about = "Stack Builder - turn a technology selection into a scaffolding plan")]
#[command(long_about = r#"
Stack Builder turns a set of chosen technologies into the ordered shell
commands that create, install and configure a project. Nothing is executed.

COMMANDS:
  plan     → Full command plan (text, json or shell script)
  command  → The single project-creation command
  check    → Compatibility warnings for a selection
  tree     → Recommended directory layout
  share    → Share link for a selection
  presets  → Available presets
  catalog  → Categories and technologies

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Compatibility warnings (check --strict)
  4 - Catalog error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (defaults to ./.stack-builder.yaml when present)
    #[arg(long, global = true, env = "STACK_BUILDER_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the full command plan
    Plan(plan::PlanArgs),

    /// Print only the project-creation command
    Command(command::CommandArgs),

    /// Report compatibility warnings
    Check(check::CheckArgs),

    /// Preview the recommended directory layout
    Tree(tree::TreeArgs),

    /// Build a share link for a selection
    Share(share::ShareArgs),

    /// List presets
    Presets(presets::PresetsArgs),

    /// List catalog categories and technologies
    Catalog(catalog::CatalogArgs),
}

/// Where the selection comes from.
#[derive(Args, Debug, Default, Clone)]
pub struct SelectionArgs {
    /// Technology tokens, comma-separated; repeatable
    #[arg(short, long = "stack", value_name = "TOKENS")]
    pub stack: Vec<String>,

    /// Start from a preset (id or slug)
    #[arg(short, long, conflicts_with = "from_url")]
    pub preset: Option<String>,

    /// Start from a share link or query string
    #[arg(long, value_name = "URL")]
    pub from_url: Option<String>,

    /// Start from a random stack
    #[arg(long, conflicts_with_all = ["preset", "from_url"])]
    pub random: bool,

    /// Seed for --random, to reproduce a stack
    #[arg(long, requires = "random", value_name = "SEED")]
    pub seed: Option<u64>,
}

impl SelectionArgs {
    fn is_empty(&self) -> bool {
        self.stack.is_empty() && self.preset.is_none() && self.from_url.is_none() && !self.random
    }
}

/// Project naming and generator options.
#[derive(Args, Debug, Default, Clone)]
pub struct ProjectArgs {
    /// Project directory name
    #[arg(short, long, env = "STACK_BUILDER_NAME")]
    pub name: Option<String>,

    /// Generator profile: per-step or delegated
    #[arg(long, env = "STACK_BUILDER_PROFILE")]
    pub profile: Option<PlanProfile>,

    /// Target shell for directory commands: posix or windows
    #[arg(long, env = "STACK_BUILDER_SHELL")]
    pub shell: Option<ShellFlavor>,
}

/// Output format of the listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Loaded config and catalog shared by every command.
pub struct Session {
    pub config: CliConfig,
    pub catalog: Catalog,
}

impl Session {
    /// Load config (explicit path or working-directory default) and the catalog it names.
    pub fn open(config_path: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read working directory")?;
        let config = CliConfig::load(config_path, &cwd)?;

        let loader = match &config.catalog {
            Some(path) => CatalogLoader::from_path(path),
            None => CatalogLoader::new(),
        };
        let catalog = loader.load().context("Failed to load catalog")?;

        Ok(Self { config, catalog })
    }

    /// Build the selection from the command-line inputs.
    ///
    /// A preset, share link or random stack is the starting point; `--stack` tokens are
    /// then selected on top of it through the catalog, so single-select and
    /// incompatibility rules apply. Without any input the configured default
    /// stack is used.
    pub fn selection(&self, args: &SelectionArgs) -> Result<Selection> {
        let mut selection = if let Some(preset) = &args.preset {
            self.catalog.apply_preset(preset)?
        } else if let Some(url) = &args.from_url {
            ShareLink::new(&self.catalog).decode(url)?
        } else if args.random {
            match args.seed {
                Some(seed) => self.catalog.random_selection(&mut StdRng::seed_from_u64(seed)),
                None => self.catalog.random_selection(&mut rand::rng()),
            }
        } else {
            Selection::new()
        };

        let tokens: Vec<&str> = if args.is_empty() {
            self.config.default_stack.iter().map(String::as_str).collect()
        } else {
            args.stack.iter().flat_map(|s| split_tokens(s)).collect()
        };

        for token in tokens {
            self.catalog.select(&mut selection, token)?;
        }

        debug!("Selection: {}", selection);
        Ok(selection)
    }

    /// Generator options: flag or environment, then config, then defaults.
    pub fn plan_options(&self, args: &ProjectArgs) -> PlanOptions {
        PlanOptions::new()
            .profile(args.profile.or(self.config.profile).unwrap_or_default())
            .shell(args.shell.or(self.config.shell).unwrap_or_default())
    }

    /// Project name: flag or environment, then config, then the default.
    pub fn project_name(&self, args: &ProjectArgs) -> Result<String> {
        let raw = args
            .name
            .as_deref()
            .or(self.config.project_name.as_deref())
            .unwrap_or_default();
        let name = normalize_project_name(raw).to_string();
        check_project_name(&name);
        Ok(name)
    }
}

static SAFE_PROJECT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("valid project name pattern"));

/// Names are not quoted in generated commands; warn about risky characters.
fn check_project_name(name: &str) -> bool {
    let safe = SAFE_PROJECT_NAME.is_match(name);
    if !safe {
        warn!(
            "Project name '{}' contains characters outside [A-Za-z0-9._-]; generated commands will not quote it",
            name
        );
    }
    safe
}

/// Fail with an invalid-argument error unless `condition` holds.
pub fn ensure(condition: bool, message: impl Into<String>) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(CliError::InvalidArgument(message.into()).into())
    }
}
