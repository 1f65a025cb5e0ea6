//! Stack Builder CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Compatibility warnings under `check --strict`
//! - 4: Catalog error

use std::process::ExitCode;

use clap::Parser;
use stack_catalog::CatalogError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;

use commands::{Cli, Commands, Session};
use error::CliError;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const WARNINGS_FOUND: u8 = 3;
    pub const CATALOG_ERROR: u8 = 4;
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet, cli.log_json);

    let result = Session::open(cli.config.as_deref()).and_then(|session| match cli.command {
        Commands::Plan(args) => commands::plan::execute(args, &session),
        Commands::Command(args) => commands::command::execute(args, &session),
        Commands::Check(args) => commands::check::execute(args, &session),
        Commands::Tree(args) => commands::tree::execute(args, &session),
        Commands::Share(args) => commands::share::execute(args, &session),
        Commands::Presets(args) => commands::presets::execute(args, &session),
        Commands::Catalog(args) => commands::catalog::execute(args, &session),
    });

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Logs go to stderr so plans can be piped.
fn init_logging(verbose: bool, quiet: bool, json: bool) {
    let default_directives = if verbose {
        "stack=debug,info"
    } else if quiet {
        "error"
    } else {
        "stack=info,warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    let registry = tracing_subscriber::registry().with(filter);
    let _ = if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
    };
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    if let Some(cli_error) = e.downcast_ref::<CliError>() {
        return match cli_error {
            CliError::InvalidArgument(_) => ExitCodes::INVALID_ARGS,
            CliError::WarningsFound(_) => ExitCodes::WARNINGS_FOUND,
            CliError::Config { .. } => ExitCodes::GENERAL_ERROR,
        };
    }

    match e.downcast_ref::<CatalogError>() {
        Some(
            CatalogError::UnknownTechnology(_)
            | CatalogError::UnknownPreset(_)
            | CatalogError::Incompatible { .. }
            | CatalogError::InvalidShareLink(_),
        ) => ExitCodes::INVALID_ARGS,
        Some(_) => ExitCodes::CATALOG_ERROR,
        None => ExitCodes::GENERAL_ERROR,
    }
}
