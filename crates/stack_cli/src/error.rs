//! CLI-level errors that map to dedicated exit codes.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0} compatibility warning(s) found")]
    WarningsFound(usize),

    #[error("Failed to read config {path:?}: {message}")]
    Config { path: PathBuf, message: String },
}
