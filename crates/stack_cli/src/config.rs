//! CLI configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stack_plan::{PlanProfile, ShellFlavor};
use tracing::{debug, info};

use crate::error::CliError;

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = ".stack-builder.yaml";

/// Optional defaults read from YAML. Flags and environment variables win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub project_name: Option<String>,
    pub profile: Option<PlanProfile>,
    pub shell: Option<ShellFlavor>,
    /// Alternate catalog file, relative to the config file
    pub catalog: Option<PathBuf>,
    /// Tokens used when no stack input is given
    pub default_stack: Vec<String>,
    pub share_base_url: Option<String>,
}

impl CliConfig {
    /// Load the config at `explicit`, or `.stack-builder.yaml` under `dir`
    /// when present, or defaults.
    ///
    /// An explicit path must exist.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, CliError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let candidate = dir.join(DEFAULT_CONFIG_FILE);
                if candidate.is_file() {
                    Self::from_file(&candidate)
                } else {
                    debug!("No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut config: CliConfig = serde_yaml::from_str(&content).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if let (Some(catalog), Some(parent)) = (&config.catalog, path.parent()) {
            if catalog.is_relative() {
                config.catalog = Some(parent.join(catalog));
            }
        }

        info!("Loaded config from {:?}", path);
        Ok(config)
    }
}
