//! Resolver options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which generator behavior to use for stacks a scaffolding CLI can assemble on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanProfile {
    /// Every dependency and tool is installed by an explicit step.
    #[default]
    PerStep,
    /// The consolidated `tanstack` option hands add-ons, toolchain and git
    /// to `create-tsrouter-app` and drops the matching steps.
    Delegated,
}

impl PlanProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerStep => "per-step",
            Self::Delegated => "delegated",
        }
    }
}

impl fmt::Display for PlanProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlanProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "per-step" | "per_step" | "perstep" => Ok(Self::PerStep),
            "delegated" => Ok(Self::Delegated),
            other => Err(format!(
                "unknown profile '{}' (expected per-step or delegated)",
                other
            )),
        }
    }
}

/// Target shell for directory-creation commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShellFlavor {
    #[default]
    Posix,
    Windows,
}

impl ShellFlavor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Posix => "posix",
            Self::Windows => "windows",
        }
    }

    /// Command creating a nested directory path including its parents.
    pub fn mkdir_all(&self, segments: &[&str]) -> String {
        match self {
            Self::Posix => format!("mkdir -p {}", segments.join("/")),
            Self::Windows => format!("mkdir {}", segments.join("\\")),
        }
    }
}

impl fmt::Display for ShellFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShellFlavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "posix" | "sh" | "bash" => Ok(Self::Posix),
            "windows" | "cmd" => Ok(Self::Windows),
            other => Err(format!("unknown shell '{}' (expected posix or windows)", other)),
        }
    }
}

/// Options passed to the plan generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanOptions {
    #[serde(default)]
    pub profile: PlanProfile,
    #[serde(default)]
    pub shell: ShellFlavor,
}

impl PlanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(mut self, profile: PlanProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn shell(mut self, shell: ShellFlavor) -> Self {
        self.shell = shell;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mkdir_all_per_shell() {
        let path = ["my-app", "src", "controllers"];
        assert_eq!(ShellFlavor::Posix.mkdir_all(&path), "mkdir -p my-app/src/controllers");
        assert_eq!(ShellFlavor::Windows.mkdir_all(&path), "mkdir my-app\\src\\controllers");
    }

    #[test]
    fn test_parse_profile() {
        assert_eq!("delegated".parse::<PlanProfile>().unwrap(), PlanProfile::Delegated);
        assert_eq!("Per-Step".parse::<PlanProfile>().unwrap(), PlanProfile::PerStep);
        assert!("legacy".parse::<PlanProfile>().is_err());
    }

    #[test]
    fn test_options_from_yaml() {
        let options: PlanOptions = serde_yaml::from_str("profile: delegated\nshell: windows\n").unwrap();
        assert_eq!(options, PlanOptions::new().profile(PlanProfile::Delegated).shell(ShellFlavor::Windows));
    }
}
