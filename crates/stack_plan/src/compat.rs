//! Compatibility warnings.
//!
//! Warnings are advisory; they never block plan generation. Rules are
//! evaluated in table order so the output order is stable.

use std::fmt;

use serde::Serialize;
use stack_catalog::Selection;
use tracing::debug;

use crate::tokens;

/// A warning raised by one compatibility rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityWarning {
    pub rule: &'static str,
    /// Human-readable rule name.
    pub name: &'static str,
    /// Tokens that triggered the rule.
    pub tokens: Vec<&'static str>,
    pub message: String,
}

impl fmt::Display for CompatibilityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Tokens that triggered a rule and the message to show.
pub type Finding = (Vec<&'static str>, String);

/// A compatibility rule.
pub struct CompatibilityRule {
    pub id: &'static str,
    pub name: &'static str,
    pub check: fn(&Selection) -> Option<Finding>,
}

impl CompatibilityRule {
    fn evaluate(&self, selection: &Selection) -> Option<CompatibilityWarning> {
        let (tokens, message) = (self.check)(selection)?;
        debug!("Compatibility rule '{}' triggered", self.id);
        Some(CompatibilityWarning {
            rule: self.id,
            name: self.name,
            tokens,
            message,
        })
    }
}

pub static RULES: &[CompatibilityRule] = &[
    CompatibilityRule {
        id: "conflicting-linters",
        name: "Conflicting linters",
        check: |s| {
            pair(
                s,
                ["biome", "eslint"],
                "Biome and ESLint may conflict. Pick only one.",
            )
        },
    },
    CompatibilityRule {
        id: "multiple-orms",
        name: "Multiple ORMs",
        check: |s| {
            many(s, tokens::ORMS, |list| {
                format!("Multiple ORMs selected: {}. Consider using only one.", list)
            })
        },
    },
    CompatibilityRule {
        id: "multiple-hook-managers",
        name: "Multiple Git hook managers",
        check: |s| {
            pair(
                s,
                ["husky", "lefthook"],
                "Husky and Lefthook are both Git hook managers. Pick only one.",
            )
        },
    },
    CompatibilityRule {
        id: "authjs-without-nextjs",
        name: "Auth.js outside Next.js",
        check: |s| {
            (s.has("authjs") && !s.has("nextjs")).then(|| {
                (
                    vec!["authjs"],
                    "Auth.js (next-auth) is designed primarily for Next.js.".to_string(),
                )
            })
        },
    },
    CompatibilityRule {
        id: "multiple-routers",
        name: "Multiple routers",
        check: |s| {
            many(s, tokens::ROUTERS, |list| {
                format!("Multiple routers selected: {}. Pick only one.", list)
            })
        },
    },
    CompatibilityRule {
        id: "router-without-host",
        name: "TanStack Router without a React host",
        check: router_without_host,
    },
];

fn pair(selection: &Selection, tokens: [&'static str; 2], message: &str) -> Option<Finding> {
    (selection.has(tokens[0]) && selection.has(tokens[1])).then(|| (tokens.to_vec(), message.to_string()))
}

fn many(selection: &Selection, group: &[&'static str], message: fn(&str) -> String) -> Option<Finding> {
    let selected = selection.filter_in(group);
    (selected.len() > 1).then(|| {
        let message = message(&selected.join(", "));
        (selected, message)
    })
}

/// A Vite TanStack Router template is itself a React host, so this never warns.
fn router_without_host(selection: &Selection) -> Option<Finding> {
    if selection.has("tanstack-router") && !selection.has_any(&["tanstack-start", "nextjs", "react-router"]) {
        debug!("TanStack Router selected as its own React host");
    }
    None
}

/// Evaluate every rule against a selection.
pub fn validate(selection: &Selection) -> Vec<CompatibilityWarning> {
    RULES.iter().filter_map(|rule| rule.evaluate(selection)).collect()
}

/// Warning messages only.
pub fn validate_messages(selection: &Selection) -> Vec<String> {
    validate(selection).into_iter().map(|w| w.message).collect()
}
