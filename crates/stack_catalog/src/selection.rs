//! The user's current set of chosen technology tokens.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix of the "none" choice of a category. Such tokens are inert.
pub const NONE_PREFIX: &str = "no-";

/// Returns true for tokens that stand for "no selection in this category".
pub fn is_inert(token: &str) -> bool {
    token.starts_with(NONE_PREFIX)
}

/// Split a comma-separated token list, trimming whitespace and dropping empties.
pub fn split_tokens(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|t| !t.is_empty())
}

/// A set of technology tokens.
///
/// Order is irrelevant: the set iterates in lexical order so every derived
/// output is reproducible. Raw insertion performs no validation; the
/// catalog's `toggle`/`select` enforce single-select and incompatibility
/// rules for interactive mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    tokens: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a token is selected.
    pub fn has(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Check whether any of the given tokens is selected.
    pub fn has_any(&self, tokens: &[&str]) -> bool {
        tokens.iter().any(|t| self.has(t))
    }

    /// Selected members of `tokens`, in the order of `tokens`.
    pub fn filter_in<'a>(&self, tokens: &[&'a str]) -> Vec<&'a str> {
        tokens.iter().copied().filter(|t| self.has(t)).collect()
    }

    /// Insert a token without validation. Returns false if already present.
    pub fn insert(&mut self, token: impl Into<String>) -> bool {
        self.tokens.insert(token.into())
    }

    /// Remove a token. Returns false if it was not selected.
    pub fn remove(&mut self, token: &str) -> bool {
        self.tokens.remove(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Tokens that are not "none" choices.
    pub fn active(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|t| !is_inert(t))
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for Selection {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.tokens.extend(iter.into_iter().map(Into::into));
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<&str> = self.iter().collect();
        write!(f, "{}", tokens.join(","))
    }
}
