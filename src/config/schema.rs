// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Classifier configuration.
///
/// Every field is optional when deserializing, so an empty document yields
/// an unrestricted configuration with merge and revert commits rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Allowed scopes (absent or empty means all allowed).
    pub scopes: Option<Vec<String>>,

    /// Allowed commit types (empty means the default conventional types).
    pub types: Vec<String>,

    /// Accept any message starting with `Merge`.
    pub allow_merge_commits: bool,

    /// Accept any message starting with `Revert`.
    pub allow_revert_commits: bool,
}

impl Config {
    /// Restrict the allowed scopes.
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = Some(scopes.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict the allowed types.
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether merge commits are accepted.
    pub fn with_merge_commits(mut self, allow: bool) -> Self {
        self.allow_merge_commits = allow;
        self
    }

    /// Set whether revert commits are accepted.
    pub fn with_revert_commits(mut self, allow: bool) -> Self {
        self.allow_revert_commits = allow;
        self
    }
}
