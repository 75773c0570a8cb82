// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default conventional commit types.

use serde::{Deserialize, Serialize};

/// A well-known conventional commit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
    Chore,
    Revert,
}

impl CommitType {
    /// Get the string representation of the commit type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Chore => "chore",
            CommitType::Revert => "revert",
        }
    }

    /// Get all commit types.
    pub fn all() -> &'static [CommitType] {
        &[
            CommitType::Feat,
            CommitType::Fix,
            CommitType::Docs,
            CommitType::Style,
            CommitType::Refactor,
            CommitType::Perf,
            CommitType::Test,
            CommitType::Build,
            CommitType::Ci,
            CommitType::Chore,
            CommitType::Revert,
        ]
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The type names used when a configuration lists no types.
pub fn default_types() -> impl Iterator<Item = &'static str> {
    CommitType::all().iter().map(CommitType::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_types() {
        let types: Vec<_> = default_types().collect();
        assert_eq!(types.len(), 11);
        assert!(types.contains(&"feat"));
        assert!(types.contains(&"revert"));
        assert!(!types.contains(&"wip"));
    }

    #[test]
    fn test_commit_type_display() {
        assert_eq!(CommitType::Feat.to_string(), "feat");
        assert_eq!(CommitType::Ci.to_string(), "ci");
    }

    #[test]
    fn test_commit_type_serialization() {
        let json = serde_json::to_string(&CommitType::Refactor).unwrap();
        assert_eq!(json, "\"refactor\"");
    }
}
