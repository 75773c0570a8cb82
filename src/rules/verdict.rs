// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Classification outcomes.

use serde::Serialize;
use std::fmt;

/// The rule that decided a classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "kebab-case")]
pub enum Verdict {
    /// Accepted merge commit.
    MergeCommit,
    /// Accepted revert commit.
    RevertCommit,
    /// Message opens with an explicit `BREAKING CHANGE` declaration.
    BreakingChangeDeclaration,
    /// Valid conventional commit.
    Conventional,
    /// Message starts with a space.
    LeadingWhitespace,
    /// Message did not parse.
    Unparsable { reason: String },
    /// Type is not in the allowed set.
    TypeNotAllowed { commit_type: String },
    /// No single-line `: ` followed by a non-space character.
    MissingSpaceAfterColon,
    /// A sub-scope is not in the allowed set.
    ScopeNotAllowed { scope: String },
    /// Commit is marked as a breaking change.
    BreakingChange,
}

impl Verdict {
    /// Whether the message counts as semantic.
    pub fn is_semantic(&self) -> bool {
        matches!(
            self,
            Verdict::MergeCommit
                | Verdict::RevertCommit
                | Verdict::BreakingChangeDeclaration
                | Verdict::Conventional
        )
    }

    /// Stable code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            Verdict::MergeCommit => "merge-commit",
            Verdict::RevertCommit => "revert-commit",
            Verdict::BreakingChangeDeclaration => "breaking-change-declaration",
            Verdict::Conventional => "conventional",
            Verdict::LeadingWhitespace => "leading-whitespace",
            Verdict::Unparsable { .. } => "unparsable",
            Verdict::TypeNotAllowed { .. } => "type-not-allowed",
            Verdict::MissingSpaceAfterColon => "missing-space-after-colon",
            Verdict::ScopeNotAllowed { .. } => "scope-not-allowed",
            Verdict::BreakingChange => "breaking-change",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::MergeCommit => write!(f, "Merge commit"),
            Verdict::RevertCommit => write!(f, "Revert commit"),
            Verdict::BreakingChangeDeclaration => write!(f, "Breaking change declaration"),
            Verdict::Conventional => write!(f, "Conventional commit"),
            Verdict::LeadingWhitespace => write!(f, "Message starts with whitespace"),
            Verdict::Unparsable { reason } => write!(f, "Unparsable message: {}", reason),
            Verdict::TypeNotAllowed { commit_type } => {
                write!(f, "Commit type '{}' is not allowed", commit_type)
            }
            Verdict::MissingSpaceAfterColon => {
                write!(f, "Header must have a space and a description after ':'")
            }
            Verdict::ScopeNotAllowed { scope } => write!(f, "Scope '{}' is not allowed", scope),
            Verdict::BreakingChange => write!(f, "Breaking change must be declared explicitly"),
        }
    }
}
