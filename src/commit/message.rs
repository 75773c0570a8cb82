// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Structured commit message produced by a parser.

use serde::{Deserialize, Serialize};

/// Note title used for breaking-change annotations.
pub const BREAKING_CHANGE: &str = "BREAKING CHANGE";

/// A footer line such as `Refs: #123` or `BREAKING CHANGE: drop v1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    /// Footer token (`Refs`, `Reviewed-by`, `BREAKING CHANGE`).
    pub token: String,
    /// Footer value, continuation lines joined with `\n`.
    pub value: String,
}

/// An annotation extracted from the commit, e.g. a breaking change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub text: String,
}

impl Note {
    /// Create a breaking-change note.
    pub fn breaking_change(text: impl Into<String>) -> Self {
        Self {
            title: BREAKING_CHANGE.to_string(),
            text: text.into(),
        }
    }
}

/// A commit message broken into its conventional parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommit {
    /// Commit type token. Parsers may leave a trailing `!` on it.
    pub commit_type: String,
    /// Optional scope, possibly a comma-separated list.
    pub scope: Option<String>,
    /// Description after the `:` separator.
    pub subject: String,
    /// Optional body.
    pub body: Option<String>,
    /// Footer lines, in order.
    pub footers: Vec<Footer>,
    /// Notes, in order.
    pub notes: Vec<Note>,
}

impl ParsedCommit {
    /// Create a commit with only a type and subject.
    pub fn new(commit_type: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            commit_type: commit_type.into(),
            scope: None,
            subject: subject.into(),
            body: None,
            footers: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Set the scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Append a note.
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Iterate over the individual scopes of a `a, b,c` style scope list.
    pub fn scopes(&self) -> impl Iterator<Item = &str> {
        self.scope
            .as_deref()
            .into_iter()
            .flat_map(|scope| scope.split(','))
            .map(|s| s.strip_prefix(' ').unwrap_or(s))
    }
}
