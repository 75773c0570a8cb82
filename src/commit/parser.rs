// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Conventional commit parsing.

use crate::error::{ParseError, Result};

use super::message::{Footer, Note, ParsedCommit};

/// Converts a raw message into a [`ParsedCommit`].
pub trait CommitParser: std::fmt::Debug + Send + Sync {
    /// Parse the message, failing if it is not a conventional commit.
    fn parse(&self, message: &str) -> Result<ParsedCommit>;
}

/// Parser for the Conventional Commits format, backed by `git-conventional`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConventionalParser;

impl ConventionalParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }
}

impl CommitParser for ConventionalParser {
    fn parse(&self, message: &str) -> Result<ParsedCommit> {
        if message.trim().is_empty() {
            return Err(ParseError::EmptyMessage);
        }

        let commit = git_conventional::Commit::parse(message)?;

        let footers: Vec<Footer> = commit
            .footers()
            .iter()
            .map(|footer| Footer {
                token: footer.token().as_str().to_string(),
                value: footer.value().to_string(),
            })
            .collect();

        // A `!` without a breaking footer still yields one note.
        let mut notes: Vec<Note> = commit
            .footers()
            .iter()
            .filter(|footer| footer.breaking())
            .map(|footer| Note::breaking_change(footer.value()))
            .collect();
        if commit.breaking() && notes.is_empty() {
            let text = commit
                .breaking_description()
                .unwrap_or_else(|| commit.description());
            notes.push(Note::breaking_change(text));
        }

        let parsed = ParsedCommit {
            commit_type: commit.type_().as_str().to_string(),
            scope: commit.scope().map(|scope| scope.as_str().to_string()),
            subject: commit.description().to_string(),
            body: commit.body().map(str::to_string),
            footers,
            notes,
        };

        tracing::debug!(
            "Parsed commit: type={}, scope={:?}, notes={}",
            parsed.commit_type,
            parsed.scope,
            parsed.notes.len()
        );

        Ok(parsed)
    }
}
