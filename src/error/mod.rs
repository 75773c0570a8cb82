// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for semcommit.
//!
//! The only fallible operation in the crate is parsing a message into a
//! [`ParsedCommit`](crate::commit::ParsedCommit). The classifier catches these
//! errors and turns them into a negative verdict.

use thiserror::Error;

/// Reasons a message does not parse as a conventional commit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty commit message")]
    EmptyMessage,

    #[error("Missing commit type")]
    MissingType,

    #[error("Missing commit description")]
    MissingDescription,

    #[error("Invalid conventional commit format: {message}")]
    InvalidFormat { message: String },
}

impl From<git_conventional::Error> for ParseError {
    fn from(err: git_conventional::Error) -> Self {
        match err.kind() {
            git_conventional::ErrorKind::MissingType => ParseError::MissingType,
            git_conventional::ErrorKind::MissingDescription => ParseError::MissingDescription,
            _ => ParseError::InvalidFormat {
                message: err.to_string(),
            },
        }
    }
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::InvalidFormat {
            message: "unexpected token".to_string(),
        };
        assert!(err.to_string().contains("unexpected token"));
    }

    #[test]
    fn test_from_git_conventional_error() {
        let err = git_conventional::Commit::parse("no separator here").unwrap_err();
        let parse_err: ParseError = err.into();
        assert_ne!(parse_err, ParseError::EmptyMessage);
        assert!(!parse_err.to_string().is_empty());
    }
}
