// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! semcommit - Conventional Commits conformance checks
//!
//! Decides whether a commit message or pull-request title is a semantic
//! (conventional) commit under a given configuration.
//!
//! # Features
//!
//! - **Classifier**: a pure, thread-safe predicate built once from a [`Config`]
//! - **Verdicts**: the rule that accepted or rejected a message, with a stable code
//! - **Parser**: a built-in Conventional Commits parser behind the [`CommitParser`] trait
//!
//! # Example
//!
//! ```
//! use semcommit::{Config, MessageClassifier};
//!
//! let config = Config::default()
//!     .with_scopes(["api", "ui"])
//!     .with_merge_commits(true);
//! let classifier = MessageClassifier::new(config);
//!
//! assert!(classifier.is_semantic("feat(api): add endpoint"));
//! assert!(classifier.is_semantic("Merge branch 'main'"));
//! assert!(!classifier.is_semantic("feat(db): add table"));
//! assert_eq!(classifier.classify("feat(api): add endpoint").code(), "conventional");
//! ```

// Module declarations
pub mod commit;
pub mod config;
pub mod error;
pub mod rules;

// Re-exports for convenience
pub use commit::{CommitParser, ConventionalParser, ParsedCommit};
pub use config::Config;
pub use error::{ParseError, Result};
pub use rules::{is_message_semantic, MessageClassifier, Verdict};
