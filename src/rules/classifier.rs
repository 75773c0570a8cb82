// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Semantic message classifier.

use crate::commit::{CommitParser, ConventionalParser};
use crate::config::{default_types, Config};
use std::collections::HashSet;

use super::builtin;
use super::verdict::Verdict;

/// Classifies messages as semantic or not under a fixed configuration.
///
/// The allowed type and scope sets are resolved once at construction, so
/// classification itself only reads them.
#[derive(Debug)]
pub struct MessageClassifier {
    types: HashSet<String>,
    scopes: Option<HashSet<String>>,
    allow_merge_commits: bool,
    allow_revert_commits: bool,
    parser: Box<dyn CommitParser>,
}

impl MessageClassifier {
    /// Create a classifier using the built-in conventional commit parser.
    pub fn new(config: Config) -> Self {
        Self::with_parser(config, ConventionalParser::new())
    }

    /// Create a classifier with a custom parser.
    pub fn with_parser(config: Config, parser: impl CommitParser + 'static) -> Self {
        let types: HashSet<String> = if config.types.is_empty() {
            default_types().map(String::from).collect()
        } else {
            config.types.into_iter().collect()
        };

        let scopes: Option<HashSet<String>> = config
            .scopes
            .filter(|scopes| !scopes.is_empty())
            .map(|scopes| scopes.into_iter().collect());

        Self {
            types,
            scopes,
            allow_merge_commits: config.allow_merge_commits,
            allow_revert_commits: config.allow_revert_commits,
            parser: Box::new(parser),
        }
    }

    /// Check whether a message is semantic.
    pub fn is_semantic(&self, message: &str) -> bool {
        self.classify(message).is_semantic()
    }

    /// Classify a message, reporting the rule that decided it.
    pub fn classify(&self, message: &str) -> Verdict {
        if self.allow_merge_commits && builtin::is_merge_commit(message) {
            tracing::debug!("Accepting merge commit");
            return Verdict::MergeCommit;
        }

        if self.allow_revert_commits && builtin::is_revert_commit(message) {
            tracing::debug!("Accepting revert commit");
            return Verdict::RevertCommit;
        }

        if builtin::is_breaking_change_declaration(message) {
            tracing::debug!("Accepting explicit breaking change declaration");
            return Verdict::BreakingChangeDeclaration;
        }

        if builtin::has_leading_space(message) {
            tracing::debug!("Rejecting message with leading whitespace");
            return Verdict::LeadingWhitespace;
        }

        let commit = match self.parser.parse(message) {
            Ok(commit) => commit,
            Err(e) => {
                tracing::debug!("Rejecting unparsable message: {}", e);
                return Verdict::Unparsable {
                    reason: e.to_string(),
                };
            }
        };

        let type_allowed = builtin::is_type_allowed(&commit, &self.types);
        let syntax_valid = builtin::has_valid_type_syntax(message);
        let disallowed_scope = builtin::find_disallowed_scope(&commit, self.scopes.as_ref());
        let breaking = builtin::has_breaking_change(&commit);

        let verdict = if !type_allowed {
            Verdict::TypeNotAllowed {
                commit_type: commit.commit_type.clone(),
            }
        } else if !syntax_valid {
            Verdict::MissingSpaceAfterColon
        } else if let Some(scope) = disallowed_scope {
            Verdict::ScopeNotAllowed {
                scope: scope.to_string(),
            }
        } else if breaking {
            Verdict::BreakingChange
        } else {
            Verdict::Conventional
        };

        tracing::debug!("Classified '{}' as {}", commit.commit_type, verdict.code());
        verdict
    }

    /// The resolved set of allowed types.
    pub fn types(&self) -> &HashSet<String> {
        &self.types
    }

    /// The resolved set of allowed scopes (`None` when unrestricted).
    pub fn scopes(&self) -> Option<&HashSet<String>> {
        self.scopes.as_ref()
    }
}

/// Build a semantic-message predicate from a configuration.
pub fn is_message_semantic(config: Config) -> impl Fn(&str) -> bool + Send + Sync {
    let classifier = MessageClassifier::new(config);
    move |message: &str| classifier.is_semantic(message)
}
