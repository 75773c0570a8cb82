// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in checks used by the classifier.

use crate::commit::{ParsedCommit, BREAKING_CHANGE};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    /// A `: ` separator followed by a non-space character, on a single line.
    /// Line terminators are `\n`, `\r`, U+2028 and U+2029.
    static ref VALID_TYPE_SYNTAX_REGEX: Regex =
        Regex::new(r"^[^\n\r\x{2028}\x{2029}]*: [^ ][^\n\r\x{2028}\x{2029}]*$").unwrap();
}

pub(crate) fn is_merge_commit(message: &str) -> bool {
    message.starts_with("Merge")
}

pub(crate) fn is_revert_commit(message: &str) -> bool {
    message.starts_with("Revert")
}

/// Check for an explicit breaking-change declaration at the start.
///
/// Surrounding whitespace and byte-order marks are ignored.
pub(crate) fn is_breaking_change_declaration(message: &str) -> bool {
    message
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .to_uppercase()
        .starts_with(BREAKING_CHANGE)
}

pub(crate) fn has_leading_space(message: &str) -> bool {
    message.starts_with(' ')
}

/// Check the raw message for a space after the colon.
///
/// The match may not cross a line terminator, so multi-line messages never match.
pub(crate) fn has_valid_type_syntax(message: &str) -> bool {
    VALID_TYPE_SYNTAX_REGEX.is_match(message)
}

pub(crate) fn is_type_allowed(commit: &ParsedCommit, types: &HashSet<String>) -> bool {
    types.contains(&commit.commit_type)
}

/// Find the first sub-scope not in the allowed set.
pub(crate) fn find_disallowed_scope<'a>(
    commit: &'a ParsedCommit,
    scopes: Option<&HashSet<String>>,
) -> Option<&'a str> {
    let allowed = scopes?;
    commit.scopes().find(|scope| !allowed.contains(*scope))
}

/// Check for a breaking-change note or a `!` suffix on the type.
pub(crate) fn has_breaking_change(commit: &ParsedCommit) -> bool {
    commit.notes.iter().any(|note| note.title == BREAKING_CHANGE)
        || commit.commit_type.ends_with('!')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commit::Note;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_prefix_checks() {
        assert!(is_merge_commit("Merge branch 'main'"));
        assert!(!is_merge_commit("merge branch 'main'"));
        assert!(is_revert_commit("Revert \"feat: x\""));
        assert!(!is_revert_commit(" Revert"));
        assert!(has_leading_space(" feat: x"));
        assert!(!has_leading_space("\tfeat: x"));
    }

    #[test]
    fn test_breaking_change_declaration() {
        assert!(is_breaking_change_declaration("BREAKING CHANGE: drop v1"));
        assert!(is_breaking_change_declaration("  breaking change"));
        assert!(is_breaking_change_declaration("\u{FEFF}BREAKING CHANGE: drop v1"));
        assert!(!is_breaking_change_declaration("feat: BREAKING CHANGE"));
    }

    #[test]
    fn test_type_syntax() {
        assert!(has_valid_type_syntax("feat: add endpoint"));
        assert!(has_valid_type_syntax("feat(api)!: a"));
        assert!(!has_valid_type_syntax("feat:add endpoint"));
        assert!(!has_valid_type_syntax("feat:  two spaces"));
        assert!(!has_valid_type_syntax("feat: add endpoint\n\nbody"));
        assert!(!has_valid_type_syntax("feat: add endpoint\r"));
        assert!(!has_valid_type_syntax("feat: add\u{2028}more"));
        assert!(!has_valid_type_syntax("feat: add\u{2029}more"));
        assert!(has_valid_type_syntax("feat: \ttabbed"));
    }

    #[test]
    fn test_type_allowed() {
        let types = set(&["feat", "fix"]);
        assert!(is_type_allowed(&ParsedCommit::new("fix", "x"), &types));
        assert!(!is_type_allowed(&ParsedCommit::new("Fix", "x"), &types));
    }

    #[test]
    fn test_disallowed_scope() {
        let scopes = set(&["api", "ui"]);
        let commit = ParsedCommit::new("feat", "x").with_scope("api, db");
        assert_eq!(find_disallowed_scope(&commit, Some(&scopes)), Some("db"));

        let commit = ParsedCommit::new("feat", "x").with_scope("ui,api");
        assert_eq!(find_disallowed_scope(&commit, Some(&scopes)), None);
        assert_eq!(find_disallowed_scope(&commit, None), None);

        let commit = ParsedCommit::new("feat", "x");
        assert_eq!(find_disallowed_scope(&commit, Some(&scopes)), None);
    }

    #[test]
    fn test_breaking_change() {
        assert!(!has_breaking_change(&ParsedCommit::new("feat", "x")));
        assert!(has_breaking_change(&ParsedCommit::new("feat!", "x")));

        let commit = ParsedCommit::new("fix", "x").with_note(Note::breaking_change("y"));
        assert!(has_breaking_change(&commit));

        let commit = ParsedCommit::new("fix", "x").with_note(Note {
            title: "BREAKING-CHANGE".to_string(),
            text: "y".to_string(),
        });
        assert!(!has_breaking_change(&commit));
    }
}
