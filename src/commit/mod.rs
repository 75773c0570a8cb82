// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit module for structured messages and parsing.

mod message;
mod parser;

pub use message::{Footer, Note, ParsedCommit, BREAKING_CHANGE};
pub use parser::{CommitParser, ConventionalParser};
