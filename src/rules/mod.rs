// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule evaluation for commit messages.
//!
//! This module decides whether a message is a semantic (conventional)
//! commit under a given configuration.

mod builtin;
mod classifier;
mod verdict;

pub use classifier::{is_message_semantic, MessageClassifier};
pub use verdict::Verdict;
