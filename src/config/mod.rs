// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for semcommit.
//!
//! The configuration is supplied by the host tool (already loaded from its
//! own inputs). This module only defines its shape and the default set of
//! conventional commit types.

pub mod default;
mod schema;

pub use default::{default_types, CommitType};
pub use schema::*;
