//! End-to-end tests for release-gate
//!
//! Each test builds a project tree in a temporary directory and validates it
//! through the library API or the compiled binary.

pub mod cli;
pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
