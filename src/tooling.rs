//! Tooling Layer
//!
//! CLI surface and output formatting. File loading lives here, not in the
//! core: the tree and layout operations never touch the filesystem.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands};
