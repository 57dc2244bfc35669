//! CLI command implementations.

pub mod args;
pub mod logging;
pub mod output;

pub mod create;
pub mod delete;
pub mod find;
pub mod folders;
pub mod git;
pub mod init;
pub mod list;
pub mod search;
pub mod show;
pub mod tags;

pub use args::{Cli, Commands};
pub use output::Output;
