//! Command-line interface for cmdtree.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompleteArgs, CompletionsArgs, DbInfoArgs, DispatchArgs, TreeArgs,
};
pub use commands::{CliCommand, CliDispatcher, CommandResult};
