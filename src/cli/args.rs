//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// cmdtree - Hierarchical command dispatch.
#[derive(Debug, Parser)]
#[command(name = "cmdtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides the nearest cmdtree.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Name of the sender commands run on behalf of
    #[arg(short, long, global = true, env = "CMDTREE_SENDER", default_value = "console")]
    pub sender: String,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Dispatch an invocation through the command tree
    Dispatch(DispatchArgs),

    /// List completions for a partial invocation
    Complete(CompleteArgs),

    /// Show the registered command tree
    Tree(TreeArgs),

    /// Show the configured database section
    DbInfo(DbInfoArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `dispatch` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DispatchArgs {
    /// Root command label (name or alias)
    pub label: String,

    /// Arguments passed to the command tree
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `complete` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompleteArgs {
    /// Root command label, possibly partial
    pub label: String,

    /// Arguments typed so far; the last one is the partial token
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `tree` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TreeArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `db-info` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DbInfoArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
