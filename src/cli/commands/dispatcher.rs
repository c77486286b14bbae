//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`CliCommand`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CliDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, validate, Manifest};
use crate::error::Result;
use crate::sender::{CommandSender, SenderTheme};

/// Trait for CLI subcommand implementations.
pub trait CliCommand {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `sender` - Identity the command runs on behalf of, also used for output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, sender: &mut dyn CommandSender) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI subcommands to their implementations.
pub struct CliDispatcher {
    project_root: PathBuf,
    config: Option<PathBuf>,
    theme: SenderTheme,
}

impl CliDispatcher {
    /// Create a dispatcher that looks for config from `project_root` upward.
    pub fn new(project_root: PathBuf, config: Option<PathBuf>, theme: SenderTheme) -> Self {
        Self {
            project_root,
            config,
            theme,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load and validate the manifest.
    pub fn manifest(&self) -> Result<Manifest> {
        let manifest = load_config(&self.project_root, self.config.as_deref())?;
        validate(&manifest)?;
        Ok(manifest)
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, sender: &mut dyn CommandSender) -> Result<CommandResult> {
        debug!("Dispatching CLI command {:?}", cli.command);
        match &cli.command {
            Commands::Dispatch(args) => {
                let cmd = super::dispatch::DispatchCommand::new(self.manifest()?, args.clone());
                cmd.execute(sender)
            }
            Commands::Complete(args) => {
                let cmd = super::complete::CompleteCommand::new(self.manifest()?, args.clone());
                cmd.execute(sender)
            }
            Commands::Tree(args) => {
                let cmd = super::tree::TreeCommand::new(
                    self.manifest()?,
                    args.clone(),
                    self.theme.clone(),
                );
                cmd.execute(sender)
            }
            Commands::DbInfo(args) => {
                let cmd = super::db_info::DbInfoCommand::new(self.manifest()?, args.clone());
                cmd.execute(sender)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(sender)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sender::MockSender;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn dispatcher(temp: &TempDir) -> CliDispatcher {
        CliDispatcher::new(temp.path().to_path_buf(), None, SenderTheme::plain())
    }

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn missing_config_yields_empty_manifest() {
        let temp = TempDir::new().unwrap();
        let manifest = dispatcher(&temp).manifest().unwrap();
        assert!(manifest.commands.is_empty());
    }

    #[test]
    fn invalid_manifest_is_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("cmdtree.yml"),
            "commands:\n  ping:\n    aliases: [ping]\n",
        )
        .unwrap();
        assert!(dispatcher(&temp).manifest().is_err());
    }

    #[test]
    fn routes_dispatch_subcommand() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::parse_from(["cmdtree", "dispatch", "ping", "hello"]);
        let mut sender = MockSender::new("tester");

        let result = dispatcher(&temp).dispatch(&cli, &mut sender).unwrap();

        assert!(result.success);
        assert!(sender.has_message("pong hello"));
    }
}
