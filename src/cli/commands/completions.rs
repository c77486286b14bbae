//! Shell completions generation.
//!
//! The `cmdtree completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::sender::CommandSender;
use clap::CommandFactory;

use super::dispatcher::{CliCommand, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl CliCommand for CompletionsCommand {
    fn execute(&self, _sender: &mut dyn CommandSender) -> crate::error::Result<CommandResult> {
        let mut cmd = Cli::command();
        clap_complete::generate(self.args.shell, &mut cmd, "cmdtree", &mut std::io::stdout());
        Ok(CommandResult::success())
    }
}
