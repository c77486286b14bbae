//! `cmdtree complete` - list completions for a partial invocation.
//!
//! With no arguments and an unknown label, the label itself is completed
//! against the bound root names.

use crate::builtin::{command_map, complete_from};
use crate::cli::args::CompleteArgs;
use crate::config::Manifest;
use crate::error::Result;
use crate::registry::CommandRegistry;
use crate::sender::CommandSender;

use super::dispatcher::{CliCommand, CommandResult};

/// The complete command implementation.
pub struct CompleteCommand {
    manifest: Manifest,
    args: CompleteArgs,
}

impl CompleteCommand {
    pub fn new(manifest: Manifest, args: CompleteArgs) -> Self {
        Self { manifest, args }
    }

    /// Candidates for the current input, in display order.
    pub fn candidates(&self, sender: &dyn CommandSender) -> Vec<String> {
        let map = command_map(&self.manifest);
        let bound = map
            .binding(&self.args.label)
            .is_some_and(|binding| binding.is_bound());

        if !bound && self.args.args.is_empty() {
            return complete_from(&map.labels(), Some(&self.args.label));
        }
        map.suggestions(sender, &self.args.label, &self.args.args)
    }
}

impl CliCommand for CompleteCommand {
    fn execute(&self, sender: &mut dyn CommandSender) -> Result<CommandResult> {
        for candidate in self.candidates(&*sender) {
            sender.send_message(&candidate);
        }
        Ok(CommandResult::success())
    }
}
