//! `cmdtree dispatch` - run an invocation through the command tree.

use tracing::debug;

use crate::builtin::command_map;
use crate::cli::args::DispatchArgs;
use crate::config::Manifest;
use crate::error::{CmdTreeError, Result};
use crate::sender::CommandSender;

use super::dispatcher::{CliCommand, CommandResult};

/// The dispatch command implementation.
pub struct DispatchCommand {
    manifest: Manifest,
    args: DispatchArgs,
}

impl DispatchCommand {
    pub fn new(manifest: Manifest, args: DispatchArgs) -> Self {
        Self { manifest, args }
    }
}

impl CliCommand for DispatchCommand {
    fn execute(&self, sender: &mut dyn CommandSender) -> Result<CommandResult> {
        let mut map = command_map(&self.manifest);
        debug!(
            "Dispatching '{}' with {} argument(s) for '{}'",
            self.args.label,
            self.args.args.len(),
            sender.name()
        );

        if map.dispatch(sender, &self.args.label, &self.args.args)? {
            Ok(CommandResult::success())
        } else {
            Err(CmdTreeError::UnknownCommand {
                label: self.args.label.clone(),
            })
        }
    }
}
