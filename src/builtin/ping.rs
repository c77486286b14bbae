//! `ping` - echoes its arguments back.

use crate::command::{CommandHandler, CommandNode, ExecutionContext, Flow, NodeState};
use crate::error::Result;
use crate::sender::CommandSender;

use super::complete_from;

/// Handler for `ping`.
pub struct PingCommand;

impl CommandHandler for PingCommand {
    fn execute(
        &self,
        sender: &mut dyn CommandSender,
        ctx: &ExecutionContext<'_>,
        _state: &mut NodeState,
    ) -> Result<Flow> {
        if ctx.args().is_empty() {
            sender.send_message("pong");
        } else {
            sender.send_message(&format!("pong {}", ctx.args().join(" ")));
        }
        Ok(Flow::Continue)
    }

    fn suggest(
        &self,
        _sender: &dyn CommandSender,
        ctx: &ExecutionContext<'_>,
        _state: &NodeState,
    ) -> Vec<String> {
        complete_from(&["pong"], ctx.last_arg())
    }
}

/// The `ping` command node.
pub fn ping() -> CommandNode {
    CommandNode::new("ping", PingCommand)
}
