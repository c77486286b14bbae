//! `account` - a three-level demonstration tree.
//!
//! ```text
//! account [name] [-v]              show the selected account
//! account [name] info              show details for the account
//! account [name] grant <perm>...   grant permissions
//! account [name] grant <perm>... notify
//! ```
//!
//! The root resolves `target` (falling back to the sender's name) and the
//! `verbose` flag, both of which flow down into `info` and `grant`. `grant`
//! stops the chain when it has nothing to grant, so `notify` never runs for
//! an empty grant.

use crate::command::{
    CommandHandler, CommandNode, ExecutionContext, Flow, NodeState, StateField, StateKind,
};
use crate::error::Result;
use crate::sender::CommandSender;

use super::complete_from;

/// Permissions offered by `grant` completion.
pub const PERMISSIONS: &[&str] = &["build", "chat", "fly", "teleport"];

/// Permission a sender needs to run `grant`.
pub const GRANT_PERMISSION: &str = "cmdtree.account.grant";

const SUBCOMMANDS: &[&str] = &["grant", "info"];

fn is_verbose_flag(arg: &str) -> bool {
    arg == "-v" || arg == "--verbose"
}

/// Handler for the `account` root.
pub struct AccountCommand;

impl AccountCommand {
    /// State of the root: `target` and `verbose` flow to subcommands,
    /// `lookups` counts root invocations and stays local.
    pub fn state() -> NodeState {
        NodeState::new()
            .declare("target", StateField::new(StateKind::Text))
            .declare("verbose", StateField::new(StateKind::Flag))
            .declare("lookups", StateField::with_value(0i64).suppressed())
    }
}

impl CommandHandler for AccountCommand {
    fn execute(
        &self,
        sender: &mut dyn CommandSender,
        ctx: &ExecutionContext<'_>,
        state: &mut NodeState,
    ) -> Result<Flow> {
        let verbose = ctx.args().iter().any(|arg| is_verbose_flag(arg));
        let target = ctx
            .args()
            .iter()
            .find(|arg| !is_verbose_flag(arg))
            .map(String::as_str)
            .unwrap_or_else(|| sender.name())
            .to_string();
        let lookups = state.integer("lookups").unwrap_or(0) + 1;

        state.set("target", target.as_str())?;
        state.set("verbose", verbose)?;
        state.set("lookups", lookups)?;

        if ctx.is_terminal() {
            sender.send_message(&format!("Account: {}", target));
            if verbose {
                sender.send_message(&format!("Lookups: {}", lookups));
            }
        }
        Ok(Flow::Continue)
    }

    fn suggest(
        &self,
        _sender: &dyn CommandSender,
        ctx: &ExecutionContext<'_>,
        _state: &NodeState,
    ) -> Vec<String> {
        complete_from(SUBCOMMANDS, ctx.last_arg())
    }
}

/// Handler for `account info`.
pub struct InfoCommand;

impl InfoCommand {
    pub fn state() -> NodeState {
        NodeState::new()
            .declare("target", StateField::new(StateKind::Text))
            .declare("verbose", StateField::new(StateKind::Flag))
            .declare("lookups", StateField::new(StateKind::Integer))
    }
}

impl CommandHandler for InfoCommand {
    fn execute(
        &self,
        sender: &mut dyn CommandSender,
        ctx: &ExecutionContext<'_>,
        state: &mut NodeState,
    ) -> Result<Flow> {
        let target = state.text("target").unwrap_or("unknown").to_string();
        sender.send_message(&format!("Info for {}", target));
        if state.flag("verbose") {
            sender.send_message(&format!("Requested by {}", sender.name()));
        }
        if !ctx.args().is_empty() {
            sender.send_message(&format!("Extra: {}", ctx.args().join(" ")));
        }
        Ok(Flow::Continue)
    }
}

/// Handler for `account grant`.
pub struct GrantCommand;

impl GrantCommand {
    pub fn state() -> NodeState {
        NodeState::new()
            .declare("target", StateField::new(StateKind::Text))
            .declare("verbose", StateField::new(StateKind::Flag))
            .declare("granted", StateField::new(StateKind::List))
    }
}

impl CommandHandler for GrantCommand {
    fn execute(
        &self,
        sender: &mut dyn CommandSender,
        ctx: &ExecutionContext<'_>,
        state: &mut NodeState,
    ) -> Result<Flow> {
        if !sender.has_permission(GRANT_PERMISSION) {
            sender.send_error("You are not allowed to grant permissions");
            return Ok(Flow::Stop);
        }
        if ctx.args().is_empty() {
            sender.send_error("Usage: account [name] grant <permission>...");
            return Ok(Flow::Stop);
        }

        let target = state.text("target").unwrap_or("unknown").to_string();
        for permission in ctx.args() {
            sender.send_success(&format!("Granted {} to {}", permission, target));
        }
        state.set("granted", ctx.args().to_vec())?;
        Ok(Flow::Continue)
    }

    fn suggest(
        &self,
        _sender: &dyn CommandSender,
        ctx: &ExecutionContext<'_>,
        _state: &NodeState,
    ) -> Vec<String> {
        let given = &ctx.args()[..ctx.args().len().saturating_sub(1)];
        complete_from(PERMISSIONS, ctx.last_arg())
            .into_iter()
            .filter(|permission| !given.iter().any(|arg| arg.eq_ignore_ascii_case(permission)))
            .collect()
    }
}

/// Handler for `account grant ... notify`.
pub struct NotifyCommand;

impl NotifyCommand {
    pub fn state() -> NodeState {
        NodeState::new()
            .declare("target", StateField::new(StateKind::Text))
            .declare("granted", StateField::new(StateKind::List))
    }
}

impl CommandHandler for NotifyCommand {
    fn execute(
        &self,
        sender: &mut dyn CommandSender,
        _ctx: &ExecutionContext<'_>,
        state: &mut NodeState,
    ) -> Result<Flow> {
        let target = state.text("target").unwrap_or("unknown");
        let granted = state.list("granted").unwrap_or(&[]).join(", ");
        sender.send_message(&format!("Notified {} about: {}", target, granted));
        Ok(Flow::Continue)
    }
}

/// The full `account` tree.
pub fn account() -> CommandNode {
    let grant = CommandNode::new("grant", GrantCommand)
        .with_state(GrantCommand::state())
        .with_subcommand(CommandNode::new("notify", NotifyCommand).with_state(NotifyCommand::state()));

    CommandNode::new("account", AccountCommand)
        .with_state(AccountCommand::state())
        .with_subcommand(CommandNode::new("info", InfoCommand).with_state(InfoCommand::state()))
        .with_subcommand(grant)
}
