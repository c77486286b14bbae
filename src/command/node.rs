//! Command nodes and the recursive dispatch algorithm.
//!
//! A [`CommandNode`] is a named handler owning zero or more subcommands.
//! Dispatching an argument list against a node:
//!
//! 1. scans the arguments left to right for the first token equal
//!    (ASCII case-insensitively) to a child label, first declared child winning
//! 2. hands every token before that split point to the node's own handler
//! 3. stops if the handler returns [`Flow::Stop`]
//! 4. otherwise propagates state into the matched child and recurses with the
//!    tokens after the child label
//!
//! Tokens are not positional: a subcommand label may follow any number of
//! leading arguments, which all belong to the parent.

use std::fmt;

use tracing::{debug, warn};

use crate::error::Result;
use crate::sender::CommandSender;

use super::context::{ExecutionContext, Invocation};
use super::handler::{CommandHandler, Flow, FnHandler};
use super::state::NodeState;

/// A command or subcommand definition.
pub struct CommandNode {
    label: String,
    handler: Box<dyn CommandHandler>,
    children: Vec<CommandNode>,
    state: NodeState,
}

impl fmt::Debug for CommandNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandNode")
            .field("label", &self.label)
            .field("children", &self.children)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl CommandNode {
    /// Create a node with an empty state and no subcommands.
    pub fn new(label: impl Into<String>, handler: impl CommandHandler + 'static) -> Self {
        Self {
            label: label.into(),
            handler: Box::new(handler),
            children: Vec::new(),
            state: NodeState::new(),
        }
    }

    /// Create a node whose handler is a closure.
    pub fn from_fn<F>(label: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut dyn CommandSender, &ExecutionContext<'_>, &mut NodeState) -> Result<Flow>
            + 'static,
    {
        Self::new(label, FnHandler::new(f))
    }

    /// Replace the node's state declaration.
    pub fn with_state(mut self, state: NodeState) -> Self {
        self.state = state;
        self
    }

    /// Builder form of [`register_subcommand`](Self::register_subcommand).
    pub fn with_subcommand(mut self, child: CommandNode) -> Self {
        self.register_subcommand(child);
        self
    }

    /// Append a subcommand, making this node its parent.
    ///
    /// A label that duplicates an existing child is accepted but can never be
    /// reached, since the first declared child wins. Returns false in that
    /// case.
    pub fn register_subcommand(&mut self, child: CommandNode) -> bool {
        let shadowed = self.subcommand(&child.label).is_some();
        if shadowed {
            warn!(
                "Subcommand '{}' of '{}' duplicates an existing label and will be shadowed",
                child.label, self.label
            );
        }
        self.children.push(child);
        !shadowed
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether `target` selects this node. A unique match is not required.
    pub fn check_label(&self, target: &str) -> bool {
        self.label.eq_ignore_ascii_case(target)
    }

    pub fn children(&self) -> &[CommandNode] {
        &self.children
    }

    /// The child `target` would select, if any.
    pub fn subcommand(&self, target: &str) -> Option<&CommandNode> {
        self.children.iter().find(|child| child.check_label(target))
    }

    pub fn state(&self) -> &NodeState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    /// Dispatch an invocation starting at this node.
    ///
    /// Returns `Ok(true)` once this node's handler has run; there is no
    /// unhandled outcome for a reached node.
    ///
    /// # Errors
    ///
    /// Handler and propagation errors abort the chain and are returned as-is.
    pub fn dispatch(
        &mut self,
        sender: &mut dyn CommandSender,
        invocation: &Invocation,
    ) -> Result<bool> {
        self.dispatch_step(sender, invocation, invocation.label(), invocation.args())
    }

    fn dispatch_step(
        &mut self,
        sender: &mut dyn CommandSender,
        invocation: &Invocation,
        label: &str,
        args: &[String],
    ) -> Result<bool> {
        let (split, next) = self.find_split(args);
        self.state.record_label(label);

        let ctx = ExecutionContext::new(label, invocation, &args[..split], next.is_none());
        debug!(
            "Executing '{}' with {} consumed argument(s), terminal: {}",
            self.label,
            ctx.args().len(),
            ctx.is_terminal()
        );

        if self.handler.execute(sender, &ctx, &mut self.state)? == Flow::Stop {
            debug!("'{}' stopped the command chain", self.label);
            return Ok(true);
        }

        let Some(index) = next else {
            return Ok(true);
        };

        let child = &mut self.children[index];
        self.state
            .propagate_into(&mut child.state, &self.label, &child.label)?;

        // Skip the subcommand label itself.
        child.dispatch_step(sender, invocation, &args[split], &args[split + 1..])
    }

    /// Suggestions for a partial invocation.
    ///
    /// Walks the tree with the same matching rules as [`dispatch`](Self::dispatch),
    /// without executing or propagating, and asks the deepest reached node.
    pub fn suggestions(&self, sender: &dyn CommandSender, invocation: &Invocation) -> Vec<String> {
        self.suggest_step(sender, invocation, invocation.label(), invocation.args())
    }

    fn suggest_step(
        &self,
        sender: &dyn CommandSender,
        invocation: &Invocation,
        label: &str,
        args: &[String],
    ) -> Vec<String> {
        match self.find_split(args) {
            (split, Some(index)) => self.children[index].suggest_step(
                sender,
                invocation,
                &args[split],
                &args[split + 1..],
            ),
            (split, None) => {
                let ctx = ExecutionContext::new(label, invocation, &args[..split], true);
                self.handler.suggest(sender, &ctx, &self.state)
            }
        }
    }

    /// Index of the first token naming a child, and that child's index.
    ///
    /// With no match the split point is `args.len()`.
    fn find_split(&self, args: &[String]) -> (usize, Option<usize>) {
        for (position, arg) in args.iter().enumerate() {
            if let Some(index) = self.children.iter().position(|child| child.check_label(arg)) {
                return (position, Some(index));
            }
        }
        (args.len(), None)
    }
}
