//! The handler trait implemented by every command node.

use crate::error::Result;
use crate::sender::CommandSender;

use super::context::ExecutionContext;
use super::state::NodeState;

/// What the dispatcher does after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Continue into the matched subcommand, if any.
    Continue,
    /// End the chain here, even if a subcommand matched.
    Stop,
}

impl From<bool> for Flow {
    /// `true` means stop.
    fn from(stop: bool) -> Self {
        if stop {
            Flow::Stop
        } else {
            Flow::Continue
        }
    }
}

/// Domain logic of one command node.
pub trait CommandHandler {
    /// Run this node's logic for one dispatch step.
    ///
    /// `state` is the node's own state; fields written here propagate to the
    /// matched subcommand before it runs.
    fn execute(
        &self,
        sender: &mut dyn CommandSender,
        ctx: &ExecutionContext<'_>,
        state: &mut NodeState,
    ) -> Result<Flow>;

    /// Candidate completions for the partial input, in display order.
    fn suggest(
        &self,
        _sender: &dyn CommandSender,
        _ctx: &ExecutionContext<'_>,
        _state: &NodeState,
    ) -> Vec<String> {
        Vec::new()
    }
}

/// Adapter turning a closure into a [`CommandHandler`].
pub struct FnHandler<F> {
    f: F,
}

impl<F> FnHandler<F>
where
    F: Fn(&mut dyn CommandSender, &ExecutionContext<'_>, &mut NodeState) -> Result<Flow>,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> CommandHandler for FnHandler<F>
where
    F: Fn(&mut dyn CommandSender, &ExecutionContext<'_>, &mut NodeState) -> Result<Flow>,
{
    fn execute(
        &self,
        sender: &mut dyn CommandSender,
        ctx: &ExecutionContext<'_>,
        state: &mut NodeState,
    ) -> Result<Flow> {
        (self.f)(sender, ctx, state)
    }
}
