//! The command tree: nodes, dispatch, execution contexts and node state.
//!
//! # Architecture
//!
//! - [`node`] - [`CommandNode`] and the recursive dispatch algorithm
//! - [`context`] - [`Invocation`] and the per-step [`ExecutionContext`]
//! - [`handler`] - the [`CommandHandler`] trait and [`Flow`]
//! - [`state`] - typed [`NodeState`] and the propagation policy
//!
//! # Example
//!
//! ```
//! use cmdtree::command::{CommandNode, Flow, Invocation};
//! use cmdtree::sender::MockSender;
//!
//! let mut root = CommandNode::from_fn("greet", |sender, ctx, _state| {
//!     sender.send_message(&format!("hello {}", ctx.args().join(" ")));
//!     Ok(Flow::Continue)
//! });
//!
//! let mut sender = MockSender::new("console");
//! let handled = root
//!     .dispatch(&mut sender, &Invocation::new("greet", ["world"]))
//!     .unwrap();
//! assert!(handled);
//! assert_eq!(sender.messages(), &["hello world".to_string()]);
//! ```

pub mod context;
pub mod handler;
pub mod node;
pub mod state;

pub use context::{ExecutionContext, Invocation};
pub use handler::{CommandHandler, Flow, FnHandler};
pub use node::CommandNode;
pub use state::{
    FieldAccess, FieldOrigin, InheritPolicy, NodeState, StateField, StateKind, StateValue,
    LABEL_FIELD, RESERVED_MARKER,
};
