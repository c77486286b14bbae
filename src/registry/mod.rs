//! Host command routing.
//!
//! This module is the registration surface a host offers to command trees:
//! - [`CommandRegistry`] - look up or synthesize bindings, and drop them
//! - [`Binding`] - one routable name with aliases and an optional root node
//! - [`CommandMap`] - the in-memory routing table that also acts as the
//!   invocation source
//!
//! The registry is always passed explicitly; there is no global table.
//!
//! # Example
//!
//! ```
//! use cmdtree::command::{CommandNode, Flow};
//! use cmdtree::registry::{register, unregister, CommandMap};
//! use cmdtree::sender::MockSender;
//!
//! let mut map = CommandMap::new();
//! register(&mut map, CommandNode::from_fn("ping", |sender, _ctx, _state| {
//!     sender.send_message("pong");
//!     Ok(Flow::Continue)
//! }));
//!
//! let mut sender = MockSender::new("console");
//! assert!(map.dispatch(&mut sender, "PING", &[]).unwrap());
//! assert!(sender.has_message("pong"));
//!
//! assert!(unregister(&mut map, "ping").is_some());
//! assert!(!map.dispatch(&mut sender, "ping", &[]).unwrap());
//! ```

pub mod binding;
pub mod map;

pub use binding::Binding;
pub use map::CommandMap;

use tracing::{debug, warn};

use crate::command::CommandNode;

/// A routing table command trees can be bound into.
pub trait CommandRegistry {
    /// Look up a binding by name or alias.
    fn binding(&self, name: &str) -> Option<&Binding>;

    /// Look up a binding by name only, synthesizing one named `name` if none
    /// exists. An alias never matches, so a node cannot take over the
    /// binding that owns its label as an alias.
    fn binding_mut(&mut self, name: &str) -> &mut Binding;

    /// Remove a binding entirely.
    fn remove_binding(&mut self, name: &str) -> Option<Binding>;
}

/// Bind `node` as the handler for its own label.
///
/// Registering over an existing handler replaces it and returns the old one.
pub fn register(registry: &mut dyn CommandRegistry, node: CommandNode) -> Option<CommandNode> {
    let label = node.label().to_string();
    let binding = registry.binding_mut(&label);
    let previous = binding.attach(node);
    if previous.is_some() {
        warn!("Command '{}' was already registered; replacing its handler", label);
    } else {
        debug!("Registered command '{}'", label);
    }
    previous
}

/// Detach the handler bound under `label`, returning it.
///
/// Declared bindings stay in the table without a handler; synthesized ones
/// are removed. Unregistering an unknown label is a no-op.
pub fn unregister(registry: &mut dyn CommandRegistry, label: &str) -> Option<CommandNode> {
    let binding = registry.binding(label)?;
    if binding.is_declared() {
        let name = binding.name().to_string();
        let node = registry.binding_mut(&name).detach();
        debug!("Unregistered command '{}'", name);
        node
    } else {
        let removed = registry.remove_binding(label)?;
        debug!("Unregistered command '{}'", removed.name());
        removed.into_handler()
    }
}
