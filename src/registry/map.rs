//! In-memory command routing table.

use tracing::debug;

use crate::command::Invocation;
use crate::config::schema::Manifest;
use crate::error::Result;
use crate::sender::CommandSender;

use super::binding::Binding;
use super::CommandRegistry;

/// Routing table mapping names and aliases to root command nodes.
///
/// Names win over aliases; among aliases the earliest binding wins.
#[derive(Debug, Default)]
pub struct CommandMap {
    bindings: Vec<Binding>,
}

impl CommandMap {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with every command the manifest declares.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let bindings = manifest
            .commands
            .iter()
            .map(|(name, entry)| Binding::declared(name.as_str(), entry))
            .collect();
        Self { bindings }
    }

    /// All bindings in declaration order.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Names of bindings with an attached handler.
    pub fn labels(&self) -> Vec<&str> {
        self.bindings
            .iter()
            .filter(|binding| binding.is_bound())
            .map(Binding::name)
            .collect()
    }

    /// Route an invocation to the bound root node.
    ///
    /// Returns `Ok(false)` when no handler is bound under `label`.
    ///
    /// # Errors
    ///
    /// Any dispatch failure of the tree is returned unchanged.
    pub fn dispatch(
        &mut self,
        sender: &mut dyn CommandSender,
        label: &str,
        args: &[String],
    ) -> Result<bool> {
        let Some(root) = self
            .position(label)
            .and_then(|index| self.bindings[index].handler_mut())
        else {
            debug!("No handler bound for '{}'", label);
            return Ok(false);
        };

        let invocation = Invocation::new(label, args.iter().cloned());
        root.dispatch(sender, &invocation)
    }

    /// Suggestions for a partial invocation of `label`.
    pub fn suggestions(&self, sender: &dyn CommandSender, label: &str, args: &[String]) -> Vec<String> {
        match self.binding(label).and_then(Binding::handler) {
            Some(root) => root.suggestions(sender, &Invocation::new(label, args.iter().cloned())),
            None => Vec::new(),
        }
    }

    fn named_position(&self, name: &str) -> Option<usize> {
        self.bindings.iter().position(|binding| binding.is_named(name))
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.bindings
            .iter()
            .position(|binding| binding.is_named(label))
            .or_else(|| {
                self.bindings
                    .iter()
                    .position(|binding| binding.has_alias(label))
            })
    }
}

impl CommandRegistry for CommandMap {
    fn binding(&self, name: &str) -> Option<&Binding> {
        self.position(name).map(|index| &self.bindings[index])
    }

    fn binding_mut(&mut self, name: &str) -> &mut Binding {
        let index = match self.named_position(name) {
            Some(index) => index,
            None => {
                debug!("Synthesizing binding for '{}'", name);
                self.bindings.push(Binding::synthesized(name));
                self.bindings.len() - 1
            }
        };
        &mut self.bindings[index]
    }

    fn remove_binding(&mut self, name: &str) -> Option<Binding> {
        let index = self.position(name)?;
        Some(self.bindings.remove(index))
    }
}
