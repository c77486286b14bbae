//! Routing table entries.

use crate::command::CommandNode;
use crate::config::schema::CommandEntry;

/// One routable command name.
#[derive(Debug)]
pub struct Binding {
    name: String,
    description: Option<String>,
    usage: Option<String>,
    aliases: Vec<String>,
    declared: bool,
    handler: Option<CommandNode>,
}

impl Binding {
    /// A binding created on demand for an undeclared name.
    pub fn synthesized(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            usage: None,
            aliases: Vec::new(),
            declared: false,
            handler: None,
        }
    }

    /// A binding declared up front by a manifest entry.
    pub fn declared(name: impl Into<String>, entry: &CommandEntry) -> Self {
        Self {
            name: name.into(),
            description: entry.description.clone(),
            usage: entry.usage.clone(),
            aliases: entry.aliases.clone(),
            declared: true,
            handler: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn usage(&self) -> Option<&str> {
        self.usage.as_deref()
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Whether this binding came from a manifest rather than being synthesized.
    pub fn is_declared(&self) -> bool {
        self.declared
    }

    /// Whether a root node is attached.
    pub fn is_bound(&self) -> bool {
        self.handler.is_some()
    }

    /// Whether `label` is this binding's name, case-insensitively.
    pub fn is_named(&self, label: &str) -> bool {
        self.name.eq_ignore_ascii_case(label)
    }

    /// Whether `label` is one of this binding's aliases, case-insensitively.
    pub fn has_alias(&self, label: &str) -> bool {
        self.aliases
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(label))
    }

    pub fn handler(&self) -> Option<&CommandNode> {
        self.handler.as_ref()
    }

    pub fn handler_mut(&mut self) -> Option<&mut CommandNode> {
        self.handler.as_mut()
    }

    /// Attach a root node, returning the one it replaces.
    pub fn attach(&mut self, node: CommandNode) -> Option<CommandNode> {
        self.handler.replace(node)
    }

    /// Detach the root node.
    pub fn detach(&mut self) -> Option<CommandNode> {
        self.handler.take()
    }

    pub(crate) fn into_handler(self) -> Option<CommandNode> {
        self.handler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Flow;

    fn node(label: &str) -> CommandNode {
        CommandNode::from_fn(label, |_sender, _ctx, _state| Ok(Flow::Continue))
    }

    #[test]
    fn synthesized_binding_is_empty() {
        let binding = Binding::synthesized("ping");
        assert_eq!(binding.name(), "ping");
        assert!(!binding.is_declared());
        assert!(!binding.is_bound());
        assert!(binding.aliases().is_empty());
    }

    #[test]
    fn declared_binding_copies_entry() {
        let entry = CommandEntry {
            description: Some("Inspect accounts".into()),
            usage: Some("/account <name>".into()),
            aliases: vec!["acct".into()],
        };
        let binding = Binding::declared("account", &entry);
        assert!(binding.is_declared());
        assert_eq!(binding.description(), Some("Inspect accounts"));
        assert_eq!(binding.usage(), Some("/account <name>"));
        assert!(binding.has_alias("ACCT"));
        assert!(binding.is_named("Account"));
    }

    #[test]
    fn attach_replaces_and_detach_takes() {
        let mut binding = Binding::synthesized("ping");
        assert!(binding.attach(node("ping")).is_none());
        assert!(binding.attach(node("ping")).is_some());
        assert!(binding.detach().is_some());
        assert!(binding.detach().is_none());
    }
}
