//! `cmdtree tree` - render the registered command tree.

use serde::Serialize;

use crate::builtin::command_map;
use crate::cli::args::TreeArgs;
use crate::command::CommandNode;
use crate::config::Manifest;
use crate::error::Result;
use crate::registry::{Binding, CommandMap};
use crate::sender::{CommandSender, SenderTheme};

use super::dispatcher::{CliCommand, CommandResult};

/// One root binding in JSON output.
#[derive(Debug, Serialize)]
pub struct TreeEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    pub bound: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subcommands: Vec<TreeNode>,
}

/// A subcommand in JSON output.
#[derive(Debug, Serialize)]
pub struct TreeNode {
    pub label: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subcommands: Vec<TreeNode>,
}

impl TreeNode {
    fn from_node(node: &CommandNode) -> Self {
        Self {
            label: node.label().to_string(),
            subcommands: node.children().iter().map(TreeNode::from_node).collect(),
        }
    }
}

impl TreeEntry {
    fn from_binding(binding: &Binding) -> Self {
        Self {
            name: binding.name().to_string(),
            description: binding.description().map(str::to_string),
            usage: binding.usage().map(str::to_string),
            aliases: binding.aliases().to_vec(),
            bound: binding.is_bound(),
            subcommands: binding
                .handler()
                .map(|root| root.children().iter().map(TreeNode::from_node).collect())
                .unwrap_or_default(),
        }
    }
}

/// Collect the JSON view of every binding.
pub fn tree_entries(map: &CommandMap) -> Vec<TreeEntry> {
    map.bindings().iter().map(TreeEntry::from_binding).collect()
}

/// Render the tree as indented text, one node per line.
pub fn render_tree(map: &CommandMap, theme: &SenderTheme) -> String {
    let mut lines = Vec::new();

    for binding in map.bindings() {
        let mut line = theme.format_label(binding.name(), binding.description());
        if !binding.aliases().is_empty() {
            let aliases = format!("(aliases: {})", binding.aliases().join(", "));
            line.push_str(&format!(" {}", theme.dim.apply_to(aliases)));
        }
        if !binding.is_bound() {
            line.push_str(&format!(" {}", theme.dim.apply_to("[unbound]")));
        }
        lines.push(line);

        if let Some(root) = binding.handler() {
            render_children(root, 1, theme, &mut lines);
        }
    }

    lines.join("\n")
}

fn render_children(node: &CommandNode, depth: usize, theme: &SenderTheme, lines: &mut Vec<String>) {
    for child in node.children() {
        lines.push(format!(
            "{}{}",
            "  ".repeat(depth),
            theme.format_label(child.label(), None)
        ));
        render_children(child, depth + 1, theme, lines);
    }
}

/// The tree command implementation.
pub struct TreeCommand {
    manifest: Manifest,
    args: TreeArgs,
    theme: SenderTheme,
}

impl TreeCommand {
    pub fn new(manifest: Manifest, args: TreeArgs, theme: SenderTheme) -> Self {
        Self {
            manifest,
            args,
            theme,
        }
    }
}

impl CliCommand for TreeCommand {
    fn execute(&self, sender: &mut dyn CommandSender) -> Result<CommandResult> {
        let map = command_map(&self.manifest);

        if self.args.json {
            let json = serde_json::to_string_pretty(&tree_entries(&map))
                .map_err(|e| anyhow::anyhow!("Failed to serialize command tree: {}", e))?;
            sender.send_message(&json);
        } else {
            sender.send_message(&render_tree(&map, &self.theme));
        }

        Ok(CommandResult::success())
    }
}
