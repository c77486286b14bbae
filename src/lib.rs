//! cmdtree - Hierarchical command dispatch.
//!
//! A command is a tree of [`CommandNode`](command::CommandNode)s. Dispatching
//! an invocation walks the tree: each node consumes the arguments before the
//! first token naming one of its subcommands, runs its handler, copies its
//! inheritable state into the matched subcommand and hands over the rest.
//!
//! # Modules
//!
//! - [`builtin`] - Demonstration command trees
//! - [`cli`] - Command-line interface and argument parsing
//! - [`command`] - Nodes, handlers, execution context and node state
//! - [`config`] - Configuration loading, sections, and validation
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Host routing table binding names to root nodes
//! - [`sender`] - Invoking identities and terminal output
//!
//! # Example
//!
//! ```
//! use cmdtree::builtin::command_map;
//! use cmdtree::config::Manifest;
//! use cmdtree::sender::MockSender;
//!
//! let mut map = command_map(&Manifest::default());
//! let mut sender = MockSender::new("alice");
//! let args = vec!["bob".to_string(), "info".to_string()];
//!
//! assert!(map.dispatch(&mut sender, "account", &args).unwrap());
//! assert!(sender.has_message("Info for bob"));
//! ```

pub mod builtin;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod registry;
pub mod sender;

pub use error::{CmdTreeError, Result};
