//! CLI command implementations.
//!
//! Each command implements the [`CliCommand`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands write
//! through the [`CommandSender`](crate::sender::CommandSender) they run on
//! behalf of.

pub mod complete;
pub mod completions;
pub mod db_info;
pub mod dispatch;
pub mod dispatcher;
pub mod tree;

pub use dispatcher::{CliCommand, CliDispatcher, CommandResult};
