//! Per-step execution context.

/// The raw invocation handed to a root node by the host router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    label: String,
    args: Vec<String>,
}

impl Invocation {
    /// Create an invocation from the label used and the full argument list.
    pub fn new<I, S>(label: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The label the user typed to reach the root.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Every argument after the root label.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// What one node sees when it executes.
///
/// Built fresh for every dispatch step and borrowed for the duration of the
/// handler call only.
#[derive(Debug, Clone, Copy)]
pub struct ExecutionContext<'a> {
    label: &'a str,
    invocation: &'a Invocation,
    args: &'a [String],
    terminal: bool,
}

impl<'a> ExecutionContext<'a> {
    pub fn new(
        label: &'a str,
        invocation: &'a Invocation,
        args: &'a [String],
        terminal: bool,
    ) -> Self {
        Self {
            label,
            invocation,
            args,
            terminal,
        }
    }

    /// The token that selected this node.
    pub fn label(&self) -> &'a str {
        self.label
    }

    /// The original invocation this step belongs to.
    pub fn invocation(&self) -> &'a Invocation {
        self.invocation
    }

    /// Arguments consumed at this level.
    pub fn args(&self) -> &'a [String] {
        self.args
    }

    /// Argument at `index` (0 is the first argument after the label).
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).map(String::as_str)
    }

    /// The last consumed argument, the partial token when completing.
    pub fn last_arg(&self) -> Option<&'a str> {
        self.args.last().map(String::as_str)
    }

    /// True iff no subcommand matched, so no further node will run.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
}
