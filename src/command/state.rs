//! Node-local command state and the parent-to-child propagation policy.
//!
//! Every [`CommandNode`](super::CommandNode) owns a [`NodeState`]: an ordered
//! table of typed fields. Before a parent delegates to a matched child, it
//! copies its fields into the child's fields of the same name, subject to:
//!
//! - a node-level opt-out ([`NodeState::no_inherit`]) that blocks every field
//!   with the [`InheritPolicy::Default`] policy
//! - a per-field [`InheritPolicy`], where `Suppressed` never propagates and
//!   `Force` always propagates
//! - [`FieldOrigin::Synthesized`] fields, which are never copied; any name
//!   containing [`RESERVED_MARKER`] is synthesized
//!
//! A field reaches the child only if the child declares it. A kind mismatch or
//! a [`FieldAccess::Sealed`] child field is an error and leaves the child
//! untouched.
//!
//! # Example
//!
//! ```
//! use cmdtree::command::{NodeState, StateField, StateKind};
//!
//! let mut parent = NodeState::new().declare("target", StateField::new(StateKind::Text));
//! let mut child = NodeState::new().declare("target", StateField::new(StateKind::Text));
//!
//! parent.set("target", "alice").unwrap();
//! parent.propagate_into(&mut child, "account", "info").unwrap();
//! assert_eq!(child.text("target"), Some("alice"));
//! ```

use std::fmt;

use tracing::debug;

use crate::error::{CmdTreeError, Result};

/// Name of the synthesized field holding the label last used to reach a node.
pub const LABEL_FIELD: &str = "$label";

/// Field names containing this character are reserved for the dispatcher.
pub const RESERVED_MARKER: char = '$';

/// Type tag of a state field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    Text,
    Integer,
    Flag,
    List,
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StateKind::Text => "text",
            StateKind::Integer => "integer",
            StateKind::Flag => "flag",
            StateKind::List => "list",
        };
        f.write_str(name)
    }
}

/// A typed state value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateValue {
    /// Declared but not yet assigned.
    Unset(StateKind),
    Text(String),
    Integer(i64),
    Flag(bool),
    List(Vec<String>),
}

impl StateValue {
    /// The kind of this value, set or not.
    pub fn kind(&self) -> StateKind {
        match self {
            StateValue::Unset(kind) => *kind,
            StateValue::Text(_) => StateKind::Text,
            StateValue::Integer(_) => StateKind::Integer,
            StateValue::Flag(_) => StateKind::Flag,
            StateValue::List(_) => StateKind::List,
        }
    }

    /// Whether a value has been assigned.
    pub fn is_set(&self) -> bool {
        !matches!(self, StateValue::Unset(_))
    }
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        StateValue::Text(value.to_string())
    }
}

impl From<String> for StateValue {
    fn from(value: String) -> Self {
        StateValue::Text(value)
    }
}

impl From<i64> for StateValue {
    fn from(value: i64) -> Self {
        StateValue::Integer(value)
    }
}

impl From<bool> for StateValue {
    fn from(value: bool) -> Self {
        StateValue::Flag(value)
    }
}

impl From<Vec<String>> for StateValue {
    fn from(value: Vec<String>) -> Self {
        StateValue::List(value)
    }
}

/// Per-field inheritance policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InheritPolicy {
    /// Propagates unless the owning node opts out.
    #[default]
    Default,
    /// Always propagates, even when the owning node opts out.
    Force,
    /// Never propagates.
    Suppressed,
}

/// Where a field came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldOrigin {
    #[default]
    Declared,
    /// Maintained by the dispatcher itself; never propagated.
    Synthesized,
}

/// Whether propagation may write into a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldAccess {
    #[default]
    Writable,
    Sealed,
}

/// A declared state field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateField {
    value: StateValue,
    policy: InheritPolicy,
    origin: FieldOrigin,
    access: FieldAccess,
}

impl StateField {
    /// Declare an unset field of the given kind with the default policy.
    pub fn new(kind: StateKind) -> Self {
        Self {
            value: StateValue::Unset(kind),
            policy: InheritPolicy::Default,
            origin: FieldOrigin::Declared,
            access: FieldAccess::Writable,
        }
    }

    /// Declare a field with an initial value.
    pub fn with_value(value: impl Into<StateValue>) -> Self {
        Self {
            value: value.into(),
            ..Self::new(StateKind::Text)
        }
    }

    /// Always propagate this field.
    pub fn force(mut self) -> Self {
        self.policy = InheritPolicy::Force;
        self
    }

    /// Never propagate this field.
    pub fn suppressed(mut self) -> Self {
        self.policy = InheritPolicy::Suppressed;
        self
    }

    /// Refuse values propagated from a parent.
    pub fn sealed(mut self) -> Self {
        self.access = FieldAccess::Sealed;
        self
    }

    pub fn value(&self) -> &StateValue {
        &self.value
    }

    pub fn kind(&self) -> StateKind {
        self.value.kind()
    }

    pub fn policy(&self) -> InheritPolicy {
        self.policy
    }

    pub fn origin(&self) -> FieldOrigin {
        self.origin
    }

    pub fn access(&self) -> FieldAccess {
        self.access
    }
}

/// Ordered table of typed fields owned by one command node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeState {
    fields: Vec<(String, StateField)>,
    inherit: bool,
}

impl Default for NodeState {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeState {
    /// Create an empty state that propagates by default.
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            inherit: true,
        }
    }

    /// Opt the whole node out of propagation; only `Force` fields still flow.
    pub fn no_inherit(mut self) -> Self {
        self.inherit = false;
        self
    }

    /// Whether default-policy fields propagate from this node.
    pub fn inherits(&self) -> bool {
        self.inherit
    }

    /// Declare a field. Redeclaring a name replaces the earlier declaration.
    ///
    /// Names containing [`RESERVED_MARKER`] are always synthesized.
    pub fn declare(mut self, name: impl Into<String>, mut field: StateField) -> Self {
        let name = name.into();
        if name.contains(RESERVED_MARKER) {
            field.origin = FieldOrigin::Synthesized;
        }
        match self.position(&name) {
            Some(index) => self.fields[index].1 = field,
            None => self.fields.push((name, field)),
        }
        self
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&StateField> {
        self.fields
            .iter()
            .find(|(field_name, _)| field_name == name)
            .map(|(_, field)| field)
    }

    /// Look up a field's value by name.
    pub fn get(&self, name: &str) -> Option<&StateValue> {
        self.field(name).map(StateField::value)
    }

    /// Text value of a field, if set.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(StateValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Integer value of a field, if set.
    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(StateValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    /// Flag value of a field; unset and undeclared read as `false`.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.get(name), Some(StateValue::Flag(true)))
    }

    /// List value of a field, if set.
    pub fn list(&self, name: &str) -> Option<&[String]> {
        match self.get(name) {
            Some(StateValue::List(value)) => Some(value.as_slice()),
            _ => None,
        }
    }

    /// Field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Assign a declared field.
    ///
    /// # Errors
    ///
    /// Returns `UnknownField` if the name was never declared, and
    /// `FieldTypeMismatch` if the value's kind differs from the declaration.
    pub fn set(&mut self, name: &str, value: impl Into<StateValue>) -> Result<()> {
        let value = value.into();
        let index = self
            .position(name)
            .ok_or_else(|| CmdTreeError::UnknownField {
                field: name.to_string(),
            })?;

        let field = &mut self.fields[index].1;
        if field.kind() != value.kind() {
            return Err(CmdTreeError::FieldTypeMismatch {
                field: name.to_string(),
                expected: field.kind(),
                found: value.kind(),
            });
        }

        field.value = value;
        Ok(())
    }

    /// Reset a declared field to unset.
    pub fn clear(&mut self, name: &str) -> Result<()> {
        let index = self
            .position(name)
            .ok_or_else(|| CmdTreeError::UnknownField {
                field: name.to_string(),
            })?;
        let field = &mut self.fields[index].1;
        field.value = StateValue::Unset(field.kind());
        Ok(())
    }

    /// Label last used to reach this node, as recorded by the dispatcher.
    pub fn last_label(&self) -> Option<&str> {
        self.text(LABEL_FIELD)
    }

    pub(crate) fn record_label(&mut self, label: &str) {
        let field = StateField {
            value: StateValue::Text(label.to_string()),
            policy: InheritPolicy::Suppressed,
            origin: FieldOrigin::Synthesized,
            access: FieldAccess::Sealed,
        };
        match self.position(LABEL_FIELD) {
            Some(index) => self.fields[index].1 = field,
            None => self.fields.push((LABEL_FIELD.to_string(), field)),
        }
    }

    /// Whether a field leaves this node when propagating.
    pub fn propagates(&self, field: &StateField) -> bool {
        if field.origin == FieldOrigin::Synthesized {
            return false;
        }
        match field.policy {
            InheritPolicy::Force => true,
            InheritPolicy::Suppressed => false,
            InheritPolicy::Default => self.inherit,
        }
    }

    /// Copy every propagating field into the same-named fields of `child`.
    ///
    /// Returns the number of fields copied. `parent` and `child` name the
    /// nodes in error messages.
    ///
    /// # Errors
    ///
    /// Returns `PropagationTypeMismatch` when the child declares a field under
    /// another kind and `PropagationDenied` when the child field is sealed.
    /// The child is left untouched when any field fails.
    pub fn propagate_into(&self, child: &mut NodeState, parent: &str, child_label: &str) -> Result<usize> {
        let mut plan = Vec::new();

        for (name, field) in &self.fields {
            if !self.propagates(field) {
                continue;
            }
            let Some(target_index) = child.position(name) else {
                continue;
            };
            let target = &child.fields[target_index].1;
            if target.origin == FieldOrigin::Synthesized {
                continue;
            }
            if target.kind() != field.kind() {
                return Err(CmdTreeError::PropagationTypeMismatch {
                    field: name.clone(),
                    parent: parent.to_string(),
                    child: child_label.to_string(),
                    expected: target.kind(),
                    found: field.kind(),
                });
            }
            if target.access == FieldAccess::Sealed {
                return Err(CmdTreeError::PropagationDenied {
                    field: name.clone(),
                    parent: parent.to_string(),
                    child: child_label.to_string(),
                });
            }
            plan.push((target_index, name, &field.value));
        }

        for (target_index, name, value) in &plan {
            debug!("Propagating '{}' from '{}' to '{}'", name, parent, child_label);
            child.fields[*target_index].1.value = (*value).clone();
        }

        Ok(plan.len())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|(field_name, _)| field_name == name)
    }
}
