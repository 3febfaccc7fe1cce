//! Type definitions for pointer resolution.

use std::fmt;

use serde_json::Value;

use crate::error::ResolutionError;
use crate::index::IndexGrammar;

/// Outcome of resolving a pointer: the referenced node, or why it could not
/// be reached.
pub type Resolution<'a> = Result<&'a Value, ResolutionError<'a>>;

/// The kind of a JSON node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl NodeKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => NodeKind::Object,
            Value::Array(_) => NodeKind::Array,
            Value::String(_) => NodeKind::String,
            Value::Number(_) => NodeKind::Number,
            Value::Bool(_) => NodeKind::Boolean,
            Value::Null => NodeKind::Null,
        }
    }

    /// Whether a reference token can descend into a node of this kind.
    pub fn is_traversable(self) -> bool {
        matches!(self, NodeKind::Object | NodeKind::Array)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Object => "object",
            NodeKind::Array => "array",
            NodeKind::String => "string",
            NodeKind::Number => "number",
            NodeKind::Boolean => "boolean",
            NodeKind::Null => "null",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options controlling how a [`crate::Resolver`] interprets tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Grammar used for tokens that address array elements.
    pub index_grammar: IndexGrammar,
}

impl ResolveOptions {
    pub fn with_index_grammar(mut self, index_grammar: IndexGrammar) -> Self {
        self.index_grammar = index_grammar;
        self
    }
}
