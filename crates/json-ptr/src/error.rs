use serde_json::Value;
use thiserror::Error;

use crate::types::NodeKind;

/// Why a pointer failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionErrorKind {
    /// A non-empty pointer did not start with `/`.
    PointerMustStartWithSlash,
    /// An object had no member with the token as its key.
    PropertyNotFound,
    /// A token addressing an array element was not an array index.
    InvalidArrayIndex,
    /// An array index was past the end of the array.
    ArrayIndexOutOfRange,
    /// A token was applied to a string, number, boolean or null.
    NonTraversableElement,
}

/// A failed resolution, positioned at the node where traversal stopped.
///
/// `current` borrows from the document that was being resolved, so no
/// subtree is copied when an error is produced.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ResolutionError<'a> {
    kind: ResolutionErrorKind,
    message: String,
    token: String,
    current: &'a Value,
}

impl<'a> ResolutionError<'a> {
    pub(crate) fn pointer_must_start_with_slash(pointer: &str, root: &'a Value) -> Self {
        Self {
            kind: ResolutionErrorKind::PointerMustStartWithSlash,
            message: "A JSON pointer must start with a '/'".to_string(),
            token: pointer.to_string(),
            current: root,
        }
    }

    pub(crate) fn property_not_found(token: &str, current: &'a Value) -> Self {
        Self {
            kind: ResolutionErrorKind::PropertyNotFound,
            message: format!("Property '{token}' not found."),
            token: token.to_string(),
            current,
        }
    }

    pub(crate) fn invalid_array_index(token: &str, current: &'a Value) -> Self {
        Self {
            kind: ResolutionErrorKind::InvalidArrayIndex,
            message: format!("Invalid array index: {token}."),
            token: token.to_string(),
            current,
        }
    }

    pub(crate) fn array_index_out_of_range(index: usize, token: &str, current: &'a Value) -> Self {
        Self {
            kind: ResolutionErrorKind::ArrayIndexOutOfRange,
            message: format!("Array index {index} is out of range."),
            token: token.to_string(),
            current,
        }
    }

    pub(crate) fn non_traversable_element(token: &str, current: &'a Value) -> Self {
        Self {
            kind: ResolutionErrorKind::NonTraversableElement,
            message: "The current JSON element is not an object or array.".to_string(),
            token: token.to_string(),
            current,
        }
    }

    pub fn kind(&self) -> ResolutionErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The unescaped token that failed, or the whole pointer when it did not
    /// start with `/`.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The node traversal was positioned at when the error occurred. For a
    /// missing property this is the object that was searched, not the child.
    pub fn current(&self) -> &'a Value {
        self.current
    }

    pub fn current_kind(&self) -> NodeKind {
        NodeKind::of(self.current)
    }
}

/// Error returned by [`crate::JsonPointerExt::get_element`].
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Error resolving JSON pointer '{pointer}': {error}")]
pub struct PointerError<'a> {
    pointer: String,
    error: ResolutionError<'a>,
}

impl<'a> PointerError<'a> {
    pub(crate) fn new(pointer: &str, error: ResolutionError<'a>) -> Self {
        Self {
            pointer: pointer.to_string(),
            error,
        }
    }

    pub fn pointer(&self) -> &str {
        &self.pointer
    }

    pub fn resolution_error(&self) -> &ResolutionError<'a> {
        &self.error
    }

    pub fn kind(&self) -> ResolutionErrorKind {
        self.error.kind()
    }

    pub fn into_resolution_error(self) -> ResolutionError<'a> {
        self.error
    }
}
