//! Resolving a pointer against a document.

use log::{debug, trace};
use serde_json::Value;

use crate::error::ResolutionError;
use crate::token::tokens;
use crate::types::{NodeKind, Resolution, ResolveOptions};

/// Resolves JSON Pointers with a fixed set of [`ResolveOptions`].
///
/// A `Resolver` holds no state besides its options and never mutates the
/// documents it is given, so one instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolver {
    options: ResolveOptions,
}

impl Resolver {
    pub fn new(options: ResolveOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Resolves `pointer` against `root`.
    ///
    /// The empty pointer refers to `root` itself, whatever its kind. Any
    /// other pointer must start with `/`. Tokens are applied left to right
    /// and resolution stops at the first one that cannot be followed.
    ///
    /// # Example
    ///
    /// ```
    /// use json_ptr::{Resolver, ResolutionErrorKind};
    /// use serde_json::json;
    ///
    /// let doc = json!({"array": [{"id": 1}, {"id": 2}]});
    /// let resolver = Resolver::default();
    ///
    /// assert_eq!(resolver.resolve(&doc, "/array/1/id"), Ok(&json!(2)));
    ///
    /// let err = resolver.resolve(&doc, "/array/2").unwrap_err();
    /// assert_eq!(err.kind(), ResolutionErrorKind::ArrayIndexOutOfRange);
    /// assert_eq!(err.message(), "Array index 2 is out of range.");
    /// ```
    pub fn resolve<'a>(&self, root: &'a Value, pointer: &str) -> Resolution<'a> {
        if pointer.is_empty() {
            return Ok(root);
        }
        if !pointer.starts_with('/') {
            debug!("rejecting JSON pointer {pointer:?}: missing leading '/'");
            return Err(ResolutionError::pointer_must_start_with_slash(pointer, root));
        }

        let mut current = root;
        for token in tokens(pointer) {
            let key = token.as_str();
            trace!("token {key:?} at {}", NodeKind::of(current));
            current = self.step(current, key).inspect_err(|err| {
                debug!("JSON pointer {pointer:?} stopped at token {key:?}: {err}");
            })?;
        }
        Ok(current)
    }

    fn step<'a>(&self, current: &'a Value, key: &str) -> Resolution<'a> {
        match current {
            Value::Object(map) => map
                .get(key)
                .ok_or_else(|| ResolutionError::property_not_found(key, current)),
            Value::Array(arr) => {
                let index = self
                    .options
                    .index_grammar
                    .parse(key)
                    .ok_or_else(|| ResolutionError::invalid_array_index(key, current))?;
                arr.get(index).ok_or_else(|| {
                    ResolutionError::array_index_out_of_range(index, key, current)
                })
            }
            _ => Err(ResolutionError::non_traversable_element(key, current)),
        }
    }
}

/// Resolves `pointer` against `root` with the default options.
///
/// # Example
///
/// ```
/// use json_ptr::resolve;
/// use serde_json::json;
///
/// let doc = json!({"foo/bar": {"baz~1qux": "value"}});
/// assert_eq!(resolve(&doc, "/foo~1bar/baz~01qux"), Ok(&json!("value")));
/// assert_eq!(resolve(&doc, ""), Ok(&doc));
/// ```
pub fn resolve<'a>(root: &'a Value, pointer: &str) -> Resolution<'a> {
    Resolver::default().resolve(root, pointer)
}
