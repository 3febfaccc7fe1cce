//! Pointer lookups as methods on [`serde_json::Value`].

use serde_json::Value;

use crate::error::PointerError;
use crate::resolve::resolve;
use crate::types::Resolution;

/// Three ways of surfacing the result of [`resolve`], pick whichever fits the
/// call site.
pub trait JsonPointerExt {
    /// Returns the referenced node, or an error whose message names the
    /// pointer: `Error resolving JSON pointer '<pointer>': <reason>`.
    ///
    /// ```
    /// use json_ptr::JsonPointerExt;
    /// use serde_json::json;
    ///
    /// let doc = json!({"name": "John"});
    /// assert_eq!(doc.get_element("/name").unwrap(), "John");
    ///
    /// let err = doc.get_element("/Name").unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Error resolving JSON pointer '/Name': Property 'Name' not found."
    /// );
    /// ```
    fn get_element(&self, pointer: &str) -> Result<&Value, PointerError<'_>>;

    /// Returns the referenced node, discarding the reason on failure.
    ///
    /// ```
    /// use json_ptr::JsonPointerExt;
    /// use serde_json::json;
    ///
    /// let doc = json!([1, 2, 3]);
    /// assert_eq!(doc.get_element_or_none("/0"), Some(&json!(1)));
    /// assert_eq!(doc.get_element_or_none("/3"), None);
    /// ```
    fn get_element_or_none(&self, pointer: &str) -> Option<&Value>;

    /// Returns the raw resolution result, with the structured error on
    /// failure.
    fn try_get_element(&self, pointer: &str) -> Resolution<'_>;
}

impl JsonPointerExt for Value {
    fn get_element(&self, pointer: &str) -> Result<&Value, PointerError<'_>> {
        resolve(self, pointer).map_err(|err| PointerError::new(pointer, err))
    }

    fn get_element_or_none(&self, pointer: &str) -> Option<&Value> {
        resolve(self, pointer).ok()
    }

    fn try_get_element(&self, pointer: &str) -> Resolution<'_> {
        resolve(self, pointer)
    }
}
