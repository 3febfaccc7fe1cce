//! JSON Pointer (RFC 6901) resolution.
//!
//! This crate resolves [JSON Pointers](https://tools.ietf.org/html/rfc6901)
//! against a parsed [`serde_json::Value`] and, when a pointer cannot be
//! followed, reports exactly which token failed, why, and where in the
//! document traversal stopped.
//!
//! # Example
//!
//! ```
//! use json_ptr::{resolve, JsonPointerExt, ResolutionErrorKind};
//! use serde_json::json;
//!
//! let doc = json!({"person": {"name": "John"}, "tags": ["a", "b"]});
//!
//! // Core: a `Result` carrying the node or a structured error
//! assert_eq!(resolve(&doc, "/person/name"), Ok(&json!("John")));
//! let err = resolve(&doc, "/tags/x").unwrap_err();
//! assert_eq!(err.kind(), ResolutionErrorKind::InvalidArrayIndex);
//! assert_eq!(err.current(), &json!(["a", "b"]));
//!
//! // Adapters on `Value`
//! assert_eq!(doc.get_element_or_none("/tags/1"), Some(&json!("b")));
//! assert!(doc.get_element("/person/age").is_err());
//! ```

pub mod cli;
pub mod error;
pub mod ext;
pub mod index;
pub mod resolve;
pub mod token;
pub mod types;

pub use error::{PointerError, ResolutionError, ResolutionErrorKind};
pub use ext::JsonPointerExt;
pub use index::IndexGrammar;
pub use resolve::{resolve, Resolver};
pub use token::{tokens, unescape_token, Token, Tokens};
pub use types::{NodeKind, Resolution, ResolveOptions};
