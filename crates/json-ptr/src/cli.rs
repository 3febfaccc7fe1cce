//! Core logic of the `json-ptr` binary.
//!
//! The binary reads a document from stdin and prints the node a pointer
//! refers to. Everything except process I/O lives here so it can be tested.

use serde_json::Value;
use thiserror::Error;

use crate::error::PointerError;
use crate::index::IndexGrammar;
use crate::resolve::Resolver;
use crate::types::ResolveOptions;

/// Flag switching array index parsing to [`IndexGrammar::Rfc6901`].
pub const RFC6901_INDEX_FLAG: &str = "--rfc6901-index";

pub const USAGE: &str = "Usage: json-ptr [--rfc6901-index] '<pointer>'";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Pointer(String),
    #[error("First argument must be a JSON Pointer.\n{}", USAGE)]
    MissingPointer,
    #[error("Unknown option: {0}\n{usage}", usage = USAGE)]
    UnknownOption(String),
}

impl From<PointerError<'_>> for CliError {
    fn from(e: PointerError<'_>) -> Self {
        CliError::Pointer(e.to_string())
    }
}

/// Parsed command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub pointer: String,
    pub options: ResolveOptions,
}

impl Args {
    /// Parses arguments, excluding the program name.
    ///
    /// A lone `--` ends option parsing, so `json-ptr -- --x` looks up the
    /// pointer `--x` (which then fails for lack of a leading slash).
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut options = ResolveOptions::default();
        let mut pointer = None;
        let mut options_done = false;

        for arg in args.into_iter().map(Into::into) {
            if !options_done && arg == "--" {
                options_done = true;
            } else if !options_done && arg == RFC6901_INDEX_FLAG {
                options = options.with_index_grammar(IndexGrammar::Rfc6901);
            } else if !options_done && arg.starts_with("--") {
                return Err(CliError::UnknownOption(arg));
            } else if pointer.is_none() {
                pointer = Some(arg);
            } else {
                return Err(CliError::UnknownOption(arg));
            }
        }

        Ok(Self {
            pointer: pointer.ok_or(CliError::MissingPointer)?,
            options,
        })
    }
}

/// Look up a JSON Pointer (RFC 6901) in a document.
///
/// `doc_json`: the document as a JSON string.
/// `pointer`: the JSON Pointer string (e.g., `/foo/bar`).
///
/// Returns the found value as a pretty-printed JSON string.
pub fn lookup_pointer(
    doc_json: &str,
    pointer: &str,
    options: &ResolveOptions,
) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let found = Resolver::new(*options)
        .resolve(&doc, pointer)
        .map_err(|err| PointerError::new(pointer, err))?;
    Ok(serde_json::to_string_pretty(found)?)
}
