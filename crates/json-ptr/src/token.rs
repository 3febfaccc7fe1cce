//! Splitting a JSON Pointer into reference tokens.

use std::borrow::Cow;
use std::str::Split;

/// Unescapes a single reference token.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
/// Decoding never fails: unknown escapes such as `~2` or a trailing `~` are
/// kept as written.
///
/// # Example
///
/// ```
/// use json_ptr::unescape_token;
///
/// assert_eq!(unescape_token("a~0b"), "a~b");
/// assert_eq!(unescape_token("c~1d"), "c/d");
/// assert_eq!(unescape_token("~01"), "~1");
/// assert_eq!(unescape_token("no-escapes"), "no-escapes");
/// ```
pub fn unescape_token(raw: &str) -> Cow<'_, str> {
    if !raw.contains('~') {
        return Cow::Borrowed(raw);
    }
    // Order matters: ~1 must be replaced before ~0
    Cow::Owned(raw.replace("~1", "/").replace("~0", "~"))
}

/// A decoded reference token along with the segment it was decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'p> {
    raw: &'p str,
    decoded: Cow<'p, str>,
}

impl<'p> Token<'p> {
    fn new(raw: &'p str) -> Self {
        Self {
            raw,
            decoded: unescape_token(raw),
        }
    }

    /// The segment as it appears in the pointer, escapes intact.
    pub fn raw(&self) -> &'p str {
        self.raw
    }

    /// The unescaped key.
    pub fn as_str(&self) -> &str {
        &self.decoded
    }

    pub fn into_string(self) -> String {
        self.decoded.into_owned()
    }
}

impl AsRef<str> for Token<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Iterator over the reference tokens of a pointer.
///
/// Created by [`tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'p> {
    segments: Option<Split<'p, char>>,
}

impl<'p> Iterator for Tokens<'p> {
    type Item = Token<'p>;

    fn next(&mut self) -> Option<Self::Item> {
        self.segments.as_mut()?.next().map(Token::new)
    }
}

/// Splits `pointer` into decoded reference tokens, left to right.
///
/// The empty pointer has no tokens. Otherwise the first character is assumed
/// to be `/` and is skipped, so `"/"` yields a single empty token. Callers
/// that need the leading slash enforced go through [`crate::resolve`].
///
/// # Example
///
/// ```
/// use json_ptr::tokens;
///
/// let keys: Vec<String> = tokens("/a~1b//0").map(|t| t.into_string()).collect();
/// assert_eq!(keys, vec!["a/b", "", "0"]);
/// assert_eq!(tokens("").count(), 0);
/// ```
pub fn tokens(pointer: &str) -> Tokens<'_> {
    let segments = (!pointer.is_empty()).then(|| {
        let mut rest = pointer.chars();
        rest.next();
        rest.as_str().split('/')
    });
    Tokens { segments }
}
