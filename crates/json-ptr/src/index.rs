//! Array index grammar.

/// How a reference token is parsed when it addresses an array element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IndexGrammar {
    /// One or more ASCII digits. Leading zeros are accepted, so `"01"` is
    /// index 1.
    #[default]
    Decimal,
    /// The RFC 6901 `array-index` production: `"0"`, or a non-zero digit
    /// followed by digits. `"01"` is rejected.
    Rfc6901,
}

impl IndexGrammar {
    /// Parses `token` as an array index.
    ///
    /// Returns `None` when the token does not match the grammar, including
    /// `"-"`, signed numbers, surrounding whitespace and values that overflow
    /// `usize`. Range checking against an array is left to the caller.
    ///
    /// # Example
    ///
    /// ```
    /// use json_ptr::IndexGrammar;
    ///
    /// assert_eq!(IndexGrammar::Decimal.parse("12"), Some(12));
    /// assert_eq!(IndexGrammar::Decimal.parse("012"), Some(12));
    /// assert_eq!(IndexGrammar::Rfc6901.parse("012"), None);
    /// assert_eq!(IndexGrammar::Decimal.parse("-"), None);
    /// ```
    pub fn parse(self, token: &str) -> Option<usize> {
        if !is_integer(token) {
            return None;
        }
        if self == IndexGrammar::Rfc6901 && token.len() > 1 && token.starts_with('0') {
            return None;
        }
        token.parse().ok()
    }
}

/// Check if a string consists only of ASCII digits.
fn is_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
