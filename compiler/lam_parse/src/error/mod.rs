//! Parse errors.
//!
//! Every kind here is reported to users as malformed syntax; the kind only
//! says which rule rejected the text.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A `)` without an opener, or an opener left unclosed.
    UnbalancedParens,
    /// Nothing to parse: blank input or `()`.
    EmptyExpression,
    /// A leaf token that cannot be a name.
    InvalidIdentifier,
    /// The left side of `=` is not a name.
    InvalidAssignmentTarget,
    /// A quote marker with nothing after its label.
    EmptyQuote,
}

impl ParseErrorKind {
    pub fn description(self) -> &'static str {
        match self {
            ParseErrorKind::UnbalancedParens => "unbalanced parentheses",
            ParseErrorKind::EmptyExpression => "empty expression",
            ParseErrorKind::InvalidIdentifier => "invalid identifier",
            ParseErrorKind::InvalidAssignmentTarget => "invalid assignment target",
            ParseErrorKind::EmptyQuote => "empty quote",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A rejected piece of source text.
///
/// `text` is the fragment the failing rule was looking at, which for nested
/// expressions is narrower than the whole line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub text: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, text: &str) -> Self {
        ParseError {
            kind,
            text: text.to_string(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.trim().is_empty() {
            write!(f, "malformed syntax: {}", self.kind)
        } else {
            write!(f, "malformed syntax: {} in `{}`", self.kind, self.text)
        }
    }
}

impl std::error::Error for ParseError {}
