//! Runtime errors.
//!
//! `EvalErrorKind` carries the structured category; factory functions are
//! the way errors are created and fill in `message` from the kind's
//! `Display`. The program driver attaches the line and statement text on
//! the way out, so errors raised deep inside an application still point at
//! the source line that started it.

use std::fmt;

use lam_parse::{ParseError, ParseErrorKind};

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// The text of a statement or an applied quote did not parse, or the
    /// program has no statements at all.
    MalformedSyntax(ParseError),
    UnboundIdentifier {
        name: String,
    },
    /// Application of a value that is not a function.
    NotApplicable {
        type_name: String,
    },
    /// The application depth limit was reached.
    StackExhaustion {
        depth: usize,
    },
    /// A decoder was given something that is not the encoding it reads.
    DecodeMismatch {
        expected: String,
        found: String,
    },
}

impl EvalErrorKind {
    /// Short stable label, used as the `error[...]` tag by the CLI.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MalformedSyntax(_) => "malformed-syntax",
            Self::UnboundIdentifier { .. } => "unbound-identifier",
            Self::NotApplicable { .. } => "not-applicable",
            Self::StackExhaustion { .. } => "stack-exhaustion",
            Self::DecodeMismatch { .. } => "decode-mismatch",
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedSyntax(err) => write!(f, "{err}"),
            Self::UnboundIdentifier { name } => write!(f, "unbound identifier: {name}"),
            Self::NotApplicable { type_name } => {
                write!(f, "a {type_name} cannot be applied to an argument")
            }
            Self::StackExhaustion { depth } => {
                write!(f, "stack exhausted: applications nested deeper than {depth}")
            }
            Self::DecodeMismatch { expected, found } => {
                write!(f, "cannot decode: expected {expected}, found {found}")
            }
        }
    }
}

/// An evaluation failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Equal to `kind.to_string()`.
    pub message: String,
    /// 1-based source line of the statement being run, when known.
    pub line: Option<usize>,
    /// Text of the statement being run, when known.
    pub statement: Option<String>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            line: None,
            statement: None,
        }
    }

    /// Attach the statement an error came from.
    ///
    /// An error that already carries a location keeps it.
    #[must_use]
    pub fn at_statement(mut self, line: usize, statement: &str) -> Self {
        if self.line.is_none() {
            self.line = Some(line);
            self.statement = Some(statement.trim().to_string());
        }
        self
    }

    /// Whether the error is a syntax error.
    pub fn is_malformed_syntax(&self) -> bool {
        matches!(self.kind, EvalErrorKind::MalformedSyntax(_))
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            EvalErrorKind::MalformedSyntax(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(err: ParseError) -> Self {
        malformed_syntax(err)
    }
}

// Factories

#[cold]
pub fn malformed_syntax(err: ParseError) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedSyntax(err))
}

#[cold]
pub fn empty_program() -> EvalError {
    malformed_syntax(ParseError::new(ParseErrorKind::EmptyExpression, ""))
}

#[cold]
pub fn unbound_identifier(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundIdentifier {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_applicable(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotApplicable {
        type_name: value.type_name().to_string(),
    })
}

#[cold]
pub fn stack_exhaustion(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackExhaustion { depth })
}

#[cold]
pub fn decode_mismatch(expected: &str, found: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DecodeMismatch {
        expected: expected.to_string(),
        found: found.describe(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_matches_kind() {
        let err = unbound_identifier("Q");
        assert_eq!(err.message, "unbound identifier: Q");
        assert_eq!(err.message, err.kind.to_string());
    }

    #[test]
    fn location_is_attached_once() {
        let err = unbound_identifier("Q")
            .at_statement(3, "  f Q ")
            .at_statement(9, "outer");
        assert_eq!(err.line, Some(3));
        assert_eq!(err.statement.as_deref(), Some("f Q"));
        assert_eq!(err.to_string(), "line 3: unbound identifier: Q");
    }

    #[test]
    fn parse_errors_convert() {
        let err: EvalError = ParseError::new(ParseErrorKind::EmptyQuote, "`q").into();
        assert!(err.is_malformed_syntax());
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.kind.label(), "malformed-syntax");
    }

    #[test]
    fn mismatch_renders_found_value() {
        let err = decode_mismatch("Church boolean", &Value::Number(3));
        assert_eq!(err.message, "cannot decode: expected Church boolean, found 3");
    }
}
