//! Lam Parse - turns one line of surface syntax into a [`Node`].
//!
//! The grammar is line oriented and has no lexer: see [`grammar`] for the
//! rule order. Parsing is pure; the evaluator calls [`parse`] again at run
//! time for quoted text.

mod error;
pub mod grammar;
mod split;

pub use error::{ParseError, ParseErrorKind};
pub use grammar::is_identifier;

use lam_ir::Node;

/// Parse one expression or assignment.
#[tracing::instrument(level = "trace", skip_all)]
pub fn parse(source: &str) -> Result<Node, ParseError> {
    grammar::expression(source)
}
