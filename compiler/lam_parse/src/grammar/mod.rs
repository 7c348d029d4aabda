//! The line grammar.
//!
//! There is no token stream: each rule looks at the whole (trimmed) text,
//! decides whether it applies, and recurses on the pieces. Rules are tried
//! in a fixed order and the first that applies wins:
//!
//! 1. equation     `name = expr`
//! 2. lambda       `λx -> expr`
//! 3. quote        `` `label expr ``
//! 4. application  `f a (b c)`
//! 5. atom         `name`

use lam_ir::syntax::{is_binder, ARROW, ASSIGN, CLOSE_PAREN, OPEN_PAREN, QUOTE};
use lam_ir::Node;
use lam_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::split::{lone_top_level_assign, strip_wrapping_parens, top_level_tokens};
use crate::{ParseError, ParseErrorKind};

pub(crate) fn expression(source: &str) -> Result<Node, ParseError> {
    ensure_sufficient_stack(|| {
        let text = source.trim();
        if text.is_empty() {
            return Err(ParseError::new(ParseErrorKind::EmptyExpression, source));
        }

        if let Some(node) = equation(text)? {
            return Ok(node);
        }
        if let Some(node) = lambda(text)? {
            return Ok(node);
        }
        if text.starts_with(QUOTE) {
            return quote(text);
        }
        application(text)
    })
}

/// Whether `text` can be used as a name.
///
/// Anything goes except whitespace, parentheses, `=` and `->`, which is
/// what lets symbols like `,` and `+` serve as names.
pub fn is_identifier(text: &str) -> bool {
    !text.is_empty()
        && !text.contains(ARROW)
        && !text
            .chars()
            .any(|c| c.is_whitespace() || c == ASSIGN || c == OPEN_PAREN || c == CLOSE_PAREN)
}

fn equation(text: &str) -> Result<Option<Node>, ParseError> {
    let Some(at) = lone_top_level_assign(text) else {
        return Ok(None);
    };
    let target = text[..at].trim();
    let value = text[at + ASSIGN.len_utf8()..].trim();
    if target.is_empty() || value.is_empty() {
        return Ok(None);
    }
    if !is_identifier(target) {
        return Err(ParseError::new(
            ParseErrorKind::InvalidAssignmentTarget,
            target,
        ));
    }

    trace!(rule = "equation", binds = target);
    Ok(Some(Node::assignment(target, expression(value)?)))
}

fn lambda(text: &str) -> Result<Option<Node>, ParseError> {
    let Some(at) = text.find(ARROW) else {
        return Ok(None);
    };
    let head = text[..at].trim();
    if head.contains([OPEN_PAREN, CLOSE_PAREN]) {
        return Ok(None);
    }
    let Some(param) = lambda_param(head) else {
        return Ok(None);
    };

    trace!(rule = "lambda", param);
    let body = expression(&text[at + ARROW.len()..])?;
    Ok(Some(Node::lambda(param, body)))
}

/// The parameter named by a lambda head, binder removed.
///
/// A one-character head is the parameter itself; a longer head loses its
/// first character when that character is a binder (`λx`, `\x`, `^x`).
fn lambda_param(head: &str) -> Option<&str> {
    let mut chars = head.chars();
    let first = chars.next()?;
    let rest = chars.as_str();
    let param = if !rest.is_empty() && is_binder(first) {
        rest.trim_start()
    } else {
        head
    };
    is_identifier(param).then_some(param)
}

fn quote(text: &str) -> Result<Node, ParseError> {
    let body = text
        .split_once(char::is_whitespace)
        .map_or("", |(_label, rest)| rest.trim());
    if body.is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyQuote, text));
    }

    trace!(rule = "quote", body);
    Ok(Node::quoted(body))
}

fn application(text: &str) -> Result<Node, ParseError> {
    let tokens = top_level_tokens(text)?;
    match tokens.as_slice() {
        [] => Err(ParseError::new(ParseErrorKind::EmptyExpression, text)),
        [single] => operand(single),
        [head, rest @ ..] => {
            trace!(rule = "application", args = rest.len());
            let func = operand(head)?;
            let args = rest
                .iter()
                .map(|token| operand(token))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Node::apply_all(func, args))
        }
    }
}

/// One application token: a parenthesized group is a full expression,
/// anything else has to be a name.
fn operand(token: &str) -> Result<Node, ParseError> {
    match strip_wrapping_parens(token) {
        Some(inner) => expression(inner),
        None => atom(token),
    }
}

fn atom(text: &str) -> Result<Node, ParseError> {
    if is_identifier(text) {
        Ok(Node::identifier(text))
    } else {
        Err(ParseError::new(ParseErrorKind::InvalidIdentifier, text))
    }
}
