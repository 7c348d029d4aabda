//! Parenthesis-aware scanning.
//!
//! Parentheses are the only nesting construct, so "top level" always means
//! "at depth 0" and a depth counter is all the state the scanners need.
//! Every parenthesis is one byte, which keeps the byte-offset slicing below
//! on char boundaries.

use lam_ir::syntax::{ASSIGN, CLOSE_PAREN, OPEN_PAREN};

use crate::{ParseError, ParseErrorKind};

/// Split `text` at whitespace that sits outside every parenthesis pair.
///
/// Runs of whitespace count as one separator; the result has no empty
/// tokens.
pub(crate) fn top_level_tokens(text: &str) -> Result<Vec<&str>, ParseError> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start = None;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() && depth == 0 {
            if let Some(s) = start.take() {
                tokens.push(&text[s..i]);
            }
            continue;
        }
        if start.is_none() {
            start = Some(i);
        }
        if c == OPEN_PAREN {
            depth += 1;
        } else if c == CLOSE_PAREN {
            depth = depth.checked_sub(1).ok_or_else(|| unbalanced(text))?;
        }
    }

    if depth != 0 {
        return Err(unbalanced(text));
    }
    if let Some(s) = start {
        tokens.push(&text[s..]);
    }
    Ok(tokens)
}

/// The inside of `text` when one parenthesis pair encloses all of it.
///
/// `(a) (b)` is not wrapped: its first `(` closes before the end.
pub(crate) fn strip_wrapping_parens(text: &str) -> Option<&str> {
    if !text.starts_with(OPEN_PAREN) {
        return None;
    }
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        if c == OPEN_PAREN {
            depth += 1;
        } else if c == CLOSE_PAREN {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return (i == text.len() - 1).then(|| &text[1..i]);
            }
        }
    }
    None
}

/// Byte offset of the assignment sign when `text` has exactly one and it
/// is outside all parentheses.
pub(crate) fn lone_top_level_assign(text: &str) -> Option<usize> {
    let mut depth = 0isize;
    let mut found = None;
    let mut count = 0usize;

    for (i, c) in text.char_indices() {
        match c {
            OPEN_PAREN => depth += 1,
            CLOSE_PAREN => depth -= 1,
            ASSIGN => {
                count += 1;
                if depth == 0 {
                    found = Some(i);
                }
            }
            _ => {}
        }
    }

    if count == 1 {
        found
    } else {
        None
    }
}

fn unbalanced(text: &str) -> ParseError {
    ParseError::new(ParseErrorKind::UnbalancedParens, text)
}
