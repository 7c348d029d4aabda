//! Surface-syntax markers.
//!
//! Shared between the parser (which splits on them) and `Node`'s `Display`
//! impl (which must render text the parser accepts again).

/// Separates an assignment target from its value.
pub const ASSIGN: char = '=';

/// Separates a lambda parameter from its body.
pub const ARROW: &str = "->";

/// Starts a quoted (deferred) expression.
pub const QUOTE: char = '`';

/// Label written after the quote marker when rendering a quoted node.
/// The parser discards whatever label it finds.
pub const QUOTE_LABEL: &str = "_";

/// Conventional lambda binder.
pub const LAMBDA: char = 'λ';

/// ASCII stand-in for `λ`.
pub const BACKSLASH: char = '\\';

pub const OPEN_PAREN: char = '(';
pub const CLOSE_PAREN: char = ')';

/// Whether `c` may be used as the binder in front of a lambda parameter.
///
/// `λ` is alphabetic as far as Unicode is concerned, so it is listed
/// explicitly next to the "any other symbol" rule.
pub fn is_binder(c: char) -> bool {
    c == LAMBDA || c == BACKSLASH || !(c.is_alphanumeric() || c == '_')
}
