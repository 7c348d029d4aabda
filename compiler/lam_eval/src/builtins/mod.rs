//! Host functions reachable from programs.
//!
//! The decoders read a Church encoding back into a host value by applying
//! it to host arguments: a boolean picks between `true` and `false`, a
//! numeral iterates [`Builtin::Succ`] starting from `0`, and a list is
//! walked with the prelude's `NULL`, `FST` and `SND`. Application lives in
//! `Interpreter::apply_builtin`, since decoding evaluates user code.

use std::fmt;

/// How to read a Church-encoded value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Decoder {
    Bool,
    Num,
    /// A numeral read as a Unicode scalar value.
    Char,
    /// A `PAIR`/`NIL` list whose elements are read with the inner decoder.
    List(Box<Decoder>),
}

impl Decoder {
    pub fn list_of(element: Decoder) -> Self {
        Decoder::List(Box::new(element))
    }

    /// What the decoder expects, for mismatch errors.
    pub(crate) fn expected(&self) -> &'static str {
        match self {
            Decoder::Bool => "a Church boolean",
            Decoder::Num => "a Church numeral",
            Decoder::Char => "a Church numeral naming a character",
            Decoder::List(_) => "a Church list",
        }
    }
}

/// Renders the program expression that builds this decoder, e.g.
/// `LIST (LIST CHAR)`.
impl fmt::Display for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decoder::Bool => f.write_str("BOOL"),
            Decoder::Num => f.write_str("NUM"),
            Decoder::Char => f.write_str("CHAR"),
            Decoder::List(element) => match **element {
                Decoder::List(_) => write!(f, "LIST ({element})"),
                _ => write!(f, "LIST {element}"),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// `BOOL`, `NUM`, `CHAR`, or a list decoder built by `LIST`.
    Decode(Decoder),
    /// `LIST`: takes an element decoder, returns a list decoder.
    ListOf,
    /// Host successor: `Number(n)` to `Number(n + 1)`.
    Succ,
}

impl Builtin {
    /// The builtins bound by name in every base environment.
    pub const GLOBALS: [(&'static str, Builtin); 4] = [
        ("BOOL", Builtin::Decode(Decoder::Bool)),
        ("NUM", Builtin::Decode(Decoder::Num)),
        ("CHAR", Builtin::Decode(Decoder::Char)),
        ("LIST", Builtin::ListOf),
    ];
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Builtin::Decode(decoder) => write!(f, "{decoder}"),
            Builtin::ListOf => f.write_str("LIST"),
            Builtin::Succ => f.write_str("SUCC"),
        }
    }
}
