//! Runtime values.
//!
//! Programs only ever build closures and quotes. Numbers, booleans,
//! characters and lists exist so decoders can hand Church encodings back
//! to the host in a readable form; nothing in the surface syntax can
//! write them.

use std::fmt;
use std::rc::Rc;

use lam_ir::syntax::{LAMBDA, QUOTE, QUOTE_LABEL};
use lam_ir::{Name, Node};

use crate::{Builtin, Environment};

/// A lambda together with the environment it was evaluated in.
#[derive(Clone)]
pub struct Closure {
    pub param: Name,
    pub body: Rc<Node>,
    pub env: Environment,
}

/// Quoted text waiting to be parsed, with the environment it was quoted in.
#[derive(Clone)]
pub struct Deferred {
    pub text: Rc<str>,
    pub env: Environment,
}

#[derive(Clone, Debug)]
pub enum Value {
    Closure(Closure),
    Deferred(Deferred),
    Number(u64),
    Bool(bool),
    Char(char),
    List(Vec<Value>),
    Builtin(Builtin),
}

impl Value {
    pub fn closure(param: Name, body: Rc<Node>, env: Environment) -> Self {
        Value::Closure(Closure { param, body, env })
    }

    pub fn deferred(text: Rc<str>, env: Environment) -> Self {
        Value::Deferred(Deferred { text, env })
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Closure(_) => "closure",
            Value::Deferred(_) => "quote",
            Value::Number(_) => "number",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::List(_) => "list",
            Value::Builtin(_) => "builtin",
        }
    }

    /// Whether the value can appear on the left of an application.
    pub fn is_applicable(&self) -> bool {
        matches!(
            self,
            Value::Closure(_) | Value::Deferred(_) | Value::Builtin(_)
        )
    }

    /// Short form for error messages: host values print in full,
    /// functions only by kind.
    pub fn describe(&self) -> String {
        match self {
            Value::Closure(_) | Value::Deferred(_) => self.type_name().to_string(),
            _ => self.to_string(),
        }
    }

    pub fn as_number(&self) -> Option<u64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Char(c) => write!(f, "{c:?}"),
            _ => write!(f, "{self}"),
        }
    }
}

/// Functions compare by identity; host values structurally.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Closure(a), Value::Closure(b)) => {
                Rc::ptr_eq(&a.body, &b.body) && a.env.ptr_eq(&b.env)
            }
            (Value::Deferred(a), Value::Deferred(b)) => {
                Rc::ptr_eq(&a.text, &b.text) && a.env.ptr_eq(&b.env)
            }
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Closure(closure) => write!(f, "{closure}"),
            Value::Deferred(deferred) => write!(f, "{deferred}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_element(f)?;
                }
                f.write_str("]")
            }
            Value::Builtin(builtin) => write!(f, "<builtin {builtin}>"),
        }
    }
}

impl fmt::Display for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rendering the lambda node keeps the parenthesization rules in one place.
        let node = Node::Lambda {
            param: self.param.clone(),
            body: Rc::clone(&self.body),
        };
        write!(f, "{node}")
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Closure({LAMBDA}{} -> {})", self.param, self.body)
    }
}

impl fmt::Display for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{QUOTE}{QUOTE_LABEL} {}", self.text)
    }
}

impl fmt::Debug for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deferred({:?})", self.text)
    }
}
