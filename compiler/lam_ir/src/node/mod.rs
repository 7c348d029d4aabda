//! Syntax nodes.

use std::fmt;
use std::rc::Rc;

use crate::syntax::{LAMBDA, QUOTE, QUOTE_LABEL};
use crate::Name;

/// One parsed line (or sub-expression) of a program.
///
/// The set of forms is closed: the evaluator matches on it exhaustively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// A variable reference.
    Identifier(Name),
    /// `name = value`. Yields the value; at statement level it also binds it.
    Assignment { name: Name, value: Box<Node> },
    /// `λparam -> body`. Currying is expressed by nesting.
    Lambda { param: Name, body: Rc<Node> },
    /// Binary application. `f a b` is `Application(Application(f, a), b)`.
    Application { func: Box<Node>, arg: Box<Node> },
    /// Expression text whose parsing is deferred until the quote is applied.
    Quoted(Rc<str>),
}

impl Node {
    pub fn identifier(name: impl Into<Name>) -> Self {
        Node::Identifier(name.into())
    }

    pub fn assignment(name: impl Into<Name>, value: Node) -> Self {
        Node::Assignment {
            name: name.into(),
            value: Box::new(value),
        }
    }

    pub fn lambda(param: impl Into<Name>, body: Node) -> Self {
        Node::Lambda {
            param: param.into(),
            body: Rc::new(body),
        }
    }

    pub fn application(func: Node, arg: Node) -> Self {
        Node::Application {
            func: Box::new(func),
            arg: Box::new(arg),
        }
    }

    pub fn quoted(text: &str) -> Self {
        Node::Quoted(Rc::from(text))
    }

    /// Fold `func` over `args` left to right: `f a b` becomes `(f a) b`.
    pub fn apply_all(func: Node, args: impl IntoIterator<Item = Node>) -> Self {
        args.into_iter().fold(func, Node::application)
    }

    /// Short label for the node's form, used in trace output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Identifier(_) => "identifier",
            Node::Assignment { .. } => "assignment",
            Node::Lambda { .. } => "lambda",
            Node::Application { .. } => "application",
            Node::Quoted(_) => "quoted",
        }
    }

    fn is_atom(&self) -> bool {
        matches!(self, Node::Identifier(_))
    }

    /// Forms that swallow everything to their right and so must be
    /// parenthesized when something follows them.
    fn is_open_ended(&self) -> bool {
        matches!(
            self,
            Node::Lambda { .. } | Node::Assignment { .. } | Node::Quoted(_)
        )
    }
}

/// Renders surface syntax that parses back to an equal node.
///
/// A nested assignment is only re-parseable in argument position; the
/// grammar has no way to write an assignment whose value is an assignment.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Identifier(name) => write!(f, "{name}"),
            Node::Assignment { name, value } => write!(f, "{name} = {value}"),
            Node::Lambda { param, body } => {
                if matches!(**body, Node::Assignment { .. }) {
                    write!(f, "{LAMBDA}{param} -> ({body})")
                } else {
                    write!(f, "{LAMBDA}{param} -> {body}")
                }
            }
            Node::Application { func, arg } => {
                if func.is_open_ended() {
                    write!(f, "({func})")?;
                } else {
                    write!(f, "{func}")?;
                }
                if arg.is_atom() {
                    write!(f, " {arg}")
                } else {
                    write!(f, " ({arg})")
                }
            }
            Node::Quoted(text) => write!(f, "{QUOTE}{QUOTE_LABEL} {text}"),
        }
    }
}
