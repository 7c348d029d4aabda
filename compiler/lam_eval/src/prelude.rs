//! Definitions every program starts with.
//!
//! Church pairs and booleans, plus the list primitives the list decoder
//! walks with. Lists are right-nested pairs ending in `NIL`; `NULL` tells
//! `NIL` apart from a pair by what each returns when applied to `KILL`.

use lam_ir::Name;

use crate::{Builtin, Environment, Value};

/// Prelude statements, run in order before user code.
pub const PRELUDE: [&str; 9] = [
    "PAIR = λx->λy->λf->f x y",
    "TRUE = λx->λy->x",
    "FALSE = λx->λy->y",
    "FST = λp->p TRUE",
    "SND = λp->p FALSE",
    "NIL = λx->TRUE",
    "KILL = λx->λy->FALSE",
    "NULL = λp->p KILL",
    ", = λf->f NIL",
];

pub(crate) const NULL: &str = "NULL";
pub(crate) const FST: &str = "FST";
pub(crate) const SND: &str = "SND";

/// The host builtins (`BOOL`, `NUM`, `CHAR`, `LIST`) and nothing else.
pub fn base_environment() -> Environment {
    Builtin::GLOBALS
        .into_iter()
        .fold(Environment::new(), |env, (name, builtin)| {
            env.bind(Name::new(name), Value::Builtin(builtin))
        })
}
