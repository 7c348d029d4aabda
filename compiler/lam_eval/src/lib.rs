//! Lam Eval - evaluator for the lam lambda calculus.
//!
//! # Architecture
//!
//! - [`Environment`]: persistent chain of single-binding frames
//! - [`Value`]: closures and quotes, plus the host values decoders produce
//! - [`Interpreter`]: strict tree-walking evaluation, builtins, decoding
//! - [`Interpreter::run`]: the program driver (prelude, then one statement
//!   per line)
//! - [`TraceSink`]: where decoders applied by a program report their results

mod builtins;
mod environment;
pub mod errors;
mod interpreter;
pub mod prelude;
mod program;
mod trace;
mod value;

pub use builtins::{Builtin, Decoder};
pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_DEPTH};
pub use program::Evaluation;
pub use trace::{
    buffer_sink, silent_sink, stdout_sink, BufferTrace, SharedTraceSink, TraceEntry, TraceSink,
};
pub use value::{Closure, Deferred, Value};

use lam_ir::Node;

/// Evaluate one node with a default interpreter.
pub fn evaluate(node: &Node, env: &Environment) -> EvalResult {
    Interpreter::new().eval(node, env)
}

/// Run a program with a default interpreter and return its final value.
pub fn interpret(program: &str) -> EvalResult {
    Interpreter::new().run(program).map(|evaluation| evaluation.value)
}
