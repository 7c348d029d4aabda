//! Tree-walking evaluator.
//!
//! Evaluation is strict: an application evaluates its function, then its
//! argument, then applies. Nothing is memoized; a quote is re-parsed each
//! time it is applied.

mod builder;
mod decode;

use std::rc::Rc;

use lam_ir::{Name, Node};
use lam_stack::{ensure_sufficient_stack, DepthLimit};
use tracing::trace;

use crate::errors::{self, EvalResult};
use crate::program::StatementScope;
use crate::{Environment, SharedTraceSink, Value};

pub use builder::InterpreterBuilder;

/// Default ceiling on nested applications.
///
/// Church numerals in the low thousands decode comfortably below it, while
/// a divergent program stops within a second or two.
pub const DEFAULT_MAX_DEPTH: usize = 20_000;

pub struct Interpreter {
    trace: SharedTraceSink,
    depth: DepthLimit,
    /// Environment programs start from (before the prelude).
    base: Environment,
    /// User line of the statement being run, for trace entries.
    line: Option<usize>,
    /// Bindings made so far by the statement being run.
    statement: Option<StatementScope>,
}

impl Interpreter {
    /// An interpreter with the default configuration.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.depth.max()
    }

    pub fn base_env(&self) -> &Environment {
        &self.base
    }

    /// Evaluate `node` in `env`.
    ///
    /// An assignment reached here yields its value. When `env` is the
    /// environment of the statement being run, the binding is also added to
    /// the environment the next statement sees.
    pub fn eval(&mut self, node: &Node, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(node, env))
    }

    fn eval_inner(&mut self, node: &Node, env: &Environment) -> EvalResult {
        match node {
            Node::Identifier(name) => env
                .lookup(name)
                .ok_or_else(|| errors::unbound_identifier(name)),
            Node::Assignment { name, value } => {
                let value = self.eval(value, env)?;
                self.bind_in_statement(name, &value, env);
                Ok(value)
            }
            Node::Lambda { param, body } => Ok(Value::closure(
                param.clone(),
                Rc::clone(body),
                env.clone(),
            )),
            Node::Application { func, arg } => {
                let func = self.eval(func, env)?;
                let arg = self.eval(arg, env)?;
                self.apply(&func, arg, env)
            }
            Node::Quoted(text) => Ok(Value::deferred(Rc::clone(text), env.clone())),
        }
    }

    /// Apply `func` to an already evaluated argument.
    ///
    /// `env` is the environment of the call site; builtins resolve the
    /// prelude names they need there.
    #[tracing::instrument(level = "trace", skip_all, fields(func = func.type_name()))]
    pub fn apply(&mut self, func: &Value, arg: Value, env: &Environment) -> EvalResult {
        if let Err(exceeded) = self.depth.enter() {
            return Err(errors::stack_exhaustion(exceeded.limit));
        }
        let result = ensure_sufficient_stack(|| self.apply_inner(func, arg, env));
        self.depth.exit();
        result
    }

    fn apply_inner(&mut self, func: &Value, arg: Value, env: &Environment) -> EvalResult {
        match func {
            Value::Closure(closure) => {
                let scope = closure.env.bind(closure.param.clone(), arg);
                self.eval(&closure.body, &scope)
            }
            // The argument only serves to trigger evaluation. Names the
            // captured chain lacks resolve in the bindings live right now.
            Value::Deferred(deferred) => {
                trace!(text = %deferred.text, "forcing quote");
                let node = lam_parse::parse(&deferred.text)?;
                let scope = deferred.env.with_fallback(&self.live_env(env));
                self.eval(&node, &scope)
            }
            Value::Builtin(builtin) => self.apply_builtin(builtin, arg, env),
            Value::Number(_) | Value::Bool(_) | Value::Char(_) | Value::List(_) => {
                Err(errors::not_applicable(func))
            }
        }
    }

    fn bind_in_statement(&mut self, name: &Name, value: &Value, env: &Environment) {
        if let Some(statement) = &mut self.statement {
            statement.bind(name, value, env);
        }
    }

    /// The running statement's environment, or `call_site` outside a program.
    fn live_env(&self, call_site: &Environment) -> Environment {
        self.statement
            .as_ref()
            .map_or_else(|| call_site.clone(), |statement| statement.bound().clone())
    }

    /// Swap the scope of the running statement, returning the previous one.
    pub(crate) fn set_statement(
        &mut self,
        statement: Option<StatementScope>,
    ) -> Option<StatementScope> {
        std::mem::replace(&mut self.statement, statement)
    }

    /// Set the user line reported by trace entries, returning the previous one.
    pub(crate) fn set_line(&mut self, line: Option<usize>) -> Option<usize> {
        std::mem::replace(&mut self.line, line)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
