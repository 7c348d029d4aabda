//! Running whole programs.
//!
//! A program is a sequence of lines, one statement per line. Blank lines are
//! skipped but still counted, so line numbers in errors and trace entries
//! match the source file. Each statement sees every binding made before it;
//! a later assignment to a name shadows the earlier one for the statements
//! that follow, while closures created earlier keep the old binding.
//!
//! An assignment nested inside a statement (`ID (Y = TRUE)`) binds for the
//! following statements too, as long as it is evaluated in the statement's
//! own environment. One reached inside a closure body binds nothing.

use lam_ir::{Name, Node};

use crate::errors::{self, EvalError, EvalResult};
use crate::prelude::PRELUDE;
use crate::{Environment, Interpreter, Value};

/// Result of running a program.
#[derive(Clone, Debug)]
pub struct Evaluation {
    /// Value of the last statement.
    pub value: Value,
    /// Environment after the last statement, for decoding `value` or
    /// running more code.
    pub env: Environment,
}

/// The environment a statement is building.
pub(crate) struct StatementScope {
    /// Environment the statement's expression is evaluated in.
    base: Environment,
    /// `base` plus the nested assignments made so far.
    bound: Environment,
}

impl StatementScope {
    fn new(base: &Environment) -> Self {
        StatementScope {
            base: base.clone(),
            bound: base.clone(),
        }
    }

    /// Record an assignment evaluated in `env`; ignored unless `env` is the
    /// statement's own environment.
    pub(crate) fn bind(&mut self, name: &Name, value: &Value, env: &Environment) {
        if self.base.ptr_eq(env) {
            self.bound = self.bound.bind(name.clone(), value.clone());
        }
    }

    pub(crate) fn bound(&self) -> &Environment {
        &self.bound
    }
}

impl Interpreter {
    /// Run `program` over the configured base environment.
    pub fn run(&mut self, program: &str) -> Result<Evaluation, EvalError> {
        let base = self.base_env().clone();
        self.run_in(program, &base)
    }

    /// Run `program` with `base` in place of the configured base environment.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run_in(&mut self, program: &str, base: &Environment) -> Result<Evaluation, EvalError> {
        let mut env = self.prelude_over(base)?;
        let mut last = None;

        for (index, source) in program.lines().enumerate() {
            if source.trim().is_empty() {
                continue;
            }
            let line = index + 1;
            let outer = self.set_line(Some(line));
            let result = self.exec(source, &env);
            self.set_line(outer);

            let (value, next) = result.map_err(|err| err.at_statement(line, source))?;
            env = next;
            last = Some(value);
        }

        let value = last.ok_or_else(errors::empty_program)?;
        Ok(Evaluation { value, env })
    }

    /// The prelude layered on the configured base environment.
    pub fn prelude(&mut self) -> Result<Environment, EvalError> {
        let base = self.base_env().clone();
        self.prelude_over(&base)
    }

    fn prelude_over(&mut self, base: &Environment) -> Result<Environment, EvalError> {
        PRELUDE.iter().try_fold(base.clone(), |env, source| {
            self.exec(source, &env).map(|(_, next)| next)
        })
    }

    /// Parse and run one statement.
    ///
    /// Returns the statement's value and the environment the next
    /// statement runs in.
    #[tracing::instrument(level = "debug", skip(self, env))]
    pub fn exec(
        &mut self,
        source: &str,
        env: &Environment,
    ) -> Result<(Value, Environment), EvalError> {
        let node = lam_parse::parse(source)?;
        self.exec_node(&node, env)
    }

    /// Run an already parsed statement.
    ///
    /// An assignment reserves its name before the value is evaluated, so
    /// closures and quotes in the value can refer to the definition itself.
    pub fn exec_node(
        &mut self,
        node: &Node,
        env: &Environment,
    ) -> Result<(Value, Environment), EvalError> {
        match node {
            Node::Assignment { name, value } => {
                let scope = env.reserve(name.clone());
                let (value, next) =
                    self.in_statement(&scope, |interp| interp.eval(value, &scope))?;
                let filled = scope.initialize(value.clone());
                debug_assert!(filled, "freshly reserved slot was already filled");
                Ok((value, next))
            }
            _ => self.in_statement(env, |interp| interp.eval(node, env)),
        }
    }

    /// Run `eval` as a statement over `base`, collecting nested assignments.
    fn in_statement(
        &mut self,
        base: &Environment,
        eval: impl FnOnce(&mut Self) -> EvalResult,
    ) -> Result<(Value, Environment), EvalError> {
        let outer = self.set_statement(Some(StatementScope::new(base)));
        let result = eval(self);
        let statement = self.set_statement(outer);
        let value = result?;
        let next = statement.map_or_else(|| base.clone(), |statement| statement.bound);
        Ok((value, next))
    }
}
