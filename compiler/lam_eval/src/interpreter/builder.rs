//! `InterpreterBuilder` for configuring an [`Interpreter`].

use lam_stack::DepthLimit;

use super::{Interpreter, DEFAULT_MAX_DEPTH};
use crate::{prelude, stdout_sink, Environment, SharedTraceSink};

/// Builder for [`Interpreter`].
///
/// Defaults: decoder results go to stdout, applications nest at most
/// [`DEFAULT_MAX_DEPTH`] deep, and programs start from the environment
/// holding the host builtins.
pub struct InterpreterBuilder {
    trace: Option<SharedTraceSink>,
    max_depth: Option<usize>,
    base: Option<Environment>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            trace: None,
            max_depth: Some(DEFAULT_MAX_DEPTH),
            base: None,
        }
    }

    /// Where decoder results are reported.
    #[must_use]
    pub fn trace_sink(mut self, sink: SharedTraceSink) -> Self {
        self.trace = Some(sink);
        self
    }

    /// Ceiling on nested applications; `None` removes it.
    ///
    /// Without a ceiling only memory bounds a divergent program.
    #[must_use]
    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Environment programs start from. The prelude is layered on top of
    /// it each run.
    #[must_use]
    pub fn base_env(mut self, env: Environment) -> Self {
        self.base = Some(env);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            trace: self.trace.unwrap_or_else(stdout_sink),
            depth: DepthLimit::new(self.max_depth),
            base: self.base.unwrap_or_else(prelude::base_environment),
            line: None,
            statement: None,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
