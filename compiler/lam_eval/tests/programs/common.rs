//! Shared helpers for program tests.

use lam_eval::{
    buffer_sink, silent_sink, Decoder, EvalError, Evaluation, Interpreter, InterpreterBuilder,
    Value,
};

/// Church numerals and arithmetic, for tests to prepend to their programs.
pub const NUMERALS: &str = "\
ZERO = λf->λx->x
SUCC = λn->λf->λx->f (n f x)
ONE = SUCC ZERO
TWO = SUCC ONE
THREE = SUCC TWO
ADD = λm->λn->λf->λx->m f (n f x)
MUL = λm->λn->λf->m (n f)
ISZERO = λn->n (λx->FALSE) TRUE
PRED = λn->λf->λx->n (λg->λh->h (g f)) (λu->x) (λu->u)
";

pub fn quiet() -> Interpreter {
    InterpreterBuilder::new().trace_sink(silent_sink()).build()
}

/// Run `program` with the numerals prepended.
pub fn run(program: &str) -> Evaluation {
    quiet()
        .run(&format!("{NUMERALS}{program}"))
        .unwrap_or_else(|err| panic!("program failed: {err}"))
}

/// Run `program` as is, expecting an error.
pub fn run_err(program: &str) -> EvalError {
    match quiet().run(program) {
        Ok(evaluation) => panic!("expected an error, got {}", evaluation.value),
        Err(err) => err,
    }
}

/// Decode the program's final value with `decoder`.
pub fn decoded(program: &str, decoder: &Decoder) -> Value {
    let evaluation = run(program);
    quiet()
        .decode(&evaluation.value, decoder, &evaluation.env)
        .unwrap()
}

pub fn num(program: &str) -> u64 {
    decoded(program, &Decoder::Num).as_number().unwrap()
}

/// The trace written while running `program` as is.
pub fn trace_of(program: &str) -> String {
    let sink = buffer_sink();
    let mut interp = InterpreterBuilder::new().trace_sink(sink.clone()).build();
    interp.run(program).unwrap();
    sink.output()
}
