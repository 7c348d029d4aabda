//! `lam eval`: evaluate one expression after the prelude.

use lam_eval::{silent_sink, stdout_sink, InterpreterBuilder};

use super::{fail, RunOptions};
use crate::show::render;

const ORIGIN: &str = "<expr>";

pub fn eval_expr(expr: &str, options: &RunOptions) {
    let sink = if options.quiet {
        silent_sink()
    } else {
        stdout_sink()
    };
    let mut interp = InterpreterBuilder::new()
        .trace_sink(sink)
        .max_depth(options.max_depth)
        .build();

    let evaluation = match interp.run(expr) {
        Ok(evaluation) => evaluation,
        Err(err) => fail(ORIGIN, &err),
    };
    match render(
        &mut interp,
        &evaluation.value,
        options.show.as_ref(),
        &evaluation.env,
    ) {
        Ok(rendered) => println!("{rendered}"),
        Err(err) => fail(ORIGIN, &err),
    }
}
