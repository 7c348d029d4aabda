//! Command handlers for the `lam` CLI.
//!
//! Each submodule implements one command. Shared helpers (reading a source
//! file, rendering an error) live here.

use std::fmt::Write as _;

use lam_eval::EvalError;

mod debug;
mod eval;
mod run;

pub use debug::{parse_file, render_tree};
pub use eval::eval_expr;
pub use run::{parse_run_options, run_file, RunOptions};

/// Read a source file, or report why not and exit.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

/// Render an evaluation error for the terminal.
///
/// ```text
/// error[unbound-identifier]: unbound identifier: Q
///   --> prog.lam:3
///    |
///  3 | ID Q
/// ```
pub fn format_error(origin: &str, err: &EvalError) -> String {
    let mut out = format!("error[{}]: {}\n", err.kind.label(), err.message);
    if let Some(line) = err.line {
        let gutter = line.to_string().len();
        let pad = " ".repeat(gutter);
        let _ = writeln!(out, "{pad}--> {origin}:{line}");
        if let Some(statement) = &err.statement {
            let _ = writeln!(out, "{pad} |");
            let _ = writeln!(out, "{line} | {statement}");
        }
    } else {
        let _ = writeln!(out, "  --> {origin}");
    }
    out
}

/// Print `err` to stderr and exit with status 1.
pub(crate) fn fail(origin: &str, err: &EvalError) -> ! {
    eprint!("{}", format_error(origin, err));
    std::process::exit(1);
}
