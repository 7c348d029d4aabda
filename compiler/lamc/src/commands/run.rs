//! `lam run`: execute a program file.

use lam_eval::{silent_sink, stdout_sink, Decoder, InterpreterBuilder, DEFAULT_MAX_DEPTH};

use super::{fail, read_file};
use crate::input::strip_comments;
use crate::show::{parse_decoder, render};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Decoder for the final value; `None` prints it as is.
    pub show: Option<Decoder>,
    /// Application depth ceiling; `None` for unlimited.
    pub max_depth: Option<usize>,
    /// Suppress the trace of decoders applied by the program.
    pub quiet: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            show: None,
            max_depth: Some(DEFAULT_MAX_DEPTH),
            quiet: false,
        }
    }
}

/// Parse the flags following the file path.
///
/// `--max-depth=none` lifts the depth ceiling.
pub fn parse_run_options(args: &[String]) -> Result<RunOptions, String> {
    let mut options = RunOptions::default();
    for arg in args {
        if let Some(spec) = arg.strip_prefix("--show=") {
            options.show = Some(parse_decoder(spec)?);
        } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
            options.max_depth = match depth {
                "none" => None,
                n => Some(
                    n.parse()
                        .map_err(|_| format!("invalid --max-depth value '{n}'"))?,
                ),
            };
        } else if arg == "--quiet" || arg == "-q" {
            options.quiet = true;
        } else {
            return Err(format!("unknown option '{arg}'"));
        }
    }
    Ok(options)
}

pub fn run_file(path: &str, options: &RunOptions) {
    let source = strip_comments(&read_file(path));
    let sink = if options.quiet {
        silent_sink()
    } else {
        stdout_sink()
    };
    let mut interp = InterpreterBuilder::new()
        .trace_sink(sink)
        .max_depth(options.max_depth)
        .build();

    let evaluation = match interp.run(&source) {
        Ok(evaluation) => evaluation,
        Err(err) => fail(path, &err),
    };
    match render(
        &mut interp,
        &evaluation.value,
        options.show.as_ref(),
        &evaluation.env,
    ) {
        Ok(rendered) => println!("{rendered}"),
        Err(err) => fail(path, &err),
    }
}
