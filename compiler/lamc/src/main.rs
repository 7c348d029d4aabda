//! Lam CLI
//!
//! Runs Church-encoded lambda calculus programs.

use lamc::commands::{eval_expr, parse_file, parse_run_options, run_file, RunOptions};

fn main() {
    lamc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: lam run <file.lam> [options]");
                print_run_options();
                std::process::exit(1);
            }
            let options = options_or_exit(&args[3..]);
            run_file(&args[2], &options);
        }
        "eval" => {
            if args.len() < 3 {
                eprintln!("Usage: lam eval <expression> [options]");
                print_run_options();
                std::process::exit(1);
            }
            let options = options_or_exit(&args[3..]);
            eval_expr(&args[2], &options);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: lam parse <file.lam>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("lam {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // Allow `lam file.lam` as shorthand for `lam run file.lam`
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("lam"))
            {
                let options = options_or_exit(&args[2..]);
                run_file(command, &options);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn options_or_exit(args: &[String]) -> RunOptions {
    match parse_run_options(args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("error: {msg}");
            print_run_options();
            std::process::exit(1);
        }
    }
}

fn print_run_options() {
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --show=<decoder>    Decode the final value: bool, num, char, list:<decoder>");
    eprintln!("  --max-depth=<n>     Application depth limit, or 'none' (default: 20000)");
    eprintln!("  -q, --quiet         Do not print values decoded by the program");
}

fn print_usage() {
    println!("Lam - Church-encoded lambda calculus interpreter");
    println!();
    println!("Usage: lam <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>       Run a program");
    println!("  eval <expr>      Evaluate a single expression after the prelude");
    println!("  parse <file>     Show the syntax tree of each statement");
    println!("  help             Show this help message");
    println!("  version          Show version information");
    println!();
    println!("Environment:");
    println!("  RUST_LOG         Enable interpreter tracing (e.g. RUST_LOG=lam_eval=trace)");
    println!("  LAM_LOG_TREE     Render tracing output as an indented tree");
}
