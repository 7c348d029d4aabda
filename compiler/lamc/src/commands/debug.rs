//! `lam parse`: dump the syntax tree of each statement without running it.

use std::fmt::Write as _;

use lam_ir::Node;

use super::read_file;
use crate::input::strip_comments;

pub fn parse_file(path: &str) {
    let source = strip_comments(&read_file(path));
    let mut errors = 0usize;

    println!("Parse result for '{path}':");
    for (index, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let number = index + 1;
        match lam_parse::parse(line) {
            Ok(node) => {
                println!("line {number}: {node}");
                print!("{}", render_tree(&node));
            }
            Err(err) => {
                errors += 1;
                println!("line {number}: error: {err}");
            }
        }
    }

    if errors > 0 {
        eprintln!("{errors} statement(s) failed to parse");
        std::process::exit(1);
    }
}

/// Indented outline of `node`, one form per line.
pub fn render_tree(node: &Node) -> String {
    let mut out = String::new();
    write_tree(&mut out, node, 1);
    out
}

fn write_tree(out: &mut String, node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);
    let kind = node.kind_name();
    match node {
        Node::Identifier(name) => {
            let _ = writeln!(out, "{indent}{kind} {name}");
        }
        Node::Assignment { name, value } => {
            let _ = writeln!(out, "{indent}{kind} {name}");
            write_tree(out, value, depth + 1);
        }
        Node::Lambda { param, body } => {
            let _ = writeln!(out, "{indent}{kind} {param}");
            write_tree(out, body, depth + 1);
        }
        Node::Application { func, arg } => {
            let _ = writeln!(out, "{indent}{kind}");
            write_tree(out, func, depth + 1);
            write_tree(out, arg, depth + 1);
        }
        Node::Quoted(text) => {
            let _ = writeln!(out, "{indent}{kind} {text:?}");
        }
    }
}
