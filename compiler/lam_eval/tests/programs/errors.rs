use super::common::{quiet, run_err};
use lam_eval::{EvalErrorKind, InterpreterBuilder};
use lam_parse::ParseErrorKind;

#[test]
fn empty_program_is_malformed() {
    for program in ["", "\n\n", "   \n\t\n"] {
        let err = run_err(program);
        assert!(err.is_malformed_syntax(), "{program:?}");
        assert_eq!(err.line, None);
    }
}

#[test]
fn error_carries_line_and_statement() {
    let err = run_err("ID = x -> x\n\n  ID Q  ");
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundIdentifier {
            name: "Q".to_string()
        }
    );
    assert_eq!(err.line, Some(3));
    assert_eq!(err.statement.as_deref(), Some("ID Q"));
    assert_eq!(err.to_string(), "line 3: unbound identifier: Q");
}

#[test]
fn syntax_error_stops_the_program() {
    let err = run_err("ID = x -> x\nID (ID\nQ");
    assert_eq!(err.line, Some(2));
    let EvalErrorKind::MalformedSyntax(parse_err) = &err.kind else {
        panic!("expected malformed syntax, got {:?}", err.kind);
    };
    assert_eq!(parse_err.kind, ParseErrorKind::UnbalancedParens);
}

#[test]
fn invalid_assignment_target() {
    let err = run_err("f x = x");
    let EvalErrorKind::MalformedSyntax(parse_err) = &err.kind else {
        panic!("expected malformed syntax, got {:?}", err.kind);
    };
    assert_eq!(parse_err.kind, ParseErrorKind::InvalidAssignmentTarget);
    assert_eq!(err.line, Some(1));
}

#[test]
fn malformed_quote_reports_the_applying_line() {
    let err = run_err("Q = `q ID (\nQ TRUE");
    assert!(err.is_malformed_syntax());
    assert_eq!(err.line, Some(2));
}

#[test]
fn runaway_recursion_exhausts_the_stack() {
    let mut interp = InterpreterBuilder::new()
        .trace_sink(lam_eval::silent_sink())
        .max_depth(Some(1_000))
        .build();
    let err = interp.run("OMEGA = λx->x x\nOMEGA OMEGA").unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::StackExhaustion { depth: 1_000 });
    assert_eq!(err.line, Some(2));
}

#[test]
fn runaway_recursion_through_quotes() {
    let err = run_err("LOOP = λx->(`again LOOP x) x\nLOOP TRUE");
    assert!(matches!(err.kind, EvalErrorKind::StackExhaustion { .. }));
}

#[test]
fn interpreter_is_reusable_after_an_error() {
    let mut interp = quiet();
    assert!(interp.run("OOPS").is_err());
    assert!(interp.run("TRUE").is_ok());
}
