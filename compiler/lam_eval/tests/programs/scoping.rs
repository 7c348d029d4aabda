use super::common::{decoded, num, quiet, run_err};
use lam_eval::{evaluate, Decoder, Environment, EvalErrorKind, Value};
use lam_ir::{Name, Node};

#[test]
fn rebinding_does_not_affect_earlier_closures() {
    let program = "\
x = ZERO
GETX = λy->x
x = ONE
GETX ZERO";
    assert_eq!(num(program), 0);
    assert_eq!(num("x = ZERO\nGETX = λy->x\nx = ONE\nx"), 1);
}

#[test]
fn later_assignments_shadow_earlier_ones() {
    assert_eq!(num("N = ONE\nN = THREE\nN"), 3);
}

#[test]
fn parameter_shadows_global() {
    assert_eq!(num("x = THREE\nF = λx->x\nF ONE"), 1);
}

#[test]
fn right_side_sees_previous_binding_of_same_name() {
    assert_eq!(num("x = ONE\nx = SUCC x\nx"), 2);
}

#[test]
fn self_reference_needs_a_previous_binding() {
    let err = run_err("X = X");
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundIdentifier {
            name: "X".to_string()
        }
    );
}

#[test]
fn quote_sees_definitions_made_before_it_is_applied() {
    let program = "Q = `_ LATER\nLATER = TRUE\nQ Q";
    assert_eq!(decoded(program, &Decoder::Bool), Value::Bool(true));
}

#[test]
fn quote_guarded_mutual_recursion() {
    let definitions = "\
EVEN = λn->(ISZERO n (`t TRUE) (`f ODD (PRED n))) n
ODD = λn->(ISZERO n (`t FALSE) (`f EVEN (PRED n))) n
";
    assert_eq!(
        decoded(&format!("{definitions}EVEN TWO"), &Decoder::Bool),
        Value::Bool(true)
    );
    assert_eq!(
        decoded(&format!("{definitions}EVEN THREE"), &Decoder::Bool),
        Value::Bool(false)
    );
    assert_eq!(
        decoded(&format!("{definitions}ODD THREE"), &Decoder::Bool),
        Value::Bool(true)
    );
}

#[test]
fn quote_prefers_its_captured_bindings() {
    let program = "\
x = TRUE
Q = `_ x
x = FALSE
Q Q";
    assert_eq!(decoded(program, &Decoder::Bool), Value::Bool(true));
}

#[test]
fn closures_resolve_in_their_captured_chain() {
    let err = run_err("F = λx->LATER\nLATER = TRUE\nF F");
    assert_eq!(err.line, Some(3));
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundIdentifier {
            name: "LATER".to_string()
        }
    );
}

#[test]
fn nested_assignment_binds_for_later_statements() {
    let program = "ID = x -> x\nID (Y = TRUE)\nY";
    assert_eq!(decoded(program, &Decoder::Bool), Value::Bool(true));
    assert_eq!(num("ID (N = THREE)\nN"), 3);
}

#[test]
fn assignment_inside_closure_body_binds_nothing() {
    let err = run_err("SET = λx->(Y = x)\nSET TRUE\nY");
    assert_eq!(err.line, Some(3));
    assert!(matches!(err.kind, EvalErrorKind::UnboundIdentifier { .. }));
}

#[test]
fn run_in_uses_the_given_base() {
    let base = Environment::new().bind(Name::new("HOST"), Value::Number(7));
    let evaluation = quiet().run_in("ID = x -> x\nID HOST", &base).unwrap();
    assert_eq!(evaluation.value, Value::Number(7));
    // The prelude is still there; the builtins are not.
    assert!(evaluation.env.contains("PAIR"));
    assert!(!evaluation.env.contains("NUM"));
}

#[test]
fn prelude_environment() {
    let env = quiet().prelude().unwrap();
    for name in ["PAIR", "TRUE", "FALSE", "FST", "SND", "NIL", "KILL", "NULL", ",", "NUM"] {
        assert!(env.contains(name), "{name}");
    }
}

#[test]
fn evaluate_unbound_in_empty_environment() {
    let err = evaluate(&Node::identifier("Q"), &Environment::new()).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundIdentifier {
            name: "Q".to_string()
        }
    );
}
