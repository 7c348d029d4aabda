use super::common::{decoded, num, run};
use lam_eval::{interpret, Decoder, Value};

#[test]
fn identity_applied_to_itself() {
    let evaluation = run("ID = x -> x\nID ID");
    assert_eq!(Some(evaluation.value), evaluation.env.lookup("ID"));
}

#[test]
fn pair_projections() {
    let evaluation = run("A = λa->a\nB = λb->b\nP = PAIR A B\nFST P");
    assert_eq!(Some(evaluation.value), evaluation.env.lookup("A"));

    let evaluation = run("A = λa->a\nB = λb->b\nSND (PAIR A B)");
    assert_eq!(Some(evaluation.value), evaluation.env.lookup("B"));
}

#[test]
fn currying_selects_first_argument() {
    let evaluation = run("A = λa->a\nB = λb->b\n(x -> y -> x) A B");
    assert_eq!(Some(evaluation.value), evaluation.env.lookup("A"));
}

#[test]
fn booleans() {
    assert_eq!(decoded("TRUE", &Decoder::Bool), Value::Bool(true));
    assert_eq!(decoded("FALSE", &Decoder::Bool), Value::Bool(false));
    assert_eq!(decoded("ISZERO ZERO", &Decoder::Bool), Value::Bool(true));
    assert_eq!(decoded("ISZERO TWO", &Decoder::Bool), Value::Bool(false));
}

#[test]
fn arithmetic() {
    assert_eq!(num("ZERO"), 0);
    assert_eq!(num("THREE"), 3);
    assert_eq!(num("ADD TWO THREE"), 5);
    assert_eq!(num("MUL THREE THREE"), 9);
    assert_eq!(num("PRED THREE"), 2);
    assert_eq!(num("PRED ZERO"), 0);
}

#[test]
fn large_numeral_within_default_depth() {
    let program = "\
TEN = ADD (MUL THREE THREE) ONE
HUNDRED = MUL TEN TEN
MUL TEN HUNDRED";
    assert_eq!(num(program), 1000);
}

#[test]
fn recursion_guarded_by_quotes_terminates() {
    let program = "\
FACT = λn->(ISZERO n (`base ONE) (`step MUL n (FACT (PRED n)))) n
FACT THREE";
    assert_eq!(num(program), 6);
}

#[test]
fn recursive_list_length() {
    let program = "\
LEN = λl->(NULL l (`done ZERO) (`more SUCC (LEN (SND l)))) l
LEN (PAIR TRUE (PAIR FALSE (PAIR TRUE NIL)))";
    assert_eq!(num(program), 3);
}

#[test]
fn null_distinguishes_nil_from_pairs() {
    assert_eq!(decoded("NULL NIL", &Decoder::Bool), Value::Bool(true));
    assert_eq!(decoded("NULL (PAIR TRUE NIL)", &Decoder::Bool), Value::Bool(false));
}

#[test]
fn comma_helper_applies_to_nil() {
    // `, f` is `f NIL`.
    assert_eq!(decoded(", NULL", &Decoder::Bool), Value::Bool(true));
}

#[test]
fn interpret_returns_last_value() {
    let value = interpret("NUM (f -> x -> f (f x))").unwrap();
    assert_eq!(value, Value::Number(2));
}
