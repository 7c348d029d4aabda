use super::common::{decoded, quiet, run, trace_of, NUMERALS};
use lam_eval::{Decoder, EvalErrorKind, Value};
use pretty_assertions::assert_eq;

const LETTERS: &str = "\
NINE = MUL THREE THREE
EIGHT = MUL TWO (MUL TWO TWO)
H = MUL EIGHT NINE
I = SUCC H
";

#[test]
fn trace_lines_follow_the_source() {
    let program = "\
ZERO = λf->λx->x
SUCC = λn->λf->λx->f (n f x)

NUM (SUCC (SUCC ZERO))
BOOL TRUE
LIST NUM (PAIR ZERO (PAIR (SUCC ZERO) NIL))";
    assert_eq!(
        trace_of(program),
        "line 4: 2\nline 5: true\nline 6: [0, 1]\n"
    );
}

#[test]
fn decoders_return_host_values() {
    assert_eq!(run("NUM THREE").value, Value::Number(3));
    assert_eq!(run("BOOL FALSE").value, Value::Bool(false));
    assert_eq!(
        run(&format!("{LETTERS}LIST CHAR (PAIR H (PAIR I NIL))")).value,
        Value::List(vec![Value::Char('H'), Value::Char('I')])
    );
}

#[test]
fn char_list_trace_quotes_elements() {
    let program = format!("{NUMERALS}{LETTERS}LIST CHAR (PAIR H (PAIR I NIL))");
    let last_line = program.lines().count();
    assert_eq!(trace_of(&program), format!("line {last_line}: ['H', 'I']\n"));
}

#[test]
fn nested_lists() {
    let value = run("LIST (LIST BOOL) (PAIR (PAIR TRUE NIL) (PAIR NIL NIL))").value;
    assert_eq!(
        value,
        Value::List(vec![Value::List(vec![Value::Bool(true)]), Value::List(vec![])])
    );
    assert_eq!(value.to_string(), "[[true], []]");
}

#[test]
fn empty_list() {
    assert_eq!(run("LIST NUM NIL").value, Value::List(vec![]));
}

#[test]
fn decoder_results_are_not_functions() {
    let err = quiet()
        .run(&format!("{NUMERALS}NUM ZERO ZERO"))
        .unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::NotApplicable {
            type_name: "number".to_string()
        }
    );
}

#[test]
fn numeral_decoder_rejects_booleans() {
    let err = quiet().run("NUM TRUE").unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::DecodeMismatch { .. }));
}

#[test]
fn list_requires_a_decoder() {
    let err = quiet().run("LIST TRUE").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::DecodeMismatch {
            expected: "a decoder".to_string(),
            found: "closure".to_string()
        }
    );
}

#[test]
fn list_decoder_needs_prelude_names() {
    let evaluation = run("PAIR ONE NIL");
    let err = quiet()
        .decode(
            &evaluation.value,
            &Decoder::list_of(Decoder::Num),
            &lam_eval::Environment::new(),
        )
        .unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::UnboundIdentifier { .. }));
}

#[test]
fn host_decode_of_final_value() {
    let list = decoded(
        "PAIR ONE (PAIR TWO (PAIR THREE NIL))",
        &Decoder::list_of(Decoder::Num),
    );
    assert_eq!(list.to_string(), "[1, 2, 3]");
}

#[test]
fn list_decoder_value_renders_as_program_text() {
    assert_eq!(run("LIST (LIST CHAR)").value.to_string(), "<builtin LIST (LIST CHAR)>");
}
