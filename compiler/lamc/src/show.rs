//! Presenting a program's final value.
//!
//! `--show` names a decoder: `bool`, `num`, `char`, or `list:<element>`,
//! nesting as deep as needed (`list:list:char`).

use lam_eval::{Decoder, Environment, EvalError, Interpreter, Value};

const LIST_PREFIX: &str = "list:";

/// Parse a `--show` argument.
pub fn parse_decoder(spec: &str) -> Result<Decoder, String> {
    let lower = spec.trim().to_ascii_lowercase();
    parse_lowercase(&lower).ok_or_else(|| {
        format!("unknown decoder '{spec}' (expected bool, num, char or list:<decoder>)")
    })
}

fn parse_lowercase(spec: &str) -> Option<Decoder> {
    match spec {
        "bool" => Some(Decoder::Bool),
        "num" => Some(Decoder::Num),
        "char" => Some(Decoder::Char),
        _ => {
            let element = spec.strip_prefix(LIST_PREFIX)?;
            parse_lowercase(element).map(Decoder::list_of)
        }
    }
}

/// Render `value`, decoding it first when a decoder was requested.
pub fn render(
    interp: &mut Interpreter,
    value: &Value,
    decoder: Option<&Decoder>,
    env: &Environment,
) -> Result<String, EvalError> {
    match decoder {
        Some(decoder) => Ok(interp.decode(value, decoder, env)?.to_string()),
        None => Ok(value.to_string()),
    }
}
