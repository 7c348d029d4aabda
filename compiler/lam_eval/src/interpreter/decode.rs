//! Builtin application and decoding.

use super::Interpreter;
use crate::errors::{self, EvalError, EvalResult};
use crate::prelude::{FST, NULL, SND};
use crate::{Builtin, Decoder, Environment, TraceEntry, Value};

impl Interpreter {
    pub(super) fn apply_builtin(
        &mut self,
        builtin: &Builtin,
        arg: Value,
        env: &Environment,
    ) -> EvalResult {
        match builtin {
            Builtin::Succ => match arg {
                Value::Number(n) => Ok(Value::Number(n.saturating_add(1))),
                other => Err(errors::decode_mismatch("a number", &other)),
            },
            Builtin::ListOf => match arg {
                Value::Builtin(Builtin::Decode(element)) => {
                    Ok(Value::Builtin(Builtin::Decode(Decoder::list_of(element))))
                }
                other => Err(errors::decode_mismatch("a decoder", &other)),
            },
            Builtin::Decode(decoder) => {
                let value = self.decode(&arg, decoder, env)?;
                self.trace.record(TraceEntry::new(self.line, &value));
                Ok(value)
            }
        }
    }

    /// Read a Church encoding back into a host value.
    ///
    /// `env` must bind the prelude's `NULL`, `FST` and `SND` when decoding
    /// lists. Nothing is reported to the trace sink.
    pub fn decode(&mut self, value: &Value, decoder: &Decoder, env: &Environment) -> EvalResult {
        if !value.is_applicable() {
            return Err(errors::decode_mismatch(decoder.expected(), value));
        }
        match decoder {
            Decoder::Bool => self.decode_bool(value, env).map(Value::Bool),
            Decoder::Num => self.decode_num(value, env).map(Value::Number),
            Decoder::Char => {
                let code = self.decode_num(value, env)?;
                u32::try_from(code)
                    .ok()
                    .and_then(char::from_u32)
                    .map(Value::Char)
                    .ok_or_else(|| errors::decode_mismatch(decoder.expected(), &Value::Number(code)))
            }
            Decoder::List(element) => self.decode_list(value, element, env).map(Value::List),
        }
    }

    fn decode_bool(&mut self, value: &Value, env: &Environment) -> Result<bool, EvalError> {
        let picked = self.apply(value, Value::Bool(true), env)?;
        let picked = self.apply(&picked, Value::Bool(false), env)?;
        picked
            .as_bool()
            .ok_or_else(|| errors::decode_mismatch(Decoder::Bool.expected(), &picked))
    }

    fn decode_num(&mut self, value: &Value, env: &Environment) -> Result<u64, EvalError> {
        let counted = self.apply(value, Value::Builtin(Builtin::Succ), env)?;
        let counted = self.apply(&counted, Value::Number(0), env)?;
        counted
            .as_number()
            .ok_or_else(|| errors::decode_mismatch(Decoder::Num.expected(), &counted))
    }

    /// Walk the list with `NULL`/`FST`/`SND`, decoding each head.
    fn decode_list(
        &mut self,
        value: &Value,
        element: &Decoder,
        env: &Environment,
    ) -> Result<Vec<Value>, EvalError> {
        let lookup = |name: &str| env.lookup(name).ok_or_else(|| errors::unbound_identifier(name));
        let (null, fst, snd) = (lookup(NULL)?, lookup(FST)?, lookup(SND)?);

        let mut items = Vec::new();
        let mut rest = value.clone();
        loop {
            if !rest.is_applicable() {
                return Err(errors::decode_mismatch(
                    Decoder::list_of(element.clone()).expected(),
                    &rest,
                ));
            }
            let is_empty = self.apply(&null, rest.clone(), env)?;
            if self.decode_bool(&is_empty, env)? {
                return Ok(items);
            }
            let head = self.apply(&fst, rest.clone(), env)?;
            items.push(self.decode(&head, element, env)?);
            rest = self.apply(&snd, rest, env)?;
        }
    }
}
