//! Loose conversions between string, integer and uninitialized values.

use crate::runtime::VbaError;
use crate::value::Value;

/// `Null` is `""`; everything else uses its canonical string form.
pub fn coerce_to_str(value: &Value) -> String {
    value.to_string_lossy()
}

/// `Null` and empty text are `0`. Non-numeric text is a [`VbaError::TypeCoercion`].
pub fn coerce_to_int(value: &Value) -> Result<i64, VbaError> {
    match value {
        Value::Null => Ok(0),
        Value::Boolean(b) => Ok(if *b { -1 } else { 0 }),
        Value::Int(n) => Ok(*n),
        Value::Double(d) => Ok(d.trunc() as i64),
        Value::Str(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            trimmed
                .parse::<i64>()
                .map_err(|_| VbaError::TypeCoercion(format!("cannot convert {s:?} to an integer")))
        }
        Value::Date(_) | Value::Object(_) => Err(VbaError::TypeCoercion(format!(
            "cannot convert {value:?} to an integer"
        ))),
    }
}

pub fn coerce_args_to_str(args: &[Value]) -> Vec<Value> {
    args.iter().map(|v| Value::Str(coerce_to_str(v))).collect()
}

pub fn coerce_args_to_int(args: &[Value]) -> Result<Vec<Value>, VbaError> {
    args.iter()
        .map(|v| coerce_to_int(v).map(Value::Int))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgKind {
    Str,
    Int,
}

/// Coerce a whole argument list to the type of its first non-null element.
///
/// Integers and booleans count as numeric. A list holding any other kind of value (doubles,
/// dates, objects) is returned unchanged, and an all-null list is treated as numeric.
pub fn coerce_args(args: Vec<Value>) -> Result<Vec<Value>, VbaError> {
    if args.is_empty() {
        return Ok(args);
    }

    let mut first = None;
    for arg in &args {
        let kind = match arg {
            Value::Null => continue,
            Value::Str(_) => ArgKind::Str,
            Value::Int(_) | Value::Boolean(_) => ArgKind::Int,
            Value::Double(_) | Value::Date(_) | Value::Object(_) => return Ok(args),
        };
        first.get_or_insert(kind);
    }

    match first.unwrap_or(ArgKind::Int) {
        ArgKind::Str => Ok(coerce_args_to_str(&args)),
        ArgKind::Int => coerce_args_to_int(&args),
    }
}

/// Integer conversion that truncates the textual form at its first `.`.
pub fn int_convert(value: &Value) -> Result<i64, VbaError> {
    match value {
        Value::Null => Ok(0),
        Value::Int(n) => Ok(*n),
        Value::Boolean(_) => coerce_to_int(value),
        other => {
            let text = other.to_string_lossy();
            let head = match text.find('.') {
                Some(idx) => &text[..idx],
                None => text.as_str(),
            };
            coerce_to_int(&Value::Str(head.to_string()))
        }
    }
}

pub fn str_convert(value: &Value) -> String {
    coerce_to_str(value)
}
