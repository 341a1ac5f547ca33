use std::collections::HashMap;
use std::sync::OnceLock;

use chrono::Local;

use crate::coerce::coerce_to_int;
use crate::constants::{ALIASED_STRINGS, DOUBLES, ENUMS, KEY_CODES, STRINGS};
use crate::runtime::{Context, VbaError};
use crate::value::Value;

/// A built-in function callable from VBA code.
pub trait LibraryFunction: Sync {
    fn name(&self) -> &'static str;
    fn call(&self, ctx: &mut Context, args: &[Value]) -> Result<Value, VbaError>;
}

type NativeFn = fn(&mut Context, &[Value]) -> Result<Value, VbaError>;

struct NativeFunction {
    name: &'static str,
    func: NativeFn,
}

impl LibraryFunction for NativeFunction {
    fn name(&self) -> &'static str {
        self.name
    }

    fn call(&self, ctx: &mut Context, args: &[Value]) -> Result<Value, VbaError> {
        (self.func)(ctx, args)
    }
}

static FUNCTIONS: &[NativeFunction] = &[
    NativeFunction { name: "Chr", func: chr },
    NativeFunction { name: "ChrW", func: chrw },
    NativeFunction { name: "Asc", func: asc },
    NativeFunction { name: "Len", func: len },
    NativeFunction { name: "Left", func: left },
    NativeFunction { name: "Right", func: right },
    NativeFunction { name: "Mid", func: mid },
    NativeFunction { name: "UCase", func: ucase },
    NativeFunction { name: "LCase", func: lcase },
    NativeFunction { name: "StrReverse", func: str_reverse },
    NativeFunction { name: "Replace", func: replace },
    NativeFunction { name: "CStr", func: cstr },
    NativeFunction { name: "CInt", func: cint },
    NativeFunction { name: "CLng", func: clng },
    NativeFunction { name: "Now", func: now },
];

#[derive(Clone, Copy)]
enum Builtin {
    Int(i64),
    Double(f64),
    Str(&'static str),
    Function(&'static dyn LibraryFunction),
}

impl Builtin {
    fn to_value(self) -> Value {
        match self {
            Self::Int(n) => Value::Int(n),
            Self::Double(d) => Value::Double(d),
            Self::Str(s) => Value::Str(s.to_string()),
            Self::Function(f) => Value::Object(crate::value::ObjectRef::LibraryFunc(f)),
        }
    }
}

/// The read-only tier consulted after locals and globals: constants and built-in functions.
pub struct Library {
    entries: HashMap<String, Builtin>,
}

impl Library {
    /// Process-wide table, built on first use and shared by every run.
    pub fn global() -> &'static Library {
        static LIBRARY: OnceLock<Library> = OnceLock::new();
        LIBRARY.get_or_init(Library::build)
    }

    fn build() -> Self {
        let mut entries = HashMap::new();
        let mut insert = |name: &str, value: Builtin| {
            entries.insert(name.to_lowercase(), value);
        };

        for &(name, code) in KEY_CODES {
            for alias in aliases(name) {
                insert(&alias, Builtin::Int(code));
            }
        }
        for &(name, text) in ALIASED_STRINGS {
            for alias in aliases(name) {
                insert(&alias, Builtin::Str(text));
            }
        }
        for &(name, n) in ENUMS {
            insert(name, Builtin::Int(n));
        }
        for &(name, d) in DOUBLES {
            insert(name, Builtin::Double(d));
        }
        for &(name, text) in STRINGS {
            insert(name, Builtin::Str(text));
        }
        for func in FUNCTIONS {
            insert(func.name, Builtin::Function(func));
        }

        Self { entries }
    }

    /// Look up an already-lowercased name.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.entries.get(name).map(|b| b.to_value())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn aliases(name: &str) -> [String; 3] {
    [
        name.to_string(),
        format!("VBA.{name}"),
        format!("VBA.KeyCodeConstants.{name}"),
    ]
}

fn required_arg<'a>(args: &'a [Value], idx: usize, name: &str) -> Result<&'a Value, VbaError> {
    args.get(idx)
        .ok_or_else(|| VbaError::Runtime(format!("{name}: missing argument {}", idx + 1)))
}

fn string_arg(args: &[Value], idx: usize, name: &str) -> Result<String, VbaError> {
    Ok(required_arg(args, idx, name)?.to_string_lossy())
}

fn count_arg(args: &[Value], idx: usize, name: &str) -> Result<usize, VbaError> {
    let n = coerce_to_int(required_arg(args, idx, name)?)?;
    usize::try_from(n)
        .map_err(|_| VbaError::Runtime(format!("{name}: invalid procedure call or argument")))
}

/// Round half to even, the rounding `CInt`/`CLng` use.
fn round_bankers(n: f64) -> i64 {
    let frac = n.fract().abs();
    if (frac - 0.5).abs() < f64::EPSILON {
        let int = n.trunc() as i64;
        if int % 2 == 0 {
            int
        } else if n.is_sign_negative() {
            int - 1
        } else {
            int + 1
        }
    } else {
        n.round() as i64
    }
}

fn chr(_ctx: &mut Context, args: &[Value]) -> Result<Value, VbaError> {
    let code = coerce_to_int(required_arg(args, 0, "Chr")?)?;
    let byte = u8::try_from(code)
        .map_err(|_| VbaError::Runtime(format!("Chr: invalid character code {code}")))?;
    Ok(Value::Str(char::from(byte).to_string()))
}

fn chrw(_ctx: &mut Context, args: &[Value]) -> Result<Value, VbaError> {
    let code = coerce_to_int(required_arg(args, 0, "ChrW")?)?;
    // ChrW accepts negative codes for the upper half of the BMP.
    let code = if (-32768..0).contains(&code) { code + 65536 } else { code };
    u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .map(|c| Value::Str(c.to_string()))
        .ok_or_else(|| VbaError::Runtime(format!("ChrW: invalid character code {code}")))
}

fn asc(_ctx: &mut Context, args: &[Value]) -> Result<Value, VbaError> {
    let s = string_arg(args, 0, "Asc")?;
    let c = s
        .chars()
        .next()
        .ok_or_else(|| VbaError::Runtime("Asc: invalid procedure call or argument".to_string()))?;
    Ok(Value::Int(i64::from(u32::from(c))))
}

fn len(_ctx: &mut Context, args: &[Value]) -> Result<Value, VbaError> {
    let s = string_arg(args, 0, "Len")?;
    Ok(Value::Int(s.chars().count() as i64))
}

fn left(_ctx: &mut Context, args: &[Value]) -> Result<Value, VbaError> {
    let s = string_arg(args, 0, "Left")?;
    let n = count_arg(args, 1, "Left")?;
    Ok(Value::Str(s.chars().take(n).collect()))
}

fn right(_ctx: &mut Context, args: &[Value]) -> Result<Value, VbaError> {
    let s = string_arg(args, 0, "Right")?;
    let n = count_arg(args, 1, "Right")?;
    let len = s.chars().count();
    Ok(Value::Str(s.chars().skip(len.saturating_sub(n)).collect()))
}

fn mid(_ctx: &mut Context, args: &[Value]) -> Result<Value, VbaError> {
    let s = string_arg(args, 0, "Mid")?;
    let start = count_arg(args, 1, "Mid")?;
    if start == 0 {
        return Err(VbaError::Runtime(
            "Mid: invalid procedure call or argument".to_string(),
        ));
    }
    let rest = s.chars().skip(start - 1);
    let out = match args.get(2) {
        None | Some(Value::Null) => rest.collect(),
        Some(_) => rest.take(count_arg(args, 2, "Mid")?).collect(),
    };
    Ok(Value::Str(out))
}

fn ucase(_ctx: &mut Context, args: &[Value]) -> Result<Value, VbaError> {
    Ok(Value::Str(string_arg(args, 0, "UCase")?.to_uppercase()))
}

fn lcase(_ctx: &mut Context, args: &[Value]) -> Result<Value, VbaError> {
    Ok(Value::Str(string_arg(args, 0, "LCase")?.to_lowercase()))
}

fn str_reverse(_ctx: &mut Context, args: &[Value]) -> Result<Value, VbaError> {
    Ok(Value::Str(string_arg(args, 0, "StrReverse")?.chars().rev().collect()))
}

fn replace(_ctx: &mut Context, args: &[Value]) -> Result<Value, VbaError> {
    let expr = string_arg(args, 0, "Replace")?;
    let find = string_arg(args, 1, "Replace")?;
    let repl = string_arg(args, 2, "Replace")?;
    if find.is_empty() {
        return Ok(Value::Str(expr));
    }
    // Optional 1-based start position; VBA drops everything before it.
    let start = match args.get(3) {
        None | Some(Value::Null) => 0,
        Some(_) => count_arg(args, 3, "Replace")?.saturating_sub(1),
    };
    let suffix: String = expr.chars().skip(start).collect();
    Ok(Value::Str(suffix.replace(&find, &repl)))
}

fn cstr(_ctx: &mut Context, args: &[Value]) -> Result<Value, VbaError> {
    let v = required_arg(args, 0, "CStr")?;
    if v.is_null() {
        return Err(VbaError::Runtime("Invalid use of Null".to_string()));
    }
    Ok(Value::Str(v.to_string_lossy()))
}

fn convert_integral(v: &Value, name: &str, min: i64, max: i64) -> Result<Value, VbaError> {
    if v.is_null() {
        return Err(VbaError::Runtime("Invalid use of Null".to_string()));
    }
    let n = v
        .to_f64()
        .ok_or_else(|| VbaError::TypeCoercion(format!("{name}: type mismatch for {v:?}")))?;
    let out = round_bankers(n);
    if !(min..=max).contains(&out) {
        return Err(VbaError::Runtime(format!("{name}: overflow")));
    }
    Ok(Value::Int(out))
}

fn cint(_ctx: &mut Context, args: &[Value]) -> Result<Value, VbaError> {
    let v = required_arg(args, 0, "CInt")?;
    convert_integral(v, "CInt", i64::from(i16::MIN), i64::from(i16::MAX))
}

fn clng(_ctx: &mut Context, args: &[Value]) -> Result<Value, VbaError> {
    let v = required_arg(args, 0, "CLng")?;
    convert_integral(v, "CLng", i64::from(i32::MIN), i64::from(i32::MAX))
}

fn now(_ctx: &mut Context, _args: &[Value]) -> Result<Value, VbaError> {
    Ok(Value::Date(Local::now().naive_local()))
}
