use std::fmt;
use std::rc::Rc;

use chrono::NaiveDateTime;

use crate::ast::{DllImport, Procedure};
use crate::library::LibraryFunction;

/// Opaque handle to something callable.
#[derive(Clone)]
pub enum ObjectRef {
    /// A user-defined `Sub`/`Function` with executable statements.
    Procedure(Rc<Procedure>),
    /// A `Declare` statement aliasing a DLL export.
    DllImport(Rc<DllImport>),
    /// A built-in library function.
    LibraryFunc(&'static dyn LibraryFunction),
}

impl ObjectRef {
    pub fn name(&self) -> &str {
        match self {
            Self::Procedure(p) => &p.name,
            Self::DllImport(d) => &d.alias,
            Self::LibraryFunc(f) => f.name(),
        }
    }

    pub fn is_procedure(&self) -> bool {
        matches!(self, Self::Procedure(_))
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Procedure(p) => write!(f, "Procedure({})", p.name),
            Self::DllImport(d) => write!(f, "DllImport({} -> {})", d.alias, d.true_name),
            Self::LibraryFunc(func) => write!(f, "LibraryFunc({})", func.name()),
        }
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Procedure(a), Self::Procedure(b)) => Rc::ptr_eq(a, b),
            (Self::DllImport(a), Self::DllImport(b)) => Rc::ptr_eq(a, b),
            // Library functions are registered once per name.
            (Self::LibraryFunc(a), Self::LibraryFunc(b)) => a.name().eq_ignore_ascii_case(b.name()),
            _ => false,
        }
    }
}

/// A VBA runtime value.
///
/// `Null` doubles as VBA's "uninitialized": it reads as `""` in string context and `0` in
/// numeric context, and no coercion ever fails on it.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Int(i64),
    Double(f64),
    Str(String),
    Date(NaiveDateTime),
    Object(ObjectRef),
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Boolean(v) => write!(f, "Boolean({v})"),
            Self::Int(v) => write!(f, "Int({v})"),
            Self::Double(v) => write!(f, "Double({v})"),
            Self::Str(v) => write!(f, "Str({v:?})"),
            Self::Date(v) => write!(f, "Date({v})"),
            Self::Object(o) => write!(f, "Object({o:?})"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Double(a), Self::Double(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Boolean(v) => *v,
            Self::Int(v) => *v != 0,
            Self::Double(v) => *v != 0.0,
            Self::Str(v) => !v.is_empty(),
            Self::Date(_) | Self::Object(_) => true,
        }
    }

    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Null => Some(0.0),
            Self::Boolean(v) => Some(if *v { -1.0 } else { 0.0 }),
            Self::Int(v) => Some(*v as f64),
            Self::Double(v) => Some(*v),
            Self::Str(s) => s.trim().parse::<f64>().ok(),
            Self::Date(_) | Self::Object(_) => None,
        }
    }

    /// Canonical string form. `Null` renders as the empty string.
    pub fn to_string_lossy(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Boolean(v) => {
                if *v {
                    "True".to_string()
                } else {
                    "False".to_string()
                }
            }
            Self::Int(v) => v.to_string(),
            Self::Double(v) => {
                let mut s = format!("{v}");
                if s.ends_with(".0") {
                    s.truncate(s.len() - 2);
                }
                s
            }
            Self::Str(v) => v.clone(),
            Self::Date(v) => v.format("%Y-%m-%d %H:%M:%S").to_string(),
            Self::Object(o) => o.name().to_string(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// `true` for values holding a user-defined procedure. Globals holding one are immutable.
    pub fn is_procedure(&self) -> bool {
        self.as_object().is_some_and(ObjectRef::is_procedure)
    }

    /// Build a string from raw bytes, mapping each byte to the char with the same code point.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::Str(latin1_string(bytes))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

/// Lossless byte-to-char mapping (ISO-8859-1 style) used for binary payloads held in strings.
pub fn latin1_string(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Inverse of [`latin1_string`]. Chars above `U+00FF` are emitted as UTF-8.
pub fn string_bytes(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for ch in s.chars() {
        match u8::try_from(u32::from(ch)) {
            Ok(b) => out.push(b),
            Err(_) => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            }
        }
    }
    out
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<ObjectRef> for Value {
    fn from(value: ObjectRef) -> Self {
        Self::Object(value)
    }
}
