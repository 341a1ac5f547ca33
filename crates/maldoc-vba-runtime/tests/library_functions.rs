use maldoc_vba_runtime::{Context, Library, Value, VbaError};
use pretty_assertions::assert_eq;

fn call(name: &str, args: &[Value]) -> Result<Value, VbaError> {
    Context::new().call(name, args)
}

fn s(text: &str) -> Value {
    Value::from(text)
}

#[test]
fn character_codes() {
    assert_eq!(call("Chr", &[Value::Int(65)]).unwrap(), s("A"));
    assert_eq!(call("chr", &[s("104")]).unwrap(), s("h"));
    assert!(call("Chr", &[Value::Int(300)]).is_err());

    assert_eq!(call("ChrW", &[Value::Int(8364)]).unwrap(), s("\u{20ac}"));
    assert_eq!(call("ChrW", &[Value::Int(-1)]).unwrap(), s("\u{ffff}"));

    assert_eq!(call("Asc", &[s("A")]).unwrap(), Value::Int(65));
    assert!(call("Asc", &[s("")]).is_err());
}

#[test]
fn lengths_and_slices() {
    assert_eq!(call("Len", &[s("hello")]).unwrap(), Value::Int(5));
    assert_eq!(call("Len", &[Value::Null]).unwrap(), Value::Int(0));

    assert_eq!(call("Left", &[s("hello"), Value::Int(2)]).unwrap(), s("he"));
    assert_eq!(call("Left", &[s("hi"), Value::Int(10)]).unwrap(), s("hi"));
    assert_eq!(call("Right", &[s("hello"), Value::Int(3)]).unwrap(), s("llo"));

    assert_eq!(
        call("Mid", &[s("hello"), Value::Int(2), Value::Int(3)]).unwrap(),
        s("ell")
    );
    assert_eq!(call("Mid", &[s("hello"), Value::Int(2)]).unwrap(), s("ello"));
    assert_eq!(call("Mid", &[s("hello"), Value::Int(9)]).unwrap(), s(""));
    assert!(call("Mid", &[s("hello"), Value::Int(0)]).is_err());
    assert!(call("Left", &[s("hello")]).is_err());
}

#[test]
fn case_and_order() {
    assert_eq!(call("UCase", &[s("MiXeD")]).unwrap(), s("MIXED"));
    assert_eq!(call("LCase", &[s("MiXeD")]).unwrap(), s("mixed"));
    assert_eq!(call("StrReverse", &[s("exe.clac")]).unwrap(), s("calc.exe"));
}

#[test]
fn replace() {
    assert_eq!(
        call("Replace", &[s("aXbXc"), s("X"), s("-")]).unwrap(),
        s("a-b-c")
    );
    assert_eq!(
        call("Replace", &[s("aXbXc"), s("X"), s("-"), Value::Int(3)]).unwrap(),
        s("b-c")
    );
    assert_eq!(call("Replace", &[s("abc"), s(""), s("z")]).unwrap(), s("abc"));
}

#[test]
fn conversions() {
    assert_eq!(call("CStr", &[Value::Int(12)]).unwrap(), s("12"));
    assert!(call("CStr", &[Value::Null]).is_err());

    assert_eq!(call("CInt", &[Value::Double(2.5)]).unwrap(), Value::Int(2));
    assert_eq!(call("CInt", &[Value::Double(3.5)]).unwrap(), Value::Int(4));
    assert_eq!(call("CInt", &[Value::Double(-2.5)]).unwrap(), Value::Int(-2));
    assert_eq!(call("CInt", &[Value::Double(2.6)]).unwrap(), Value::Int(3));
    assert_eq!(call("CLng", &[s("12")]).unwrap(), Value::Int(12));
    assert_eq!(call("CLng", &[Value::Int(40000)]).unwrap(), Value::Int(40000));

    assert!(matches!(
        call("CInt", &[Value::Int(40000)]),
        Err(VbaError::Runtime(_))
    ));
    assert!(matches!(
        call("CInt", &[s("abc")]),
        Err(VbaError::TypeCoercion(_))
    ));
}

#[test]
fn now_is_a_date() {
    assert!(matches!(call("Now", &[]).unwrap(), Value::Date(_)));
}

#[test]
fn library_table() {
    let library = Library::global();
    assert!(library.len() > 900);
    assert!(library.contains("chr"));
    assert!(library.contains("vba.keycodeconstants.vbkeyescape"));
    assert!(library.contains("vba.vbcrlf"));
    assert_eq!(library.get("xlup"), Some(Value::Int(-4162)));
    assert_eq!(library.get("nosuchconstant"), None);
}
