use std::rc::Rc;

use maldoc_vba_runtime::{
    eval_arg, eval_args, BinOp, Context, Environment, Expr, InMemoryMetadata, InMemoryWorkbook,
    Procedure, ProcedureKind, Stmt, Value, VbaError,
};
use pretty_assertions::assert_eq;

#[test]
fn unresolvable_text_is_returned_unchanged() {
    let mut ctx = Context::new();
    assert_eq!(eval_arg("a.b.c", &mut ctx, false).unwrap(), Value::from("a.b.c"));
    assert_eq!(eval_arg("123 abc", &mut ctx, true).unwrap(), Value::from("123 abc"));
}

#[test]
fn identifier_shaped_misses_are_uninitialized_variables_on_request() {
    let mut ctx = Context::new();
    assert_eq!(eval_arg("undefinedVar", &mut ctx, true).unwrap(), Value::Null);
    assert_eq!(
        eval_arg("undefinedVar", &mut ctx, false).unwrap(),
        Value::from("undefinedVar")
    );
}

#[test]
fn non_text_values_pass_through() {
    let mut ctx = Context::new();
    assert_eq!(eval_arg(Value::Int(7), &mut ctx, true).unwrap(), Value::Int(7));
    assert_eq!(eval_arg(Value::Null, &mut ctx, true).unwrap(), Value::Null);
    assert_eq!(
        eval_arg(Value::Boolean(true), &mut ctx, false).unwrap(),
        Value::Boolean(true)
    );
}

#[test]
fn variables_resolve_before_anything_else() {
    let mut ctx = Context::new();
    ctx.set("payload", "calc.exe");
    assert_eq!(eval_arg("PAYLOAD", &mut ctx, false).unwrap(), Value::from("calc.exe"));
    assert_eq!(eval_arg("vbKeyReturn", &mut ctx, false).unwrap(), Value::Int(13));
}

#[test]
fn document_variables_resolve_through_the_accessor_forms() {
    let mut ctx = Environment::new()
        .with_doc_var("X", "payload")
        .with_doc_var("Company", "ACME")
        .with_doc_var("Tag", "custom")
        .into_context();

    assert_eq!(
        eval_arg("ActiveDocument.Variables('X').Value", &mut ctx, false).unwrap(),
        Value::from("payload")
    );
    assert_eq!(
        eval_arg("ThisDocument.BuiltInDocumentProperties(\"Company\")", &mut ctx, false).unwrap(),
        Value::from("ACME")
    );
    assert_eq!(
        eval_arg("ActiveDocument.CustomDocumentProperties('tag')", &mut ctx, false).unwrap(),
        Value::from("custom")
    );
}

#[test]
fn member_access_nodes_resolve_through_their_text() {
    let mut ctx = Environment::new()
        .with_doc_var("X", "payload")
        .into_context();

    let expr = Expr::member(
        Expr::ident("ActiveDocument"),
        vec![
            Expr::call("Variables", vec![Expr::literal("X")]),
            Expr::ident("Value"),
        ],
    );
    assert_eq!(expr.to_string(), "ActiveDocument.Variables(\"X\").Value");
    assert_eq!(eval_arg(&expr, &mut ctx, false).unwrap(), Value::from("payload"));
}

#[test]
fn node_typed_value_decodes_the_sibling_text() {
    let mut ctx = Context::new();
    ctx.set("foo.text", "aGVsbG8=");
    ctx.set("bar.text", "abc");

    assert_eq!(
        eval_arg("foo.nodeTypedValue", &mut ctx, false).unwrap(),
        Value::from("hello")
    );
    // Undecodable text comes back raw.
    assert_eq!(
        eval_arg("bar.nodeTypedValue", &mut ctx, false).unwrap(),
        Value::from("abc")
    );
}

#[test]
fn node_typed_value_miss_ends_the_chain() {
    let mut ctx = Context::new();
    ctx.set_doc_var("*", "wildcard");

    // The doc var wildcard would match any dotted name; it must not be reached.
    assert_eq!(
        eval_arg("missing.nodeTypedValue", &mut ctx, false).unwrap(),
        Value::from("missing.nodeTypedValue")
    );
    assert_eq!(
        eval_arg("other.name", &mut ctx, false).unwrap(),
        Value::from("wildcard")
    );
}

#[test]
fn selected_item_reads_the_rapt_value() {
    let mut ctx = Context::new();
    ctx.set("list.rapt.value", "choice");
    assert_eq!(
        eval_arg("List.SelectedItem", &mut ctx, false).unwrap(),
        Value::from("choice")
    );
}

#[test]
fn sheet_cells_are_read_from_the_workbook() {
    let mut wb = InMemoryWorkbook::new();
    wb.add_sheet("Data");
    wb.set_value_a1("Data", "B2", "cell text").unwrap();
    wb.set_value_a1("Data", "C3", 42).unwrap();
    let mut ctx = Environment::new().with_workbook(Rc::new(wb)).into_context();

    assert_eq!(
        eval_arg(r#"ThisWorkbook.Sheets("Data").Range("B2").Value"#, &mut ctx, false).unwrap(),
        Value::from("cell text")
    );
    assert_eq!(
        eval_arg("ThisWorkbook.Sheets('data').Range('C3')", &mut ctx, false).unwrap(),
        Value::from("42")
    );
    // An empty cell reads as the empty string.
    assert_eq!(
        eval_arg(r#"ThisWorkbook.Sheets("Data").Range("Z9")"#, &mut ctx, false).unwrap(),
        Value::from("")
    );
}

#[test]
fn sheet_reads_without_a_workbook_fall_through() {
    let mut ctx = Context::new();
    let text = r#"ThisWorkbook.Sheets("Data").Range("B2").Value"#;
    assert_eq!(eval_arg(text, &mut ctx, false).unwrap(), Value::from(text));
}

fn shape_text(shape: Expr) -> Expr {
    Expr::member(
        shape,
        vec![
            Expr::ident("TextFrame"),
            Expr::ident("TextRange"),
            Expr::ident("Text"),
        ],
    )
}

#[test]
fn shape_text_retries_with_the_first_index() {
    let mut ctx = Environment::new()
        .with_doc_var("Shapes('1').TextFrame.TextRange.Text", "shape payload")
        .into_context();

    let expr = shape_text(Expr::call("Shapes", vec![Expr::literal("Pay")]));
    assert_eq!(
        eval_arg(&expr, &mut ctx, false).unwrap(),
        Value::from("shape payload")
    );
}

#[test]
fn shape_text_skips_the_active_document_qualifier() {
    let mut ctx = Environment::new()
        .with_doc_var("Shapes(1).TextFrame.TextRange.Text", "first shape")
        .into_context();

    let expr = Expr::member(
        Expr::ident("ActiveDocument"),
        vec![
            Expr::call("Shapes", vec![Expr::literal(1)]),
            Expr::ident("TextFrame"),
            Expr::ident("TextRange"),
            Expr::ident("Text"),
        ],
    );
    assert_eq!(
        eval_arg(&expr, &mut ctx, false).unwrap(),
        Value::from("first shape")
    );
}

#[test]
fn form_controls_are_found_by_wildcard_index() {
    let mut ctx = Context::new();
    ctx.set("textbox*3", "form text");
    assert_eq!(
        eval_arg("TextBox.Text", &mut ctx, false).unwrap(),
        Value::from("form text")
    );
}

#[test]
fn trailing_segment_runs_as_a_function() {
    let mut ctx = Context::new();
    ctx.define_procedure(Procedure::new(
        "GetKey",
        ProcedureKind::Function,
        &[],
        vec![Stmt::Assign {
            target: Expr::ident("GetKey"),
            value: Expr::literal("k3y"),
        }],
    ));

    assert_eq!(
        eval_arg("Module1.GetKey", &mut ctx, false).unwrap(),
        Value::from("k3y")
    );
}

#[test]
fn document_metadata_items() {
    let meta = InMemoryMetadata::new().with_property("Author", "Mallory");
    let mut ctx = Environment::new().with_metadata(Rc::new(meta)).into_context();

    assert_eq!(
        eval_arg("ActiveDocument.Item('Author')", &mut ctx, false).unwrap(),
        Value::from("Mallory")
    );
    assert_eq!(
        eval_arg("ActiveDocument.Item('Title').Value", &mut ctx, false).unwrap(),
        Value::from("")
    );
}

#[test]
fn document_metadata_without_metadata_is_empty() {
    let mut ctx = Context::new();
    assert_eq!(
        eval_arg("ActiveDocument.Item(\"Author\")", &mut ctx, false).unwrap(),
        Value::from("")
    );
}

#[test]
fn expression_nodes_are_evaluated() {
    let mut ctx = Context::new();
    ctx.set("greeting", "hello");
    let expr = Expr::binary(
        BinOp::Concat,
        Expr::ident("greeting"),
        Expr::literal(" world"),
    );
    assert_eq!(eval_arg(&expr, &mut ctx, false).unwrap(), Value::from("hello world"));
}

#[test]
fn eval_args_preserves_order() {
    let mut ctx = Context::new();
    ctx.set("a", 1);
    ctx.set("b", "two");

    let values = eval_args(["b", "a", "c"], &mut ctx, true).unwrap();
    assert_eq!(values, vec![Value::from("two"), Value::Int(1), Value::Null]);
}

#[test]
fn eval_args_only_stops_on_propagated_errors() {
    let mut ctx = Context::new();
    let args = [
        Expr::ident("missing"),
        Expr::member(Expr::ident("a"), vec![Expr::ident("b"), Expr::ident("c")]),
    ];
    assert_eq!(
        eval_args(args.iter(), &mut ctx, false).unwrap(),
        vec![Value::Null, Value::from("a.b.c")]
    );

    let args = [
        Expr::ident("missing"),
        Expr::binary(BinOp::Add, Expr::literal(1), Expr::literal("abc")),
    ];
    assert!(matches!(
        eval_args(args.iter(), &mut ctx, false),
        Err(VbaError::TypeCoercion(_))
    ));
}
