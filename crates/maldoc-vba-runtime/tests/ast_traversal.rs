use std::rc::Rc;

use maldoc_vba_runtime::{
    BinOp, Context, DllImport, EmulationLimits, Environment, Expr, Governor, NodeRef, Procedure,
    ProcedureKind, RecordingReporter, ReportedAction, Stmt, UnOp, Value, VbaError, VbaNode,
    VbaType, Visitor,
};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct Labels(Vec<String>);

impl Visitor for Labels {
    fn visit(&mut self, node: NodeRef<'_>) {
        let label = match node {
            NodeRef::Procedure(p) => format!("proc {}", p.name),
            NodeRef::Stmt(Stmt::Assign { .. }) => "assign".to_string(),
            NodeRef::Stmt(Stmt::Call(_)) => "call".to_string(),
            NodeRef::Stmt(_) => "stmt".to_string(),
            NodeRef::Expr(e) => e.to_string(),
        };
        self.0.push(label);
    }
}

fn assign(target: &str, value: Expr) -> Stmt {
    Stmt::Assign {
        target: Expr::ident(target),
        value,
    }
}

#[test]
fn accept_walks_in_pre_order() {
    let main = Procedure::new(
        "Main",
        ProcedureKind::Sub,
        &[],
        vec![
            assign(
                "x",
                Expr::binary(BinOp::Add, Expr::literal(1), Expr::literal(2)),
            ),
            Stmt::Call(Expr::call("Foo", vec![Expr::ident("y")])),
        ],
    );
    let governor = Rc::new(Governor::new(EmulationLimits::default()));
    let mut labels = Labels::default();
    main.accept(&mut labels, &governor).unwrap();

    assert_eq!(
        labels.0,
        vec![
            "proc Main", "assign", "x", "1 + 2", "1", "2", "call", "Foo(y)", "y",
        ]
    );
    assert_eq!(governor.depth(), 0);
}

#[test]
fn accept_on_deep_trees_hits_the_recursion_limit() {
    let mut expr = Expr::ident("x");
    for _ in 0..200 {
        expr = Expr::unary(UnOp::Not, expr);
    }
    let governor = Rc::new(Governor::with_deadline(100, None));
    let mut labels = Labels::default();

    let err = expr.accept(&mut labels, &governor).unwrap_err();
    assert!(matches!(err, VbaError::RecursionLimitExceeded));
    assert_eq!(labels.0.len(), 75);
    assert_eq!(governor.depth(), 0);
}

#[test]
fn children_are_direct_and_ordered() {
    let expr = Expr::member(
        Expr::ident("a"),
        vec![Expr::ident("b"), Expr::call("c", vec![Expr::literal(1)])],
    );
    let children: Vec<String> = expr
        .children()
        .into_iter()
        .map(|child| match child {
            NodeRef::Expr(e) => e.to_string(),
            other => format!("{other:?}"),
        })
        .collect();
    assert_eq!(children, vec!["a", "b", "c(1)"]);
    assert!(Expr::literal(1).children().is_empty());
}

#[test]
fn expressions_render_as_vba_source() {
    assert_eq!(Expr::literal("say \"hi\"").to_string(), "\"say \"\"hi\"\"\"");
    assert_eq!(Expr::literal(Value::Null).to_string(), "Null");
    assert_eq!(Expr::literal(true).to_string(), "True");
    assert_eq!(Expr::unary(UnOp::Not, Expr::ident("x")).to_string(), "Not x");
    assert_eq!(Expr::unary(UnOp::Neg, Expr::literal(5)).to_string(), "-5");
    assert_eq!(
        Expr::binary(BinOp::Concat, Expr::ident("a"), Expr::literal("b")).to_string(),
        "a & \"b\""
    );
    assert_eq!(
        Expr::call("Mid", vec![Expr::ident("s"), Expr::literal(2), Expr::literal(3)]).to_string(),
        "Mid(s, 2, 3)"
    );
}

#[test]
fn functions_return_their_own_name() {
    let mut ctx = Context::new();
    ctx.define_procedure(Procedure::new(
        "Add2",
        ProcedureKind::Function,
        &["a", "b"],
        vec![assign(
            "Add2",
            Expr::binary(BinOp::Add, Expr::ident("a"), Expr::ident("b")),
        )],
    ));

    assert_eq!(
        ctx.call("add2", &[Value::Int(2), Value::Int(3)]).unwrap(),
        Value::Int(5)
    );
    let call = Expr::call("Add2", vec![Expr::literal(10), Expr::literal(-4)]);
    assert_eq!(call.eval(&mut ctx).unwrap(), Value::Int(6));
    // Parameters stay in the callee's scope.
    assert!(!ctx.contains("a", false));
}

#[test]
fn subs_return_null_and_write_shared_globals() {
    let mut ctx = Context::new();
    ctx.set_global("counter", 1);
    let bump = Procedure::new(
        "Bump",
        ProcedureKind::Sub,
        &[],
        vec![assign(
            "counter",
            Expr::binary(BinOp::Add, Expr::ident("counter"), Expr::literal(1)),
        )],
    );
    ctx.define_procedure(Rc::clone(&bump));

    assert_eq!(bump.eval(&mut ctx).unwrap(), Value::Null);
    assert_eq!(ctx.call("Bump", &[]).unwrap(), Value::Null);
    assert_eq!(ctx.get("counter").unwrap(), Value::Int(3));
}

#[test]
fn exit_function_stops_the_body() {
    let mut ctx = Context::new();
    ctx.define_procedure(Procedure::new(
        "Early",
        ProcedureKind::Function,
        &[],
        vec![
            assign("Early", Expr::literal(1)),
            Stmt::ExitFunction,
            assign("Early", Expr::literal(2)),
        ],
    ));

    assert_eq!(ctx.call("Early", &[]).unwrap(), Value::Int(1));
    assert!(!ctx.exit_func());
}

#[test]
fn library_calls_compose() {
    let mut ctx = Context::new();
    let expr = Expr::binary(
        BinOp::Concat,
        Expr::call("StrReverse", vec![Expr::literal("olleh")]),
        Expr::call("Chr", vec![Expr::literal(33)]),
    );
    assert_eq!(expr.eval(&mut ctx).unwrap(), Value::from("hello!"));
}

#[test]
fn calls_to_plain_values_and_unknown_names() {
    let mut ctx = Context::new();
    ctx.set("arr", "element");
    assert_eq!(
        Expr::call("arr", vec![Expr::literal(0)]).eval(&mut ctx).unwrap(),
        Value::from("element")
    );
    assert_eq!(
        Expr::call("NoSuchThing", vec![]).eval(&mut ctx).unwrap(),
        Value::Null
    );
    assert!(matches!(
        ctx.call("NoSuchThing", &[]),
        Err(VbaError::NameNotFound(_))
    ));
}

#[test]
fn with_blocks_assign_prefixed_names() {
    let mut ctx = Context::new();
    let with = Stmt::With {
        object: Expr::ident("Doc"),
        body: vec![assign("Title", Expr::literal("x"))],
    };
    with.eval(&mut ctx).unwrap();

    assert_eq!(ctx.with_prefix(), "");
    assert_eq!(ctx.get("doc.title").unwrap(), Value::from("x"));
    assert_eq!(ctx.get("title").unwrap(), Value::from("x"));
}

#[test]
fn dim_binds_the_type_default() {
    let mut ctx = Context::new();
    for (name, ty) in [
        ("s", VbaType::String),
        ("n", VbaType::Integer),
        ("d", VbaType::Double),
        ("b", VbaType::Boolean),
        ("v", VbaType::Variant),
    ] {
        Stmt::Dim {
            name: name.to_string(),
            ty,
        }
        .eval(&mut ctx)
        .unwrap();
        assert_eq!(ctx.get_type(name), Some(ty));
    }

    assert_eq!(ctx.get("s").unwrap(), Value::from(""));
    assert_eq!(ctx.get("n").unwrap(), Value::Int(0));
    assert_eq!(ctx.get("d").unwrap(), Value::Double(0.0));
    assert_eq!(ctx.get("b").unwrap(), Value::Boolean(false));
    assert_eq!(ctx.get("v").unwrap(), Value::Null);
}

#[test]
fn dll_calls_are_reported_not_executed() {
    let reporter = Rc::new(RecordingReporter::new());
    let mut ctx = Environment::new().with_reporter(reporter.clone()).into_context();
    ctx.declare_dll_import(DllImport {
        alias: "Bogus".to_string(),
        lib: "urlmon".to_string(),
        true_name: "URLDownloadToFileA".to_string(),
    });

    let call = Expr::call(
        "Bogus",
        vec![
            Expr::literal(0),
            Expr::literal("http://x\0"),
            Expr::literal("c:\\a.exe"),
        ],
    );
    assert_eq!(call.eval(&mut ctx).unwrap(), Value::Int(0));
    assert_eq!(
        reporter.actions(),
        vec![ReportedAction {
            action: "External Function Call".to_string(),
            params: "URLDownloadToFileA(0, http://x, c:\\a.exe)".to_string(),
            description: "Lib: urlmon, Alias: Bogus".to_string(),
        }]
    );
}

fn eval_binary(op: BinOp, left: impl Into<Value>, right: impl Into<Value>) -> Result<Value, VbaError> {
    let mut ctx = Context::new();
    Expr::binary(op, Expr::literal(left), Expr::literal(right)).eval(&mut ctx)
}

#[test]
fn operators_coerce_to_the_first_operand() {
    assert_eq!(eval_binary(BinOp::Add, 1, "2").unwrap(), Value::Int(3));
    assert_eq!(eval_binary(BinOp::Add, "1", 2).unwrap(), Value::from("12"));
    assert_eq!(eval_binary(BinOp::Eq, "1", 1).unwrap(), Value::Boolean(true));
    assert_eq!(eval_binary(BinOp::Lt, 2, 10).unwrap(), Value::Boolean(true));
    assert_eq!(eval_binary(BinOp::Lt, "2", "10").unwrap(), Value::Boolean(false));
    assert_eq!(eval_binary(BinOp::Concat, 1, 2).unwrap(), Value::from("12"));
}

#[test]
fn arithmetic_operators() {
    assert_eq!(eval_binary(BinOp::Mul, 6, 7).unwrap(), Value::Int(42));
    assert_eq!(eval_binary(BinOp::Div, 7, 2).unwrap(), Value::Double(3.5));
    assert_eq!(eval_binary(BinOp::IntDiv, 7, 2).unwrap(), Value::Int(3));
    assert_eq!(eval_binary(BinOp::Mod, 7, 2).unwrap(), Value::Int(1));
    assert_eq!(eval_binary(BinOp::Sub, 1.5, 1).unwrap(), Value::Double(0.5));
    assert_eq!(eval_binary(BinOp::Xor, 6, 3).unwrap(), Value::Int(5));
    assert_eq!(
        eval_binary(BinOp::And, true, false).unwrap(),
        Value::Boolean(false)
    );
    assert!(matches!(
        eval_binary(BinOp::Div, 1, 0),
        Err(VbaError::Runtime(_))
    ));
    assert!(matches!(
        eval_binary(BinOp::Add, 1, "abc"),
        Err(VbaError::TypeCoercion(_))
    ));
}

#[test]
fn integer_division_overflow_is_an_error() {
    for op in [BinOp::IntDiv, BinOp::Mod] {
        assert!(matches!(
            eval_binary(op, Value::Int(i64::MIN), -1i64),
            Err(VbaError::Runtime(msg)) if msg == "Overflow"
        ));
    }
    assert_eq!(
        eval_binary(BinOp::IntDiv, Value::Int(i64::MIN), 1i64).unwrap(),
        Value::Int(i64::MIN)
    );
    assert!(matches!(
        eval_binary(BinOp::Mod, 7, 0),
        Err(VbaError::Runtime(_))
    ));
}
