use std::cmp::Ordering;
use std::rc::Rc;

use crate::ast::{
    expr_children, stmt_children, BinOp, DllImport, Expr, NodeRef, Procedure, ProcedureKind,
    Stmt, UnOp, VbaNode, VbaType,
};
use crate::coerce::{coerce_args, coerce_to_int};
use crate::resolve::{eval_arg, eval_args};
use crate::runtime::{Context, VbaError};
use crate::value::{string_bytes, ObjectRef, Value};

impl VbaNode for Expr {
    fn eval(&self, ctx: &mut Context) -> Result<Value, VbaError> {
        match self {
            Expr::Literal(v) => Ok(v.clone()),
            Expr::Ident(name) => match ctx.get(name) {
                Ok(Value::Object(obj)) => invoke_object(ctx, &obj, &[]),
                Ok(v) => Ok(v),
                Err(_) => {
                    log::debug!("{name} is uninitialized");
                    Ok(Value::Null)
                }
            },
            Expr::MemberAccess { .. } => eval_arg(self.to_string(), ctx, false),
            Expr::Call { callee, args } => {
                let args = eval_args(args.iter(), ctx, false)?;
                match ctx.get_callable(callee) {
                    Some(obj) => invoke_object(ctx, &obj, &args),
                    None => match ctx.get(callee) {
                        Ok(v) => Ok(v),
                        Err(_) => {
                            log::debug!("unknown function {callee}");
                            Ok(Value::Null)
                        }
                    },
                }
            }
            Expr::Unary { op, expr } => {
                let v = eval_arg(&**expr, ctx, false)?;
                eval_unary(*op, v)
            }
            Expr::Binary { op, left, right } => {
                let l = eval_arg(&**left, ctx, false)?;
                let r = eval_arg(&**right, ctx, false)?;
                eval_binary(*op, l, r)
            }
        }
    }

    fn children(&self) -> Vec<NodeRef<'_>> {
        expr_children(self)
    }

    fn as_node(&self) -> NodeRef<'_> {
        NodeRef::Expr(self)
    }
}

impl VbaNode for Stmt {
    fn eval(&self, ctx: &mut Context) -> Result<Value, VbaError> {
        match self {
            Stmt::Assign { target, value } => {
                let v = eval_arg(value, ctx, false)?;
                ctx.set(&target.to_string(), v);
            }
            Stmt::Dim { name, ty } => ctx.set_typed(name, default_value(*ty), *ty),
            Stmt::Call(expr) => {
                eval_arg(expr, ctx, false)?;
            }
            Stmt::With { object, body } => {
                let prefix = format!("{object}.");
                let previous = ctx.set_with_prefix(&prefix);
                let result = exec_block(body, ctx);
                ctx.set_with_prefix(&previous);
                result?;
            }
            Stmt::Open { path, file_id } => {
                let path = eval_arg(path, ctx, false)?.to_string_lossy();
                let id = file_handle(file_id, ctx)?;
                ctx.open_file_as(&id, &path);
            }
            Stmt::Print { file_id, data } => {
                let id = file_handle(file_id, ctx)?;
                let mut text = eval_arg(data, ctx, false)?.to_string_lossy();
                text.push_str("\r\n");
                ctx.write_file(&id, &string_bytes(&text))?;
            }
            Stmt::Put { file_id, data } => {
                let id = file_handle(file_id, ctx)?;
                let declared = match data {
                    Expr::Ident(name) => ctx.get_type(name),
                    _ => None,
                };
                let v = eval_arg(data, ctx, false)?;
                ctx.write_file(&id, &binary_image(&v, declared))?;
            }
            Stmt::Close { file_id: Some(file_id) } => {
                let id = file_handle(file_id, ctx)?;
                ctx.dump_file(&id);
            }
            Stmt::Close { file_id: None } => ctx.dump_all_files(),
            Stmt::ExitFunction => ctx.set_exit_func(true),
        }
        Ok(Value::Null)
    }

    fn children(&self) -> Vec<NodeRef<'_>> {
        stmt_children(self)
    }

    fn as_node(&self) -> NodeRef<'_> {
        NodeRef::Stmt(self)
    }
}

impl VbaNode for Procedure {
    /// Runs the procedure without arguments.
    fn eval(&self, ctx: &mut Context) -> Result<Value, VbaError> {
        call_procedure(ctx, self, &[])
    }

    fn children(&self) -> Vec<NodeRef<'_>> {
        self.body.iter().map(NodeRef::Stmt).collect()
    }

    fn as_node(&self) -> NodeRef<'_> {
        NodeRef::Procedure(self)
    }
}

impl Context {
    /// Call a procedure, DLL import or library function by name.
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Value, VbaError> {
        let obj = self
            .get_callable(name)
            .ok_or_else(|| VbaError::NameNotFound(name.to_string()))?;
        invoke_object(self, &obj, args)
    }
}

/// Run a statement list until it ends or an `Exit Function` is hit.
pub fn exec_block(body: &[Stmt], ctx: &mut Context) -> Result<(), VbaError> {
    for stmt in body {
        stmt.eval(ctx)?;
        if ctx.exit_func() {
            break;
        }
    }
    Ok(())
}

pub fn invoke_object(ctx: &mut Context, obj: &ObjectRef, args: &[Value]) -> Result<Value, VbaError> {
    match obj {
        ObjectRef::LibraryFunc(func) => func.call(ctx, args),
        ObjectRef::Procedure(proc) => call_procedure(ctx, proc, args),
        ObjectRef::DllImport(import) => Ok(call_dll_import(ctx, import, args)),
    }
}

/// Execute `proc` in a fresh child scope with its parameters bound positionally.
///
/// A `Function` returns whatever was last assigned to its own name.
pub fn call_procedure(ctx: &mut Context, proc: &Procedure, args: &[Value]) -> Result<Value, VbaError> {
    let governor = Rc::clone(ctx.governor());
    let _depth = governor.enter();
    governor.check()?;

    log::debug!("calling {} with {} argument(s)", proc.name, args.len());
    let mut callee = ctx.child();
    for (idx, param) in proc.params.iter().enumerate() {
        callee.set_local(param, args.get(idx).cloned().unwrap_or_default());
    }
    if proc.kind == ProcedureKind::Function {
        callee.set_local(&proc.name, Value::Null);
    }

    exec_block(&proc.body, &mut callee)?;

    match proc.kind {
        ProcedureKind::Function => Ok(callee.get(&proc.name).unwrap_or_default()),
        ProcedureKind::Sub => Ok(Value::Null),
    }
}

/// DLL exports are not executed; the call is reported and reads as success (`0`).
fn call_dll_import(ctx: &mut Context, import: &DllImport, args: &[Value]) -> Value {
    let true_name = ctx
        .get_true_name(&import.alias)
        .unwrap_or_else(|| import.true_name.clone());
    let params = args
        .iter()
        .map(Value::to_string_lossy)
        .collect::<Vec<_>>()
        .join(", ");
    ctx.report_action(
        "External Function Call",
        &format!("{true_name}({params})"),
        &format!("Lib: {}, Alias: {}", import.lib, import.alias),
        true,
    );
    Value::Int(0)
}

fn default_value(ty: VbaType) -> Value {
    match ty {
        VbaType::Byte | VbaType::Integer | VbaType::Long => Value::Int(0),
        VbaType::Single | VbaType::Double => Value::Double(0.0),
        VbaType::String => Value::Str(String::new()),
        VbaType::Boolean => Value::Boolean(false),
        VbaType::Variant | VbaType::Date | VbaType::Object => Value::Null,
    }
}

/// `#1`, `1` and `fileNum` all name a handle by their resolved text.
fn file_handle(file_id: &Expr, ctx: &mut Context) -> Result<String, VbaError> {
    Ok(eval_arg(file_id, ctx, false)?.to_string_lossy())
}

/// Bytes `Put` writes for a value. Integers follow the declared width, defaulting to a byte
/// when the value fits one.
fn binary_image(value: &Value, declared: Option<VbaType>) -> Vec<u8> {
    match (value, declared) {
        (Value::Int(n), Some(VbaType::Integer | VbaType::Boolean)) => (*n as i16).to_le_bytes().to_vec(),
        (Value::Int(n), Some(VbaType::Long)) => (*n as i32).to_le_bytes().to_vec(),
        (Value::Int(n), _) => match u8::try_from(*n) {
            Ok(b) => vec![b],
            Err(_) => (*n as i32).to_le_bytes().to_vec(),
        },
        (Value::Boolean(b), _) => (if *b { -1i16 } else { 0 }).to_le_bytes().to_vec(),
        (Value::Double(d), Some(VbaType::Single)) => (*d as f32).to_le_bytes().to_vec(),
        (Value::Double(d), _) => d.to_le_bytes().to_vec(),
        (other, _) => string_bytes(&other.to_string_lossy()),
    }
}

fn eval_unary(op: UnOp, v: Value) -> Result<Value, VbaError> {
    match (op, v) {
        (UnOp::Not, Value::Boolean(b)) => Ok(Value::Boolean(!b)),
        (UnOp::Not, v) => Ok(Value::Int(!coerce_to_int(&v)?)),
        (UnOp::Neg, Value::Int(n)) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| VbaError::Runtime("Overflow".to_string())),
        (UnOp::Neg, Value::Null) => Ok(Value::Int(0)),
        (UnOp::Neg, v) => Ok(Value::Double(-numeric(&v)?)),
    }
}

fn numeric(v: &Value) -> Result<f64, VbaError> {
    v.to_f64()
        .ok_or_else(|| VbaError::TypeCoercion(format!("{v:?} is not numeric")))
}

fn overflow() -> VbaError {
    VbaError::Runtime("Overflow".to_string())
}

fn eval_binary(op: BinOp, l: Value, r: Value) -> Result<Value, VbaError> {
    if op == BinOp::Concat {
        return Ok(Value::Str(l.to_string_lossy() + &r.to_string_lossy()));
    }
    if matches!(op, BinOp::And | BinOp::Or | BinOp::Xor) {
        return eval_logical(op, &l, &r);
    }

    let mut operands = coerce_args(vec![l, r])?.into_iter();
    let (l, r) = match (operands.next(), operands.next()) {
        (Some(l), Some(r)) => (l, r),
        _ => return Err(VbaError::Runtime("missing operand".to_string())),
    };

    if let Some(ordering) = comparison_ordering(op) {
        return compare(&l, &r).map(|ord| Value::Boolean(ordering(ord)));
    }

    match (op, &l, &r) {
        (BinOp::Add, Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
        (BinOp::Add, Value::Int(a), Value::Int(b)) => a.checked_add(*b).map(Value::Int).ok_or_else(overflow),
        (BinOp::Sub, Value::Int(a), Value::Int(b)) => a.checked_sub(*b).map(Value::Int).ok_or_else(overflow),
        (BinOp::Mul, Value::Int(a), Value::Int(b)) => a.checked_mul(*b).map(Value::Int).ok_or_else(overflow),
        (BinOp::IntDiv | BinOp::Mod, _, _) => {
            let a = coerce_to_int(&l)?;
            let b = coerce_to_int(&r)?;
            if b == 0 {
                return Err(VbaError::Runtime("Division by zero".to_string()));
            }
            // i64::MIN / -1 overflows.
            let out = if op == BinOp::IntDiv { a.checked_div(b) } else { a.checked_rem(b) };
            out.map(Value::Int).ok_or_else(overflow)
        }
        _ => {
            let a = numeric(&l)?;
            let b = numeric(&r)?;
            let out = match op {
                BinOp::Add => a + b,
                BinOp::Sub => a - b,
                BinOp::Mul => a * b,
                BinOp::Div if b == 0.0 => {
                    return Err(VbaError::Runtime("Division by zero".to_string()))
                }
                BinOp::Div => a / b,
                _ => return Err(VbaError::Runtime(format!("unsupported operator {op:?}"))),
            };
            Ok(Value::Double(out))
        }
    }
}

fn eval_logical(op: BinOp, l: &Value, r: &Value) -> Result<Value, VbaError> {
    if let (Value::Boolean(a), Value::Boolean(b)) = (l, r) {
        return Ok(Value::Boolean(match op {
            BinOp::And => *a && *b,
            BinOp::Or => *a || *b,
            _ => a ^ b,
        }));
    }
    let a = coerce_to_int(l)?;
    let b = coerce_to_int(r)?;
    Ok(Value::Int(match op {
        BinOp::And => a & b,
        BinOp::Or => a | b,
        _ => a ^ b,
    }))
}

fn comparison_ordering(op: BinOp) -> Option<fn(Ordering) -> bool> {
    Some(match op {
        BinOp::Eq => Ordering::is_eq,
        BinOp::Ne => Ordering::is_ne,
        BinOp::Lt => Ordering::is_lt,
        BinOp::Le => Ordering::is_le,
        BinOp::Gt => Ordering::is_gt,
        BinOp::Ge => Ordering::is_ge,
        _ => return None,
    })
}

fn compare(l: &Value, r: &Value) -> Result<Ordering, VbaError> {
    match (l, r) {
        (Value::Str(a), Value::Str(b)) => Ok(a.cmp(b)),
        (Value::Int(a), Value::Int(b)) => Ok(a.cmp(b)),
        (Value::Date(a), Value::Date(b)) => Ok(a.cmp(b)),
        _ => {
            let a = numeric(l)?;
            let b = numeric(r)?;
            a.partial_cmp(&b)
                .ok_or_else(|| VbaError::Runtime("cannot compare NaN".to_string()))
        }
    }
}
