use std::fmt;
use std::rc::Rc;

use crate::governor::Governor;
use crate::runtime::{Context, VbaError};
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VbaType {
    Variant,
    Byte,
    Integer,
    Long,
    Single,
    Double,
    String,
    Boolean,
    Date,
    Object,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    IntDiv,
    Mod,
    Concat,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
    Xor,
}

impl BinOp {
    fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::IntDiv => "\\",
            Self::Mod => "Mod",
            Self::Concat => "&",
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::And => "And",
            Self::Or => "Or",
            Self::Xor => "Xor",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Expr {
    Literal(Value),
    /// A bare (possibly dotted) name such as `x`, `Application.UserName` or `vbCrLf`.
    Ident(String),
    /// `lhs.rhs[0].rhs[1]...`
    MemberAccess { lhs: Box<Expr>, rhs: Vec<Expr> },
    Call { callee: String, args: Vec<Expr> },
    Unary { op: UnOp, expr: Box<Expr> },
    Binary { op: BinOp, left: Box<Expr>, right: Box<Expr> },
}

impl Expr {
    pub fn ident(name: &str) -> Self {
        Self::Ident(name.to_string())
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    pub fn call(callee: &str, args: Vec<Expr>) -> Self {
        Self::Call {
            callee: callee.to_string(),
            args,
        }
    }

    pub fn member(lhs: Expr, rhs: Vec<Expr>) -> Self {
        Self::MemberAccess {
            lhs: Box::new(lhs),
            rhs,
        }
    }

    pub fn unary(op: UnOp, expr: Expr) -> Self {
        Self::Unary {
            op,
            expr: Box::new(expr),
        }
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Self::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// VBA source form of an expression. The resolution engine matches on this text.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(Value::Str(s)) => write!(f, "\"{}\"", s.replace('"', "\"\"")),
            Self::Literal(Value::Date(d)) => write!(f, "#{}#", d.format("%m/%d/%Y %H:%M:%S")),
            Self::Literal(Value::Null) => f.write_str("Null"),
            Self::Literal(v) => write!(f, "{v}"),
            Self::Ident(name) => f.write_str(name),
            Self::MemberAccess { lhs, rhs } => {
                write!(f, "{lhs}")?;
                for part in rhs {
                    write!(f, ".{part}")?;
                }
                Ok(())
            }
            Self::Call { callee, args } => {
                write!(f, "{callee}(")?;
                for (idx, arg) in args.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
            Self::Unary { op: UnOp::Neg, expr } => write!(f, "-{expr}"),
            Self::Unary { op: UnOp::Not, expr } => write!(f, "Not {expr}"),
            Self::Binary { op, left, right } => write!(f, "{left} {} {right}", op.symbol()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Stmt {
    /// `target = value`. The target's textual form is the variable name.
    Assign { target: Expr, value: Expr },
    /// `Dim name As ty`
    Dim { name: String, ty: VbaType },
    /// A call used as a statement.
    Call(Expr),
    With { object: Expr, body: Vec<Stmt> },
    /// `Open path For ... As file_id`
    Open { path: Expr, file_id: Expr },
    /// `Print #file_id, data` (appends a CRLF).
    Print { file_id: Expr, data: Expr },
    /// `Put #file_id, , data`
    Put { file_id: Expr, data: Expr },
    /// `Close #file_id`; a bare `Close` closes every open handle.
    Close { file_id: Option<Expr> },
    ExitFunction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcedureKind {
    Sub,
    Function,
}

#[derive(Debug, Clone)]
pub struct Procedure {
    pub name: String,
    pub kind: ProcedureKind,
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
}

impl Procedure {
    pub fn new(name: &str, kind: ProcedureKind, params: &[&str], body: Vec<Stmt>) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            kind,
            params: params.iter().map(|p| p.to_string()).collect(),
            body,
        })
    }
}

/// `Declare Function alias Lib "lib" Alias "true_name" (...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DllImport {
    pub alias: String,
    pub lib: String,
    pub true_name: String,
}

/// Borrowed view of any node, used for uniform traversal.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Expr(&'a Expr),
    Stmt(&'a Stmt),
    Procedure(&'a Procedure),
}

pub trait Visitor {
    fn visit(&mut self, node: NodeRef<'_>);
}

/// Capabilities shared by every AST node.
pub trait VbaNode {
    fn eval(&self, ctx: &mut Context) -> Result<Value, VbaError>;

    /// Direct children in source order.
    fn children(&self) -> Vec<NodeRef<'_>>;

    fn as_node(&self) -> NodeRef<'_>;

    /// [`VbaNode::children`] behind a fatal limits check.
    fn checked_children(&self, governor: &Governor) -> Result<Vec<NodeRef<'_>>, VbaError> {
        governor.check()?;
        Ok(self.children())
    }

    /// Pre-order traversal: `self`, then each child subtree.
    fn accept(&self, visitor: &mut dyn Visitor, governor: &Rc<Governor>) -> Result<(), VbaError> {
        let _depth = governor.enter();
        governor.check()?;
        visitor.visit(self.as_node());
        for child in self.checked_children(governor)? {
            child.accept(visitor, governor)?;
        }
        Ok(())
    }
}

impl VbaNode for NodeRef<'_> {
    fn eval(&self, ctx: &mut Context) -> Result<Value, VbaError> {
        match self {
            Self::Expr(e) => e.eval(ctx),
            Self::Stmt(s) => s.eval(ctx),
            Self::Procedure(p) => p.eval(ctx),
        }
    }

    fn children(&self) -> Vec<NodeRef<'_>> {
        match *self {
            Self::Expr(e) => e.children(),
            Self::Stmt(s) => s.children(),
            Self::Procedure(p) => p.children(),
        }
    }

    fn as_node(&self) -> NodeRef<'_> {
        *self
    }
}

pub(crate) fn expr_children(expr: &Expr) -> Vec<NodeRef<'_>> {
    match expr {
        Expr::Literal(_) | Expr::Ident(_) => Vec::new(),
        Expr::MemberAccess { lhs, rhs } => std::iter::once(NodeRef::Expr(&**lhs))
            .chain(rhs.iter().map(NodeRef::Expr))
            .collect(),
        Expr::Call { args, .. } => args.iter().map(NodeRef::Expr).collect(),
        Expr::Unary { expr, .. } => vec![NodeRef::Expr(expr)],
        Expr::Binary { left, right, .. } => vec![NodeRef::Expr(left), NodeRef::Expr(right)],
    }
}

pub(crate) fn stmt_children(stmt: &Stmt) -> Vec<NodeRef<'_>> {
    match stmt {
        Stmt::Assign { target, value } => vec![NodeRef::Expr(target), NodeRef::Expr(value)],
        Stmt::Dim { .. } | Stmt::ExitFunction => Vec::new(),
        Stmt::Call(expr) => vec![NodeRef::Expr(expr)],
        Stmt::With { object, body } => std::iter::once(NodeRef::Expr(object))
            .chain(body.iter().map(NodeRef::Stmt))
            .collect(),
        Stmt::Open { path, file_id } => vec![NodeRef::Expr(path), NodeRef::Expr(file_id)],
        Stmt::Print { file_id, data } | Stmt::Put { file_id, data } => {
            vec![NodeRef::Expr(file_id), NodeRef::Expr(data)]
        }
        Stmt::Close { file_id } => file_id.iter().map(NodeRef::Expr).collect(),
    }
}
