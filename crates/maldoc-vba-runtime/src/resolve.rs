//! Argument resolution: turn an AST node, a raw token or a value into a runtime value.
//!
//! Raw tokens go through a fixed chain of lookups (variables, object-model quirks, dotted
//! member peeling, document metadata, form-variable guessing). Every step is soft: a miss
//! moves on to the next one and the token itself is the final answer. Only resource-limit
//! violations and strict coercion errors escape.

use std::rc::Rc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::ast::{Expr, VbaNode};
use crate::eval::invoke_object;
use crate::object_model::{parse_cell_ref, Spreadsheet};
use crate::runtime::{Context, VbaError};
use crate::value::{latin1_string, Value};

/// Something [`eval_arg`] can resolve.
#[derive(Debug, Clone)]
pub enum Arg<'a> {
    Node(&'a Expr),
    Value(Value),
}

impl Arg<'_> {
    /// VBA textual form, the input of the pattern-based steps.
    fn text(&self) -> String {
        match self {
            Self::Node(expr) => expr.to_string(),
            Self::Value(v) => v.to_string_lossy(),
        }
    }
}

impl<'a> From<&'a Expr> for Arg<'a> {
    fn from(expr: &'a Expr) -> Self {
        Self::Node(expr)
    }
}

impl From<Value> for Arg<'_> {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Arg<'_> {
    fn from(text: &str) -> Self {
        Self::Value(Value::from(text))
    }
}

impl From<String> for Arg<'_> {
    fn from(text: String) -> Self {
        Self::Value(Value::Str(text))
    }
}

/// Resolve one argument.
///
/// With `treat_as_var_name`, an unresolved token shaped like an identifier is an
/// uninitialized variable and resolves to `Null` instead of to itself.
pub fn eval_arg<'a>(
    arg: impl Into<Arg<'a>>,
    ctx: &mut Context,
    treat_as_var_name: bool,
) -> Result<Value, VbaError> {
    let arg = arg.into();
    let governor = Rc::clone(ctx.governor());
    let _depth = governor.enter();
    governor.check()?;

    log::debug!("try eval arg: {arg:?}");

    if let Some(v) = read_from_excel(&arg.text(), ctx) {
        return Ok(v);
    }
    if let Arg::Node(expr) = &arg {
        if let Some(v) = read_from_object_text(expr, ctx)? {
            return Ok(v);
        }
    }

    let value = match arg {
        Arg::Node(expr) => return expr.eval(ctx),
        Arg::Value(Value::Object(obj)) => return invoke_object(ctx, &obj, &[]),
        Arg::Value(v) => v,
    };

    let text = match value {
        Value::Str(text) => text,
        other => return Ok(other),
    };

    for (name, strategy) in TEXT_STRATEGIES {
        match strategy(text.as_str(), ctx)? {
            Step::Resolved(v) => {
                log::debug!("eval_arg: {text:?} resolved by {name}");
                return Ok(v);
            }
            Step::Next => continue,
            Step::Exhausted => break,
        }
    }

    if treat_as_var_name && looks_like_identifier(&text) {
        log::debug!("eval_arg: {text:?} is an uninitialized variable");
        return Ok(Value::Null);
    }
    log::debug!("eval_arg: returning {text:?} unchanged");
    Ok(Value::Str(text))
}

/// [`eval_arg`] over a sequence, preserving order.
///
/// Unresolved arguments do not fail: they come back as `Null` or as their own text. Only
/// fatal limit errors and strict coercion errors propagate, and the first of those ends the run.
pub fn eval_args<'a, I>(args: I, ctx: &mut Context, treat_as_var_name: bool) -> Result<Vec<Value>, VbaError>
where
    I: IntoIterator,
    I::Item: Into<Arg<'a>>,
{
    args.into_iter()
        .map(|arg| eval_arg(arg, ctx, treat_as_var_name))
        .collect()
}

fn looks_like_identifier(text: &str) -> bool {
    text.chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
}

/// Swallow soft failures, keep fatal ones.
fn soft(result: Result<Value, VbaError>) -> Result<Option<Value>, VbaError> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(err) if err.is_fatal() => Err(err),
        Err(err) => {
            log::debug!("eval_arg: ignoring {err}");
            Ok(None)
        }
    }
}

/// The argument of `<prefix>(...)` found in `lower`, sliced out of `text` so its case survives.
fn call_argument<'t>(text: &'t str, lower: &str, prefix: &str) -> Option<&'t str> {
    let start = lower.find(prefix)? + prefix.len();
    let end = start + lower[start..].find(')')?;
    text.get(start..end)
}

fn unquote(s: &str) -> String {
    s.trim().replace(['"', '\''], "")
}

/// `ThisWorkbook.Sheets("name").Range("B2")` style reads from the attached workbook.
fn read_from_excel(text: &str, ctx: &Context) -> Option<Value> {
    // ASCII lowering keeps byte offsets valid for slicing `text`.
    let lower = text.to_ascii_lowercase();
    if !(lower.contains("thisworkbook.") && lower.contains("sheets(") && lower.contains("range(")) {
        return None;
    }
    log::debug!("try as Excel cell read: {text}");

    let sheet_name = unquote(call_argument(text, &lower, "sheets(")?);
    let cell = unquote(call_argument(text, &lower, "range(")?);

    let Some(workbook) = ctx.workbook() else {
        log::error!("cannot read cell from Excel spreadsheet: no workbook loaded");
        return None;
    };
    match read_cell(&**workbook, &sheet_name, &cell) {
        Ok(v) => {
            log::info!("read cell ({cell}) from sheet {sheet_name}");
            Some(Value::Str(v.to_string_lossy()))
        }
        Err(err) => {
            log::error!("cannot read cell from Excel spreadsheet: {err}");
            None
        }
    }
}

fn read_cell(workbook: &dyn Spreadsheet, sheet_name: &str, cell: &str) -> Result<Value, VbaError> {
    let sheet = workbook.sheet_by_name(sheet_name)?;
    let (row, col) = parse_cell_ref(cell)?;
    sheet.cell_value(row, col)
}

const OBJECT_TEXT_SUFFIXES: &[&str] = &[
    ".textframe.textrange.text",
    ".alternativetext",
    ".textframe.containingrange",
];

/// Shape/frame text stored as `<object>.textframe.textrange.text` doc vars.
fn read_from_object_text(expr: &Expr, ctx: &mut Context) -> Result<Option<Value>, VbaError> {
    let Expr::MemberAccess { lhs, rhs } = expr else {
        return Ok(None);
    };
    let lower = expr.to_string().to_lowercase();
    if !OBJECT_TEXT_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return Ok(None);
    }
    log::debug!("eval_arg: try as object text: {lower}");

    let mut base: &Expr = lhs;
    if base.to_string().eq_ignore_ascii_case("activedocument") {
        if let Some(first) = rhs.first() {
            base = first;
        }
    }
    let base_text = match soft(base.eval(ctx))? {
        Some(v) if !v.is_null() => v.to_string_lossy(),
        _ => base.to_string(),
    }
    .replace('"', "'");

    let name = format!("{base_text}.textframe.textrange.text");
    if let Some(v) = ctx.get_doc_var(&name) {
        return Ok(Some(v));
    }

    // Collections are usually keyed 1-based: retry with the quoted index rewritten to '1'.
    let (Some(first), Some(last)) = (base_text.find('\''), base_text.rfind('\'')) else {
        return Ok(None);
    };
    let name = format!(
        "{}1{}.textframe.textrange.text",
        &base_text[..=first],
        &base_text[last..]
    );
    log::debug!("eval_arg: fallback, looking for object text {name}");
    Ok(ctx.get_doc_var(&name))
}

enum Step {
    Resolved(Value),
    /// Not applicable; try the next strategy.
    Next,
    /// Applicable but missed; the chain ends here.
    Exhausted,
}

type TextStrategy = fn(&str, &mut Context) -> Result<Step, VbaError>;

/// Tried in order on raw text tokens.
const TEXT_STRATEGIES: &[(&str, TextStrategy)] = &[
    ("variable", variable),
    ("node typed value", node_typed_value),
    ("selected item", selected_item),
    ("dotted name", dotted_name),
];

fn variable(text: &str, ctx: &mut Context) -> Result<Step, VbaError> {
    Ok(match ctx.get(text) {
        Ok(v) => Step::Resolved(v),
        Err(_) => Step::Next,
    })
}

/// `<obj>.nodeTypedValue` reads `<obj>.text`, base64-decoded when it decodes.
fn node_typed_value(text: &str, ctx: &mut Context) -> Result<Step, VbaError> {
    let lower = text.to_lowercase();
    if !lower.contains(".nodetypedvalue") {
        return Ok(Step::Next);
    }
    let sibling = lower.replace(".nodetypedvalue", ".text");
    let Ok(val) = ctx.get(&sibling) else {
        log::debug!("eval_arg: {sibling} not found");
        return Ok(Step::Exhausted);
    };
    let Value::Str(encoded) = &val else {
        return Ok(Step::Resolved(val));
    };
    match decode_base64_lenient(encoded) {
        Some(decoded) => Ok(Step::Resolved(Value::Str(decoded))),
        None => {
            log::debug!("eval_arg: base64 decode of {encoded:?} failed");
            Ok(Step::Resolved(val))
        }
    }
}

/// Decode ignoring characters outside the base64 alphabet; NUL bytes are dropped.
fn decode_base64_lenient(encoded: &str) -> Option<String> {
    let filtered: String = encoded
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
        .collect();
    let mut bytes = BASE64.decode(filtered).ok()?;
    bytes.retain(|&b| b != 0);
    Some(latin1_string(&bytes))
}

/// `<obj>.selectedItem` reads `<obj>.rapt.value`.
fn selected_item(text: &str, ctx: &mut Context) -> Result<Step, VbaError> {
    let lower = text.to_lowercase();
    if !lower.contains(".selecteditem") {
        return Ok(Step::Next);
    }
    let sibling = lower.replace(".selecteditem", ".rapt.value");
    Ok(match ctx.get(&sibling) {
        Ok(v) => Step::Resolved(v),
        Err(_) => {
            log::debug!("eval_arg: {sibling} not found");
            Step::Exhausted
        }
    })
}

type DottedStrategy = fn(&str, &mut Context) -> Result<Option<Value>, VbaError>;

const DOTTED_STRATEGIES: &[(&str, DottedStrategy)] = &[
    ("doc var", doc_var),
    ("peeled variable", peeled_variable),
    ("trailing function", trailing_function),
    ("document metadata", document_metadata),
    ("wildcard form variable", wildcard_form_variable),
];

fn dotted_name(text: &str, ctx: &mut Context) -> Result<Step, VbaError> {
    if !text.contains('.') {
        return Ok(Step::Next);
    }
    for (name, strategy) in DOTTED_STRATEGIES {
        if let Some(v) = strategy(text, ctx)? {
            log::debug!("eval_arg: {text:?} resolved as {name}");
            return Ok(Step::Resolved(v));
        }
    }
    Ok(Step::Exhausted)
}

fn doc_var(text: &str, ctx: &mut Context) -> Result<Option<Value>, VbaError> {
    Ok(ctx.get_doc_var(text))
}

/// `a.b.c`, then `b.c`: every suffix that still holds a dot.
fn peeled_variable(text: &str, ctx: &mut Context) -> Result<Option<Value>, VbaError> {
    let mut peeled = text;
    while let Some(dot) = peeled.find('.') {
        if let Ok(v) = ctx.get(&peeled.to_lowercase()) {
            return Ok(Some(v));
        }
        peeled = &peeled[dot + 1..];
    }
    Ok(None)
}

/// The last segment as a function. A function that does not produce a different value leaves
/// the token as is.
fn trailing_function(text: &str, ctx: &mut Context) -> Result<Option<Value>, VbaError> {
    let lower = text.to_lowercase();
    let func_name = lower.rsplit('.').next().unwrap_or(&lower);
    let Ok(func) = ctx.get(func_name) else {
        log::debug!("eval_arg: {func_name} not found as function");
        return Ok(None);
    };
    log::debug!("eval_arg: try to run {func_name} as function");
    match soft(eval_arg(func.clone(), ctx, true))? {
        Some(r) if r != func => Ok(Some(r)),
        Some(_) => Ok(Some(Value::from(text))),
        None => Ok(None),
    }
}

/// Argument of a `prefix(...)` accessor with quotes, parens and `.value` removed.
fn accessor_argument(rest: &str) -> String {
    rest.replace(')', "")
        .replace(['\'', '"'], "")
        .replace(".value", "")
        .replace('(', "")
        .trim()
        .to_string()
}

fn document_metadata(text: &str, ctx: &mut Context) -> Result<Option<Value>, VbaError> {
    let tmp = text.trim().to_lowercase();

    if let Some(rest) = tmp.strip_prefix("activedocument.item(") {
        let prop = accessor_argument(rest);
        let Some(meta) = ctx.metadata() else {
            log::error!("BuiltInDocumentProperties: metadata not read");
            return Ok(Some(Value::from("")));
        };
        return Ok(Some(match meta.property(&prop) {
            Some(v) => {
                log::debug!("BuiltInDocumentProperties: {prop} -> {v:?}");
                v
            }
            None => {
                log::error!("BuiltInDocumentProperties: metadata field {prop:?} not found");
                Value::from("")
            }
        }));
    }

    for prefix in [
        "thisdocument.builtindocumentproperties(",
        "activedocument.variables(",
        "activedocument.customdocumentproperties(",
    ] {
        if let Some(rest) = tmp.strip_prefix(prefix) {
            let var = accessor_argument(rest);
            log::debug!("eval_arg: look for {var:?} as document variable");
            if let Some(v) = ctx.get_doc_var(&var) {
                return Ok(Some(v));
            }
        }
    }
    Ok(None)
}

/// Auto-numbered form controls: `TextBox.Text` may live in `textbox*0` ... `textbox*10`.
fn wildcard_form_variable(text: &str, ctx: &mut Context) -> Result<Option<Value>, VbaError> {
    let tmp = text.trim().to_lowercase();
    let Some(dot) = tmp.find('.') else {
        return Ok(None);
    };
    let stem = &tmp[..dot];
    for idx in 0..=10 {
        let name = format!("{stem}*{idx}");
        if let Ok(v) = ctx.get(&name) {
            log::debug!("eval_arg: found {tmp:?} as wildcard form variable {name:?}");
            return Ok(Some(v));
        }
    }
    Ok(None)
}
