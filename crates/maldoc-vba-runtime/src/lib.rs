//! `maldoc-vba-runtime` is the evaluation core of a VBA macro emulator used to triage
//! malicious Office documents.
//!
//! It does not parse VBA and does not drive control flow. Given AST nodes from a
//! grammar front end it provides:
//! - A layered symbol table (`Context`): locals, run-wide globals, the built-in
//!   library, document variables, simulated file handles and `With` prefixes.
//! - The argument resolver (`eval_arg`) with the fallbacks malicious macros rely on
//!   (sheet cells, shape text, base64 node values, document properties, form variables).
//! - Loose string/integer coercion (`coerce_args` and friends).
//! - A recursion and wall-clock governor consulted on every recursive step.
//!
//! Observable behaviour (dropped files, external calls) is reported through an
//! `ActionReporter`.

mod ast;
mod coerce;
mod constants;
mod eval;
mod governor;
mod library;
mod object_model;
mod report;
mod resolve;
mod runtime;
mod value;

pub use crate::ast::{
    BinOp, DllImport, Expr, NodeRef, Procedure, ProcedureKind, Stmt, UnOp, VbaNode, VbaType,
    Visitor,
};
pub use crate::coerce::{
    coerce_args, coerce_args_to_int, coerce_args_to_str, coerce_to_int, coerce_to_str,
    int_convert, str_convert,
};
pub use crate::eval::{call_procedure, exec_block, invoke_object};
pub use crate::governor::{
    DepthGuard, EmulationLimits, Governor, DEFAULT_STACK_SIZE, STACK_BYTES_PER_LEVEL,
};
pub use crate::library::{Library, LibraryFunction};
pub use crate::object_model::{
    column_label_to_index, parse_cell_ref, DocumentMetadata, InMemoryMetadata, InMemorySheet,
    InMemoryWorkbook, Sheet, Spreadsheet,
};
pub use crate::report::{ActionReporter, LogReporter, RecordingReporter, ReportedAction};
pub use crate::resolve::{eval_arg, eval_args, Arg};
pub use crate::runtime::{Context, Environment, VbaError};
pub use crate::value::{latin1_string, string_bytes, ObjectRef, Value};
