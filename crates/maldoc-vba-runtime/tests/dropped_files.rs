use std::fs;
use std::rc::Rc;

use maldoc_vba_runtime::{
    exec_block, Context, Environment, Expr, RecordingReporter, ReportedAction, Stmt, VbaError,
    VbaType,
};
use pretty_assertions::assert_eq;
use sha2::{Digest, Sha256};

fn sha256_hex(bytes: &[u8]) -> String {
    Sha256::digest(bytes).iter().map(|b| format!("{b:02x}")).collect()
}

#[test]
fn closing_a_file_hashes_and_reports_it() {
    let reporter = Rc::new(RecordingReporter::new());
    let mut ctx = Environment::new().with_reporter(reporter.clone()).into_context();

    ctx.open_file("#1");
    assert!(ctx.is_open("#1"));
    ctx.write_file("#1", b"MZ").unwrap();
    ctx.write_file("#1", b"\x90\x00").unwrap();
    ctx.dump_file("#1");

    assert!(ctx.open_files().is_empty());
    let closed = ctx.closed_files();
    assert_eq!(closed.get("1").map(Vec::as_slice), Some(&b"MZ\x90\x00"[..]));
    assert_eq!(
        reporter.actions(),
        vec![ReportedAction {
            action: "Dropped File Hash".to_string(),
            params: sha256_hex(b"MZ\x90\x00"),
            description: "File Name: 1".to_string(),
        }]
    );
}

#[test]
fn writing_to_a_file_that_is_not_open_fails() {
    let mut ctx = Context::new();
    let err = ctx.write_file("#9", b"x").unwrap_err();
    assert!(matches!(err, VbaError::Runtime(_)));

    // Closing it is a logged no-op.
    ctx.dump_file("#9");
    assert!(ctx.closed_files().is_empty());
}

#[test]
fn file_statements_buffer_and_dump() {
    let mut ctx = Context::new();
    let path = "C:\\Users\\Public\\drop.exe";
    let body = vec![
        Stmt::Open {
            path: Expr::literal(path),
            file_id: Expr::literal("#1"),
        },
        Stmt::Put {
            file_id: Expr::literal("#1"),
            data: Expr::literal("MZ"),
        },
        Stmt::Print {
            file_id: Expr::literal("#1"),
            data: Expr::literal("hi"),
        },
        Stmt::Close {
            file_id: Some(Expr::literal("#1")),
        },
    ];
    exec_block(&body, &mut ctx).unwrap();

    assert_eq!(
        ctx.closed_files().get(path).cloned(),
        Some(b"MZhi\r\n".to_vec())
    );
}

#[test]
fn put_writes_integers_at_their_declared_width() {
    let mut ctx = Context::new();
    let body = vec![
        Stmt::Dim {
            name: "n".to_string(),
            ty: VbaType::Long,
        },
        Stmt::Assign {
            target: Expr::ident("n"),
            value: Expr::literal(258),
        },
        Stmt::Dim {
            name: "w".to_string(),
            ty: VbaType::Integer,
        },
        Stmt::Assign {
            target: Expr::ident("w"),
            value: Expr::literal(-2),
        },
        Stmt::Open {
            path: Expr::literal("out.bin"),
            file_id: Expr::literal(1),
        },
        Stmt::Put {
            file_id: Expr::literal(1),
            data: Expr::ident("n"),
        },
        Stmt::Put {
            file_id: Expr::literal(1),
            data: Expr::ident("w"),
        },
        Stmt::Put {
            file_id: Expr::literal(1),
            data: Expr::literal(65),
        },
        Stmt::Close { file_id: None },
    ];
    exec_block(&body, &mut ctx).unwrap();

    assert_eq!(
        ctx.closed_files().get("out.bin").cloned(),
        Some(vec![2, 1, 0, 0, 0xfe, 0xff, 65])
    );
}

#[test]
fn bare_close_dumps_every_open_file_to_disk() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let out = tmp.path().join("dropped");
    let mut ctx = Environment::new().with_output_dir(&out).into_context();

    ctx.open_file_as("#1", "C:\\a\\drop.exe");
    ctx.open_file_as("#2", "C:\\b\\drop.exe");
    ctx.write_file("#1", b"first").unwrap();
    ctx.write_file("#2", b"second").unwrap();

    exec_block(&[Stmt::Close { file_id: None }], &mut ctx).unwrap();

    assert!(ctx.open_files().is_empty());
    assert_eq!(ctx.closed_files().len(), 2);
    assert_eq!(fs::read(out.join("drop.exe")).expect("first"), b"first");
    assert_eq!(fs::read(out.join("drop.exe (1)")).expect("second"), b"second");
}
