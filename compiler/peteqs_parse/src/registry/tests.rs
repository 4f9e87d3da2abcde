#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use peteqs_diagnostic::ErrorKind;
use peteqs_ir::CallableKind;
use pretty_assertions::assert_eq;

fn callable(name: &str, kind: CallableKind, line: u32) -> Callable {
    Callable {
        name: name.to_string(),
        params: Vec::new(),
        body: Vec::new(),
        kind,
        line,
    }
}

#[test]
fn definitions_are_removed_from_the_main_body() {
    let mut stmts = vec![
        Stmt::new(StmtKind::Print(Vec::new()), 1),
        Stmt::new(
            StmtKind::FunctionDef(callable("dobro", CallableKind::Function, 2)),
            2,
        ),
        Stmt::new(StmtKind::PrintLine(Vec::new()), 5),
    ];
    let registry = DeclarationRegistry::collect(&mut stmts).unwrap();
    assert_eq!(registry.names(), vec!["dobro"]);
    let lines: Vec<u32> = stmts.iter().map(|s| s.line).collect();
    assert_eq!(lines, vec![1, 5]);
}

#[test]
fn definitions_nested_in_blocks_are_hoisted() {
    let mut stmts = vec![Stmt::new(
        StmtKind::RepeatN {
            count: peteqs_ir::Expr::Number(1.0),
            body: vec![Stmt::new(
                StmtKind::ProcedureDef(callable("saudar", CallableKind::Procedure, 2)),
                2,
            )],
        },
        1,
    )];
    let registry = DeclarationRegistry::collect(&mut stmts).unwrap();
    assert!(registry.get("saudar").is_some());
    match &stmts[0].kind {
        StmtKind::RepeatN { body, .. } => assert!(body.is_empty()),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn duplicate_names_are_rejected() {
    let mut registry = DeclarationRegistry::new();
    registry
        .register(callable("f", CallableKind::Function, 1))
        .unwrap();
    let err = registry
        .register(callable("f", CallableKind::Procedure, 9))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::ParseError);
    assert_eq!(err.line, Some(9));
    assert_eq!(err.message, "'f' já foi definido na linha 1");
}

#[test]
fn empty_registry() {
    let registry = DeclarationRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.get("x"), None);
}
