#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use peteqs_diagnostic::ErrorKind;
use peteqs_ir::{AssignTarget, BinaryOp, Expr, StmtKind, UnaryOp};
use pretty_assertions::assert_eq;

use super::{parse_body, Context, MAX_BLOCK_DEPTH, MAX_EXPR_DEPTH, MAX_LINE_OPERATORS};

fn parse_in(source: &str, context: Context) -> Result<Vec<StmtKind>, peteqs_diagnostic::InterpretError> {
    let lines = peteqs_lexer::tokenize(source).unwrap();
    parse_body(&lines, context).map(|stmts| stmts.into_iter().map(|s| s.kind).collect())
}

fn parse_one(source: &str) -> StmtKind {
    let mut stmts = parse_in(source, Context::Main).unwrap();
    assert_eq!(stmts.len(), 1, "{stmts:?}");
    stmts.remove(0)
}

fn expr(source: &str) -> Expr {
    match parse_one(&format!("x <- {source}")) {
        StmtKind::Assign { value, .. } => value,
        other => panic!("unexpected {other:?}"),
    }
}

fn var(name: &str) -> Expr {
    Expr::Var(name.to_string())
}

#[test]
fn multiplicative_binds_tighter_than_additive() {
    assert_eq!(
        expr("a + b * 2"),
        Expr::binary(
            BinaryOp::Add,
            var("a"),
            Expr::binary(BinaryOp::Mul, var("b"), Expr::Number(2.0)),
        )
    );
}

#[test]
fn same_level_is_left_associative() {
    assert_eq!(
        expr("10 - 4 - 3"),
        Expr::binary(
            BinaryOp::Sub,
            Expr::binary(BinaryOp::Sub, Expr::Number(10.0), Expr::Number(4.0)),
            Expr::Number(3.0),
        )
    );
}

#[test]
fn logical_levels_order() {
    // a OU b E c = 1  =>  a OU (b E (c = 1))
    assert_eq!(
        expr("a OU b E c = 1"),
        Expr::binary(
            BinaryOp::Or,
            var("a"),
            Expr::binary(
                BinaryOp::And,
                var("b"),
                Expr::binary(BinaryOp::Eq, var("c"), Expr::Number(1.0)),
            ),
        )
    );
}

#[test]
fn comparisons_parse_left_to_right() {
    assert_eq!(
        expr("a < b < c"),
        Expr::binary(
            BinaryOp::Lt,
            Expr::binary(BinaryOp::Lt, var("a"), var("b")),
            var("c"),
        )
    );
}

#[test]
fn mod_and_div_are_multiplicative() {
    assert_eq!(
        expr("7 MOD 3 + 7 DIV 2"),
        Expr::binary(
            BinaryOp::Add,
            Expr::binary(BinaryOp::Mod, Expr::Number(7.0), Expr::Number(3.0)),
            Expr::binary(BinaryOp::FloorDiv, Expr::Number(7.0), Expr::Number(2.0)),
        )
    );
}

#[test]
fn negative_literals_fold() {
    assert_eq!(expr("-5"), Expr::Number(-5.0));
    assert_eq!(expr("-x"), Expr::unary(UnaryOp::Neg, var("x")));
    assert_eq!(expr("NÃO fim_ok"), Expr::unary(UnaryOp::Not, var("fim_ok")));
}

#[test]
fn calls_indexes_and_groups() {
    assert_eq!(
        expr("(v[i + 1] + soma(1, 2)) * 2"),
        Expr::binary(
            BinaryOp::Mul,
            Expr::binary(
                BinaryOp::Add,
                Expr::Index {
                    name: "v".into(),
                    index: Box::new(Expr::binary(BinaryOp::Add, var("i"), Expr::Number(1.0))),
                },
                Expr::Call {
                    name: "soma".into(),
                    args: vec![Expr::Number(1.0), Expr::Number(2.0)],
                },
            ),
            Expr::Number(2.0),
        )
    );
}

#[test]
fn print_arguments_comma_and_juxtaposed() {
    assert_eq!(
        parse_one("IMPRIMA 'a', x 'b'"),
        StmtKind::Print(vec![Expr::Str("a".into()), var("x"), Expr::Str("b".into())])
    );
    assert_eq!(parse_one("IMPRIMALN"), StmtKind::PrintLine(Vec::new()));
}

#[test]
fn read_targets() {
    assert_eq!(
        parse_one("LEIA nome, notas[i]"),
        StmtKind::Read(vec![
            AssignTarget::Var("nome".into()),
            AssignTarget::Element {
                name: "notas".into(),
                index: var("i"),
            },
        ])
    );
}

#[test]
fn element_assignment_and_call_statement() {
    assert_eq!(
        parse_one("v[2] <- 'x'"),
        StmtKind::ArrayAssign {
            name: "v".into(),
            index: Expr::Number(2.0),
            value: Expr::Str("x".into()),
        }
    );
    assert_eq!(
        parse_one("mostrar(1)"),
        StmtKind::Call {
            name: "mostrar".into(),
            args: vec![Expr::Number(1.0)],
        }
    );
}

#[test]
fn if_with_else_splits_bodies() {
    let stmt = parse_one("SE n > 5 ENTÃO\nIMPRIMALN 'maior'\nSENÃO\nIMPRIMALN 'menor'\nFIM SE");
    match stmt {
        StmtKind::If {
            then_body,
            else_body,
            ..
        } => {
            assert_eq!(then_body.len(), 1);
            assert_eq!(then_body[0].line, 2);
            assert_eq!(else_body.map(|b| b[0].line), Some(4));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn for_header_parts() {
    match parse_one("PARA i <- 5 ATÉ 1 FAÇA\nIMPRIMA i\nFIM PARA") {
        StmtKind::ForCount {
            var, start, end, body,
        } => {
            assert_eq!(var, "i");
            assert_eq!(start, Expr::Number(5.0));
            assert_eq!(end, Expr::Number(1.0));
            assert_eq!(body.len(), 1);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn procedure_parens_are_optional() {
    match parse_one("PROCEDIMENTO linha\nIMPRIMALN '--'\nFIM PROCEDIMENTO") {
        StmtKind::ProcedureDef(callable) => {
            assert_eq!(callable.name, "linha");
            assert!(callable.params.is_empty());
            assert_eq!(callable.line, 1);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn function_params() {
    match parse_one("FUNÇÃO soma(a, b)\nRETORNE a + b\nFIM FUNÇÃO") {
        StmtKind::FunctionDef(callable) => {
            assert_eq!(callable.params, vec!["a".to_string(), "b".to_string()]);
            assert_eq!(
                callable.body[0].kind,
                StmtKind::Return(Some(Expr::binary(BinaryOp::Add, var("a"), var("b"))))
            );
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn parse_errors_carry_lines() {
    let cases = [
        ("x <- 1\nSE x ENTÃO\nIMPRIMA x", 2),
        ("x <- 1\nFIM SE", 2),
        ("SENÃO", 1),
        ("x <- (1 + 2", 1),
        ("x 1", 1),
        ("IMPRIMA 1\nRETORNE 2", 2),
        ("SE x ENTÃO\nIMPRIMA 1\nSENÃO agora\nFIM SE", 3),
        ("FUNÇÃO f(a, a)\nFIM FUNÇÃO", 1),
        ("PARA i 1 ATÉ 2 FAÇA\nFIM PARA", 1),
    ];
    for (source, line) in cases {
        let err = parse_in(source, Context::Main).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ParseError, "{source}");
        assert_eq!(err.line, Some(line), "{source}: {}", err.message);
    }
}

#[test]
fn nested_callable_definition_is_rejected() {
    let source = "FUNÇÃO f()\nPROCEDIMENTO g\nFIM PROCEDIMENTO\nFIM FUNÇÃO";
    let err = parse_in(source, Context::Main).unwrap_err();
    assert_eq!(err.line, Some(2));
    assert!(err.message.starts_with("PROCEDIMENTO"), "{}", err.message);
}

#[test]
fn return_is_allowed_inside_callables() {
    let stmts = parse_in("RETORNE", Context::Callable).unwrap();
    assert_eq!(stmts, vec![StmtKind::Return(None)]);
}

fn nested_ifs(depth: usize) -> String {
    format!(
        "{}IMPRIMA 1\n{}",
        "SE VERDADEIRO ENTÃO\n".repeat(depth),
        "FIM SE\n".repeat(depth)
    )
}

#[test]
fn blocks_nest_up_to_the_limit() {
    let stmts = parse_in(&nested_ifs(MAX_BLOCK_DEPTH), Context::Main).unwrap();
    assert_eq!(stmts.len(), 1);
}

#[test]
fn blocks_nested_past_the_limit_fail_at_the_first_excess_header() {
    let err = parse_in(&nested_ifs(2000), Context::Main).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ParseError);
    assert_eq!(err.line, Some(u32::try_from(MAX_BLOCK_DEPTH + 1).unwrap()));
    assert!(err.message.contains("aninhados"), "{}", err.message);
}

#[test]
fn prefix_chain_past_the_depth_limit_is_rejected() {
    let source = format!("x <- {}VERDADEIRO", "NÃO ".repeat(100_000));
    let err = parse_in(&source, Context::Main).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ParseError);
    assert_eq!(err.line, Some(1));
    assert!(err.message.contains("aninhada"), "{}", err.message);
}

#[test]
fn parentheses_past_the_depth_limit_are_rejected() {
    let depth = MAX_EXPR_DEPTH + 1;
    let source = format!("IMPRIMA {}1{}", "(".repeat(depth), ")".repeat(depth));
    let err = parse_in(&source, Context::Main).unwrap_err();
    assert!(err.message.contains("aninhada"), "{}", err.message);
}

#[test]
fn prefix_chain_within_the_limit_parses() {
    let source = format!("x <- {}VERDADEIRO", "NÃO ".repeat(MAX_EXPR_DEPTH - 1));
    assert!(parse_in(&source, Context::Main).is_ok());
}

#[test]
fn operator_count_per_line_is_bounded() {
    let within = format!("x <- {}1", "1 + ".repeat(MAX_LINE_OPERATORS));
    assert!(parse_in(&within, Context::Main).is_ok());

    let past = format!("x <- {}1", "1 + ".repeat(MAX_LINE_OPERATORS + 1));
    let err = parse_in(&past, Context::Main).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ParseError);
    assert!(err.message.contains("operadores"), "{}", err.message);
}
