use super::*;
use peteqs_ir::{Keyword, TokenKind};
use pretty_assertions::assert_eq;

fn kinds(text: &str) -> Vec<TokenKind> {
    match lex_line(1, text) {
        Ok(line) => line.tokens.into_iter().map(|t| t.kind).collect(),
        Err(err) => panic!("lex failed: {err}"),
    }
}

#[test]
fn assignment_with_arithmetic() {
    assert_eq!(
        kinds("total <- a + 3.5 * b"),
        vec![
            TokenKind::Ident("total".into()),
            TokenKind::Arrow,
            TokenKind::Ident("a".into()),
            TokenKind::Plus,
            TokenKind::Number(3.5),
            TokenKind::Star,
            TokenKind::Ident("b".into()),
        ]
    );
}

#[test]
fn comparison_operators_prefer_longest_match() {
    assert_eq!(
        kinds("a <= b >= c <> d < e"),
        vec![
            TokenKind::Ident("a".into()),
            TokenKind::LtEq,
            TokenKind::Ident("b".into()),
            TokenKind::GtEq,
            TokenKind::Ident("c".into()),
            TokenKind::NotEq,
            TokenKind::Ident("d".into()),
            TokenKind::Lt,
            TokenKind::Keyword(Keyword::E),
        ]
    );
}

#[test]
fn arrow_is_not_less_than_minus() {
    assert_eq!(
        kinds("x<-1"),
        vec![TokenKind::Ident("x".into()), TokenKind::Arrow, TokenKind::Number(1.0)]
    );
    assert_eq!(
        kinds("x < -1"),
        vec![
            TokenKind::Ident("x".into()),
            TokenKind::Lt,
            TokenKind::Minus,
            TokenKind::Number(1.0),
        ]
    );
}

#[test]
fn accented_identifiers_and_keywords() {
    assert_eq!(
        kinds("SE número > 0 ENTÃO"),
        vec![
            TokenKind::Keyword(Keyword::Se),
            TokenKind::Ident("número".into()),
            TokenKind::Gt,
            TokenKind::Number(0.0),
            TokenKind::Keyword(Keyword::Entao),
        ]
    );
}

#[test]
fn string_literals_in_both_quote_styles() {
    assert_eq!(
        kinds(r#"IMPRIMA 'olá', "mundo\n""#),
        vec![
            TokenKind::Keyword(Keyword::Imprima),
            TokenKind::Str("olá".into()),
            TokenKind::Comma,
            TokenKind::Str("mundo\n".into()),
        ]
    );
}

#[test]
fn spans_point_into_the_line() {
    let line = lex_line(4, "v[i] <- 0").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(line.number, 4);
    assert_eq!(line.tokens[1].span, Span::new(1, 2));
    assert_eq!(line.tokens[4].span.column(), 6);
}

#[test]
fn invalid_character_reports_column() {
    assert_eq!(
        lex_line(2, "x <- 1 @ 2"),
        Err(LexError::new(2, 8, LexErrorKind::InvalidCharacter('@')))
    );
}

#[test]
fn unterminated_string_reports_column() {
    assert_eq!(
        lex_line(5, "IMPRIMA 'oi"),
        Err(LexError::new(5, 9, LexErrorKind::UnterminatedString))
    );
}

#[test]
fn tokenize_numbers_lines_from_source() {
    let lines = tokenize("x <- 1\n\n// nada\nIMPRIMA x").unwrap_or_else(|e| panic!("{e}"));
    let numbers: Vec<u32> = lines.iter().map(|l| l.number).collect();
    assert_eq!(numbers, vec![1, 4]);
    assert_eq!(lines[1].leading_keyword(), Some(Keyword::Imprima));
}

#[test]
fn tokenize_surfaces_the_failing_line() {
    let err = tokenize("x <- 1\ny <- 'aberto").err();
    assert_eq!(err.map(|e| e.line), Some(2));
}
