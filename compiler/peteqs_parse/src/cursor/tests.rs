#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use peteqs_diagnostic::ErrorKind;
use pretty_assertions::assert_eq;

fn line(text: &str) -> Line {
    peteqs_lexer::lex_line(7, text).unwrap()
}

#[test]
fn eat_and_expect_advance_only_on_match() {
    let line = line("x <- 1");
    let mut cursor = Cursor::new(&line);
    assert_eq!(cursor.expect_ident("um nome").unwrap(), "x");
    assert!(!cursor.eat(&TokenKind::Comma));
    assert!(cursor.eat(&TokenKind::Arrow));
    assert_eq!(cursor.current_kind(), Some(&TokenKind::Number(1.0)));
    assert!(cursor.advance().is_some());
    assert!(cursor.is_at_end());
    assert!(cursor.advance().is_none());
    assert!(cursor.expect_end().is_ok());
}

#[test]
fn unexpected_token_names_expected_and_column() {
    let line = line("PARA i 1");
    let mut cursor = Cursor::new(&line);
    cursor.expect_keyword(Keyword::Para).unwrap();
    cursor.expect_ident("variável").unwrap();
    let err = cursor.expect(&TokenKind::Arrow).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ParseError);
    assert_eq!(err.line, Some(7));
    assert_eq!(err.message, "esperado `<-`, encontrado número `1` (coluna 8)");
}

#[test]
fn end_of_line_is_reported_as_such() {
    let line = line("SE x");
    let mut cursor = Cursor::new(&line);
    cursor.advance();
    cursor.advance();
    let err = cursor.expect_keyword(Keyword::Entao).unwrap_err();
    assert_eq!(err.message, "esperado `ENTÃO` antes do fim da linha");
}

#[test]
fn trailing_tokens_are_rejected() {
    let line = line("x y");
    let mut cursor = Cursor::new(&line);
    cursor.advance();
    let err = cursor.expect_end().unwrap_err();
    assert_eq!(err.message, "texto inesperado após o comando: `y` (coluna 3)");
}
