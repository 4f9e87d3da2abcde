use super::*;
use peteqs_ir::Keyword;
use pretty_assertions::assert_eq;

#[test]
fn unescape_one_level() {
    assert_eq!(unescape(r"a\nb"), "a\nb");
    assert_eq!(unescape(r"tab\there"), "tab\there");
    assert_eq!(unescape(r"it\'s"), "it's");
    assert_eq!(unescape(r#"say \"oi\""#), "say \"oi\"");
    assert_eq!(unescape(r"back\\slash"), r"back\slash");
    assert_eq!(unescape(r"\q"), "q");
    assert_eq!(unescape("trailing\\"), "trailing\\");
}

#[test]
fn words_resolve_to_keywords_or_identifiers() {
    assert_eq!(
        convert_token(RawToken::Word, "imprimaln"),
        Ok(TokenKind::Keyword(Keyword::ImprimaLn))
    );
    assert_eq!(
        convert_token(RawToken::Word, "soma"),
        Ok(TokenKind::Ident("soma".to_string()))
    );
}

#[test]
fn quoted_literals_drop_delimiters() {
    assert_eq!(
        convert_token(RawToken::SingleQuoted, "'olá'"),
        Ok(TokenKind::Str("olá".to_string()))
    );
    assert_eq!(
        convert_token(RawToken::DoubleQuoted, "\"\""),
        Ok(TokenKind::Str(String::new()))
    );
}

#[test]
fn unterminated_string_is_an_error() {
    assert_eq!(
        convert_token(RawToken::Unterminated, "'abc"),
        Err(LexErrorKind::UnterminatedString)
    );
}
