//! Token Conversion
//!
//! Converts raw logos tokens to final `TokenKind`, resolving keywords and
//! unescaping string literals.

use peteqs_ir::TokenKind;

use crate::keywords;
use crate::lex_error::LexErrorKind;
use crate::raw_token::RawToken;

/// Convert a raw token to a `TokenKind`.
pub(crate) fn convert_token(raw: RawToken, slice: &str) -> Result<TokenKind, LexErrorKind> {
    let kind = match raw {
        RawToken::Number => match slice.parse::<f64>() {
            Ok(n) => TokenKind::Number(n),
            Err(_) => return Err(LexErrorKind::InvalidNumber(slice.to_string())),
        },
        RawToken::SingleQuoted | RawToken::DoubleQuoted => {
            let content = &slice[1..slice.len() - 1];
            TokenKind::Str(unescape(content))
        }
        RawToken::Unterminated => return Err(LexErrorKind::UnterminatedString),
        RawToken::Word => match keywords::lookup(slice) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Ident(slice.to_string()),
        },
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,
    };
    Ok(kind)
}

/// Remove one level of backslash escaping.
///
/// `\n` and `\t` become control characters; any other `\c` yields `c`.
pub(crate) fn unescape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('t') => result.push('\t'),
                Some(other) => result.push(other),
                None => result.push('\\'),
            }
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests;
