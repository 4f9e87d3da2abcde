//! Lexer for PETEQS pseudocode.
//!
//! Lexing happens in three stages:
//! 1. [`normalize`] rewrites raw source line by line (line endings, comments,
//!    assignment glyphs, keyword spelling) and reflows single-line programs
//! 2. [`segment`] turns normalized lines into trimmed statement lines
//! 3. [`lex_line`] tokenizes one statement line with a logos-generated DFA
//!
//! [`tokenize`] runs all three.

mod convert;
mod keywords;
mod lex_error;
mod normalize;
mod raw_token;
mod segment;

use logos::Logos;
use peteqs_ir::{Line, Span, Token};

pub use keywords::{fold, lookup as lookup_keyword};
pub use lex_error::{LexError, LexErrorKind};
pub use normalize::normalize;
pub use segment::{segment, SourceLine};

use raw_token::RawToken;

/// Tokenize a single statement line.
pub fn lex_line(number: u32, text: &str) -> Result<Line, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(text);

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let span = Span::from_range(range.clone());
        let raw = match result {
            Ok(raw) => raw,
            Err(()) => {
                let found = text
                    .get(range.start..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or('?');
                return Err(LexError::new(
                    number,
                    span.column(),
                    LexErrorKind::InvalidCharacter(found),
                ));
            }
        };
        let kind = convert::convert_token(raw, lexer.slice())
            .map_err(|kind| LexError::new(number, span.column(), kind))?;
        tokens.push(Token::new(kind, span));
    }

    Ok(Line {
        number,
        text: text.to_string(),
        tokens,
    })
}

/// Normalize, segment and tokenize a whole program.
pub fn tokenize(source: &str) -> Result<Vec<Line>, LexError> {
    segment(&normalize(source))
        .iter()
        .map(|line| lex_line(line.number, &line.text))
        .collect()
}

#[cfg(test)]
mod tests;
