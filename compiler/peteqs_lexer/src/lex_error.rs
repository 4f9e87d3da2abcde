//! Lexer error types.

use std::fmt;

/// A lexer error located by line and column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexError {
    /// 1-based source line.
    pub line: u32,
    /// 1-based column (byte offset within the line plus one).
    pub column: u32,
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Missing closing quote for a string literal.
    UnterminatedString,
    /// A character that starts no token.
    InvalidCharacter(char),
    /// Digits that do not form a number.
    InvalidNumber(String),
}

impl LexError {
    pub fn new(line: u32, column: u32, kind: LexErrorKind) -> Self {
        LexError { line, column, kind }
    }

    /// Human-readable message without the location prefix.
    pub fn message(&self) -> String {
        match &self.kind {
            LexErrorKind::UnterminatedString => {
                format!("texto sem aspas de fechamento na coluna {}", self.column)
            }
            LexErrorKind::InvalidCharacter(c) => {
                format!("caractere inválido '{c}' na coluna {}", self.column)
            }
            LexErrorKind::InvalidNumber(text) => {
                format!("número inválido '{text}' na coluna {}", self.column)
            }
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "linha {}: {}", self.line, self.message())
    }
}

impl std::error::Error for LexError {}
