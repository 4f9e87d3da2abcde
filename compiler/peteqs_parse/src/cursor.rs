//! Token cursor for navigating one statement line.
//!
//! Every PETEQS statement fits on a single line, so the cursor never crosses
//! a line boundary: running out of tokens means "end of statement".

use peteqs_diagnostic::errors::{trailing_tokens, unexpected_end_of_line, unexpected_token};
use peteqs_diagnostic::{InterpretError, InterpretResult};
use peteqs_ir::{Keyword, Line, Token, TokenKind};

/// Cursor over the tokens of a single [`Line`].
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    line: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(line: &'a Line) -> Self {
        Cursor {
            tokens: &line.tokens,
            pos: 0,
            line: line.number,
        }
    }

    /// 1-based source line of the tokens.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> Option<&'a TokenKind> {
        self.current().map(|t| &t.kind)
    }

    /// One-token lookahead past the current token.
    #[inline]
    pub fn peek_next_kind(&self) -> Option<&'a TokenKind> {
        self.tokens.get(self.pos + 1).map(|t| &t.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Consume the current token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Check if the current token is exactly `kind`.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    #[inline]
    pub fn check_keyword(&self, kw: Keyword) -> bool {
        self.current_kind().and_then(TokenKind::keyword) == Some(kw)
    }

    /// Consume the current token if it is exactly `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn eat_keyword(&mut self, kw: Keyword) -> bool {
        if self.check_keyword(kw) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, kind: &TokenKind) -> InterpretResult<()> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.unexpected(&kind.describe()))
        }
    }

    pub fn expect_keyword(&mut self, kw: Keyword) -> InterpretResult<()> {
        if self.eat_keyword(kw) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("`{kw}`")))
        }
    }

    /// Consume an identifier and return its name.
    pub fn expect_ident(&mut self, expected: &str) -> InterpretResult<String> {
        match self.current_kind() {
            Some(TokenKind::Ident(name)) => {
                self.pos += 1;
                Ok(name.clone())
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    /// Fail if any token remains on the line.
    pub fn expect_end(&self) -> InterpretResult<()> {
        match self.current() {
            None => Ok(()),
            Some(token) => Err(trailing_tokens(
                &token.kind.describe(),
                token.span.column(),
                self.line,
            )),
        }
    }

    /// Error for the current position: either an unexpected token or a
    /// premature end of line.
    #[cold]
    pub fn unexpected(&self, expected: &str) -> InterpretError {
        match self.current() {
            Some(token) => unexpected_token(
                &token.kind.describe(),
                expected,
                token.span.column(),
                self.line,
            ),
            None => unexpected_end_of_line(expected, self.line),
        }
    }
}

#[cfg(test)]
mod tests;
