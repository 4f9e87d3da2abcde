//! Primary expressions: literals, variables, element access, calls and
//! parenthesized groups.

use peteqs_diagnostic::InterpretResult;
use peteqs_ir::{Expr, Keyword, TokenKind};

use crate::grammar::Parser;

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> InterpretResult<Expr> {
        let Some(kind) = self.cursor.current_kind() else {
            return Err(self.cursor.unexpected("uma expressão"));
        };

        match kind {
            TokenKind::Number(n) => {
                let n = *n;
                self.cursor.advance();
                Ok(Expr::Number(n))
            }
            TokenKind::Str(s) => {
                let s = s.clone();
                self.cursor.advance();
                Ok(Expr::Str(s))
            }
            TokenKind::Keyword(Keyword::Verdadeiro) => {
                self.cursor.advance();
                Ok(Expr::Bool(true))
            }
            TokenKind::Keyword(Keyword::Falso) => {
                self.cursor.advance();
                Ok(Expr::Bool(false))
            }
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.cursor.advance();
                self.parse_name_suffix(name)
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.cursor.expect(&TokenKind::RParen)?;
                Ok(inner)
            }
            _ => Err(self.cursor.unexpected("uma expressão")),
        }
    }

    /// After an identifier: `(args)` makes a call, `[index]` an element
    /// access, anything else a variable reference.
    fn parse_name_suffix(&mut self, name: String) -> InterpretResult<Expr> {
        if self.cursor.check(&TokenKind::LParen) {
            let args = self.parse_call_args()?;
            return Ok(Expr::Call { name, args });
        }
        if self.cursor.eat(&TokenKind::LBracket) {
            let index = self.parse_expr()?;
            self.cursor.expect(&TokenKind::RBracket)?;
            return Ok(Expr::Index {
                name,
                index: Box::new(index),
            });
        }
        Ok(Expr::Var(name))
    }

    /// Parse `( [expr {, expr}] )`.
    pub(crate) fn parse_call_args(&mut self) -> InterpretResult<Vec<Expr>> {
        self.cursor.expect(&TokenKind::LParen)?;
        let mut args = Vec::new();
        if self.cursor.eat(&TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_expr()?);
            if self.cursor.eat(&TokenKind::Comma) {
                continue;
            }
            self.cursor.expect(&TokenKind::RParen)?;
            return Ok(args);
        }
    }
}
