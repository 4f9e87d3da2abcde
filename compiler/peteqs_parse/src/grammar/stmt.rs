//! Single-line statements and block headers.

use peteqs_diagnostic::errors::{
    parse_error, return_outside_callable, unknown_statement, unmatched_terminator,
};
use peteqs_diagnostic::InterpretResult;
use peteqs_ir::{AssignTarget, CallableKind, Expr, Keyword, StmtKind, TokenKind};

use super::{Context, Parser};

impl Parser<'_> {
    /// Parse a statement that occupies exactly one line.
    ///
    /// `text` is the line as written, used in "unknown statement" messages.
    pub(crate) fn parse_simple_stmt(&mut self, text: &str) -> InterpretResult<StmtKind> {
        let line = self.cursor.line();
        let Some(kind) = self.cursor.current_kind() else {
            return Err(unknown_statement(text, line));
        };

        let stmt = match kind {
            TokenKind::Keyword(Keyword::Imprima) => {
                self.cursor.advance();
                StmtKind::Print(self.parse_print_args()?)
            }
            TokenKind::Keyword(Keyword::ImprimaLn) => {
                self.cursor.advance();
                StmtKind::PrintLine(self.parse_print_args()?)
            }
            TokenKind::Keyword(Keyword::Leia) => {
                self.cursor.advance();
                StmtKind::Read(self.parse_read_targets()?)
            }
            TokenKind::Keyword(Keyword::Retorne) => {
                if self.context == Context::Main {
                    return Err(return_outside_callable(line));
                }
                self.cursor.advance();
                let value = if self.cursor.is_at_end() {
                    None
                } else {
                    Some(self.parse_expr()?)
                };
                StmtKind::Return(value)
            }
            TokenKind::Keyword(Keyword::Fim | Keyword::Senao) => {
                return Err(unmatched_terminator(text, line));
            }
            TokenKind::Ident(name) => self.parse_name_stmt(name.clone(), text)?,
            _ => return Err(unknown_statement(text, line)),
        };

        self.cursor.expect_end()?;
        Ok(stmt)
    }

    /// Statements that start with a name: assignment, element assignment or
    /// a call.
    fn parse_name_stmt(&mut self, name: String, text: &str) -> InterpretResult<StmtKind> {
        match self.cursor.peek_next_kind() {
            Some(TokenKind::Arrow) => {
                self.cursor.advance();
                self.cursor.advance();
                let value = self.parse_expr()?;
                Ok(StmtKind::Assign { name, value })
            }
            Some(TokenKind::LBracket) => {
                self.cursor.advance();
                self.cursor.advance();
                let index = self.parse_expr()?;
                self.cursor.expect(&TokenKind::RBracket)?;
                self.cursor.expect(&TokenKind::Arrow)?;
                let value = self.parse_expr()?;
                Ok(StmtKind::ArrayAssign { name, index, value })
            }
            Some(TokenKind::LParen) => {
                self.cursor.advance();
                let args = self.parse_call_args()?;
                Ok(StmtKind::Call { name, args })
            }
            _ => Err(unknown_statement(text, self.cursor.line())),
        }
    }

    /// Print arguments: comma-separated or juxtaposed, possibly none.
    fn parse_print_args(&mut self) -> InterpretResult<Vec<Expr>> {
        let mut args = Vec::new();
        while !self.cursor.is_at_end() {
            args.push(self.parse_expr()?);
            self.cursor.eat(&TokenKind::Comma);
        }
        Ok(args)
    }

    /// `LEIA` targets: `nome` or `nome[indice]`, comma-separated.
    fn parse_read_targets(&mut self) -> InterpretResult<Vec<AssignTarget>> {
        let mut targets = Vec::new();
        loop {
            let name = self.cursor.expect_ident("uma variável")?;
            if self.cursor.eat(&TokenKind::LBracket) {
                let index = self.parse_expr()?;
                self.cursor.expect(&TokenKind::RBracket)?;
                targets.push(AssignTarget::Element { name, index });
            } else {
                targets.push(AssignTarget::Var(name));
            }
            if !self.cursor.eat(&TokenKind::Comma) {
                return Ok(targets);
            }
        }
    }

    /// `SE cond ENTÃO`
    pub(crate) fn parse_if_header(&mut self) -> InterpretResult<Expr> {
        self.cursor.expect_keyword(Keyword::Se)?;
        let cond = self.parse_expr()?;
        self.cursor.expect_keyword(Keyword::Entao)?;
        self.cursor.expect_end()?;
        Ok(cond)
    }

    /// `SENÃO` alone on its line.
    pub(crate) fn parse_alternate_marker(&mut self) -> InterpretResult<()> {
        self.cursor.expect_keyword(Keyword::Senao)?;
        self.cursor.expect_end()
    }

    /// `PARA v <- a ATÉ b FAÇA`
    pub(crate) fn parse_for_header(&mut self) -> InterpretResult<(String, Expr, Expr)> {
        self.cursor.expect_keyword(Keyword::Para)?;
        let var = self.cursor.expect_ident("a variável do laço")?;
        self.cursor.expect(&TokenKind::Arrow)?;
        let start = self.parse_expr()?;
        self.cursor.expect_keyword(Keyword::Ate)?;
        let end = self.parse_expr()?;
        self.cursor.expect_keyword(Keyword::Faca)?;
        self.cursor.expect_end()?;
        Ok((var, start, end))
    }

    /// `ENQUANTO cond FAÇA`
    pub(crate) fn parse_while_header(&mut self) -> InterpretResult<Expr> {
        self.cursor.expect_keyword(Keyword::Enquanto)?;
        let cond = self.parse_expr()?;
        self.cursor.expect_keyword(Keyword::Faca)?;
        self.cursor.expect_end()?;
        Ok(cond)
    }

    /// `REPITA n VEZES`
    pub(crate) fn parse_repeat_header(&mut self) -> InterpretResult<Expr> {
        self.cursor.expect_keyword(Keyword::Repita)?;
        let count = self.parse_expr()?;
        self.cursor.expect_keyword(Keyword::Vezes)?;
        self.cursor.expect_end()?;
        Ok(count)
    }

    /// `FUNÇÃO nome(p, ...)` or `PROCEDIMENTO nome[(p, ...)]`.
    pub(crate) fn parse_callable_header(
        &mut self,
        kind: CallableKind,
    ) -> InterpretResult<(String, Vec<String>)> {
        let opener = match kind {
            CallableKind::Function => Keyword::Funcao,
            CallableKind::Procedure => Keyword::Procedimento,
        };
        self.cursor.expect_keyword(opener)?;
        let name = self.cursor.expect_ident("o nome")?;

        let mut params: Vec<String> = Vec::new();
        let has_parens = match kind {
            CallableKind::Function => {
                self.cursor.expect(&TokenKind::LParen)?;
                true
            }
            CallableKind::Procedure => self.cursor.eat(&TokenKind::LParen),
        };
        if has_parens && !self.cursor.eat(&TokenKind::RParen) {
            loop {
                let param = self.cursor.expect_ident("um parâmetro")?;
                if params.contains(&param) {
                    return Err(parse_error(
                        format!("parâmetro '{param}' repetido em {name}"),
                        self.cursor.line(),
                    ));
                }
                params.push(param);
                if self.cursor.eat(&TokenKind::Comma) {
                    continue;
                }
                self.cursor.expect(&TokenKind::RParen)?;
                break;
            }
        }

        self.cursor.expect_end()?;
        Ok((name, params))
    }
}
