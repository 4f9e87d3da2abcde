//! Expression parsing.
//!
//! Precedence, lowest to highest:
//!
//! | Level          | Operators              |
//! |----------------|------------------------|
//! | or             | `OU`                   |
//! | and            | `E`                    |
//! | equality       | `=` `<>`               |
//! | relational     | `<` `<=` `>` `>=`      |
//! | additive       | `+` `-`                |
//! | multiplicative | `*` `/` `MOD` `DIV`    |
//! | unary          | `NÃO` `-` `+`          |
//!
//! Every binary level is left-associative. Comparisons do not chain:
//! `a < b < c` parses as `(a < b) < c`.
//!
//! Nesting is capped at [`MAX_EXPR_DEPTH`] and the operator count per line
//! at [`MAX_LINE_OPERATORS`], which also bounds the depth of the tree that
//! evaluation and drop walk.

mod operators;
mod primary;

use peteqs_diagnostic::errors::{expression_too_deep, too_many_operators};
use peteqs_diagnostic::InterpretResult;
use peteqs_ir::{BinaryOp, Expr, Keyword, UnaryOp};
use peteqs_stack::ensure_sufficient_stack;

use crate::grammar::{Parser, MAX_EXPR_DEPTH, MAX_LINE_OPERATORS};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Every nested expression (parentheses, index, call argument) comes
    /// through here and counts one level.
    pub(crate) fn parse_expr(&mut self) -> InterpretResult<Expr> {
        self.nested(Self::parse_binary_or)
    }

    /// Run `parse` one nesting level deeper.
    fn nested(
        &mut self,
        parse: impl FnOnce(&mut Self) -> InterpretResult<Expr>,
    ) -> InterpretResult<Expr> {
        if self.depth >= MAX_EXPR_DEPTH {
            return Err(expression_too_deep(MAX_EXPR_DEPTH, self.cursor.line()));
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| parse(self));
        self.depth -= 1;
        result
    }

    /// Consume the operator token under the cursor and count it.
    fn take_operator(&mut self) -> InterpretResult<()> {
        self.cursor.advance();
        self.operators += 1;
        if self.operators > MAX_LINE_OPERATORS {
            return Err(too_many_operators(MAX_LINE_OPERATORS, self.cursor.line()));
        }
        Ok(())
    }

    /// Parse `OU` (lowest precedence binary).
    fn parse_binary_or(&mut self) -> InterpretResult<Expr> {
        let mut left = self.parse_binary_and()?;

        while self.cursor.check_keyword(Keyword::Ou) {
            self.take_operator()?;
            let right = self.parse_binary_and()?;
            left = Expr::binary(BinaryOp::Or, left, right);
        }

        Ok(left)
    }

    /// Parse `E` (logical and).
    fn parse_binary_and(&mut self) -> InterpretResult<Expr> {
        let mut left = self.parse_equality()?;

        while self.cursor.check_keyword(Keyword::E) {
            self.take_operator()?;
            let right = self.parse_equality()?;
            left = Expr::binary(BinaryOp::And, left, right);
        }

        Ok(left)
    }

    /// Parse `=` and `<>`.
    fn parse_equality(&mut self) -> InterpretResult<Expr> {
        let mut left = self.parse_relational()?;

        while let Some(op) = self.match_equality_op() {
            self.take_operator()?;
            let right = self.parse_relational()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `<`, `<=`, `>`, `>=`.
    fn parse_relational(&mut self) -> InterpretResult<Expr> {
        let mut left = self.parse_additive()?;

        while let Some(op) = self.match_relational_op() {
            self.take_operator()?;
            let right = self.parse_additive()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `+` and `-`.
    fn parse_additive(&mut self) -> InterpretResult<Expr> {
        let mut left = self.parse_multiplicative()?;

        while let Some(op) = self.match_additive_op() {
            self.take_operator()?;
            let right = self.parse_multiplicative()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `*`, `/`, `MOD` and `DIV`.
    fn parse_multiplicative(&mut self) -> InterpretResult<Expr> {
        let mut left = self.parse_unary()?;

        while let Some(op) = self.match_multiplicative_op() {
            self.take_operator()?;
            let right = self.parse_unary()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse prefix operators.
    ///
    /// A minus directly in front of a numeric literal folds into the literal,
    /// so `-5` is a number rather than a negation node.
    fn parse_unary(&mut self) -> InterpretResult<Expr> {
        let Some(op) = self.match_unary_op() else {
            return self.parse_primary();
        };
        self.take_operator()?;

        let operand = self.nested(Self::parse_unary)?;
        Ok(match (op, operand) {
            (UnaryOp::Neg, Expr::Number(n)) => Expr::Number(-n),
            (op, operand) => Expr::unary(op, operand),
        })
    }
}
